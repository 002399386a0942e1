mod models;
mod password;
mod router;

pub use models::*;
pub use router::*;
