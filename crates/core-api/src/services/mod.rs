pub mod character;
pub mod favorite;
pub mod planet;
mod router;
pub mod user;
pub mod vehicle;

pub use router::*;
