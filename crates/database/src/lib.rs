mod database;
mod entity;
mod errors;
#[cfg(feature = "migrations")]
mod migrations;
pub use database::*;
pub use entity::*;
pub use errors::*;
#[cfg(feature = "migrations")]
pub use migrations::*;
pub use sea_orm;
