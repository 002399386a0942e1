use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database error: {0}")]
    DatabaseError(DbErr),
    #[error("not found")]
    NotFound,
    #[error("already exists")]
    AlreadyExists,
    #[error("could not connect to database")]
    ConnectionError,
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

// Unique and primary key violations are reported as `AlreadyExists`
impl From<DbErr> for DatabaseError {
    fn from(value: DbErr) -> Self {
        match value.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::AlreadyExists,
            _ => Self::DatabaseError(value),
        }
    }
}
