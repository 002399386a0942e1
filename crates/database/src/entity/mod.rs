pub mod character;
pub mod favorite;
pub mod favorite_character;
pub mod favorite_planet;
pub mod favorite_vehicle;
pub mod planet;
pub mod user;
pub mod vehicle;

use sea_orm::{ActiveValue, Set, Value};

// Overwrites an active model field only when the caller supplied a value,
// leaving it `Unchanged` otherwise so it stays out of the UPDATE statement
pub(crate) fn set_if_present<V>(field: &mut ActiveValue<V>, value: Option<V>)
where
    V: Into<Value>,
{
    if let Some(value) = value {
        *field = Set(value);
    }
}

#[cfg(test)]
pub(crate) mod fixtures;
