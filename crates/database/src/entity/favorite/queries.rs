use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};

use crate::{
    Database, DatabaseError, DatabaseResult,
    entity::{character, favorite_planet, planet, vehicle},
};

use super::{Column, Contents, Favorite, Model};

impl Database {
    pub async fn get_favorite_by_user_id(&self, user_id: i32) -> DatabaseResult<Option<Model>> {
        Favorite::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Loads the planets, characters and vehicles that belong to a favorite list
    pub async fn get_favorite_contents(&self, favorite: Model) -> DatabaseResult<Contents> {
        let planets = favorite
            .find_related(planet::Entity)
            .order_by_asc(planet::Column::Id)
            .all(&self.conn)
            .await?;

        let characters = favorite
            .find_related(character::Entity)
            .order_by_asc(character::Column::Id)
            .all(&self.conn)
            .await?;

        let vehicles = favorite
            .find_related(vehicle::Entity)
            .order_by_asc(vehicle::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(Contents {
            favorite,
            planets,
            characters,
            vehicles,
        })
    }

    pub async fn is_favorite_planet(&self, favorite_id: i32, planet_id: i32) -> DatabaseResult<bool> {
        Ok(favorite_planet::Entity::find_by_id((favorite_id, planet_id))
            .one(&self.conn)
            .await?
            .is_some())
    }

    /// Adds a planet to a favorite list.
    ///
    /// Returns `DatabaseError::AlreadyExists` when the planet is already a member,
    /// either from the membership check or from the composite primary key when a
    /// concurrent request inserted the same pair first.
    pub async fn add_favorite_planet(&self, favorite_id: i32, planet_id: i32) -> DatabaseResult<()> {
        if self.is_favorite_planet(favorite_id, planet_id).await? {
            return Err(DatabaseError::AlreadyExists);
        }

        favorite_planet::Entity::insert(favorite_planet::ActiveModel {
            favorite_id: Set(favorite_id),
            planet_id: Set(planet_id),
        })
        .exec_without_returning(&self.conn)
        .await?;

        Ok(())
    }
}
