use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::{Database, DatabaseResult, entity::set_if_present};

use super::{ActiveModel, Column, Model, NewModel, Planet, UpdateModel};

impl Database {
    pub async fn get_all_planets(&self) -> DatabaseResult<Vec<Model>> {
        Planet::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn get_planet_by_id(&self, id: i32) -> DatabaseResult<Option<Model>> {
        Planet::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn create_planet(&self, new_planet: NewModel) -> DatabaseResult<Model> {
        let planet = ActiveModel {
            name: Set(new_planet.name),
            description: Set(new_planet.description),
            diameter: Set(new_planet.diameter),
            rotation_period: Set(new_planet.rotation_period),
            orbital_period: Set(new_planet.orbital_period),
            gravity: Set(new_planet.gravity),
            population: Set(new_planet.population),
            climate: Set(new_planet.climate),
            terrain: Set(new_planet.terrain),
            surface_water: Set(new_planet.surface_water),
            url: Set(new_planet.url),
            ..Default::default()
        };

        Ok(Planet::insert(planet).exec_with_returning(&self.conn).await?)
    }

    /// Applies the fields present in `input`, returns `None` if the planet does not exist
    pub async fn update_planet(&self, id: i32, input: UpdateModel) -> DatabaseResult<Option<Model>> {
        let Some(existing) = self.get_planet_by_id(id).await? else {
            return Ok(None);
        };

        let mut planet: ActiveModel = existing.clone().into();

        set_if_present(&mut planet.name, input.name);
        set_if_present(&mut planet.description, input.description);
        set_if_present(&mut planet.diameter, input.diameter);
        set_if_present(&mut planet.rotation_period, input.rotation_period);
        set_if_present(&mut planet.orbital_period, input.orbital_period);
        set_if_present(&mut planet.gravity, input.gravity);
        set_if_present(&mut planet.population, input.population);
        set_if_present(&mut planet.climate, input.climate);
        set_if_present(&mut planet.terrain, input.terrain);
        set_if_present(&mut planet.surface_water, input.surface_water);
        set_if_present(&mut planet.url, input.url);

        if !planet.is_changed() {
            return Ok(Some(existing));
        }

        Ok(Some(planet.update(&self.conn).await?))
    }

    /// Deletes a planet and returns the removed row, its favorite memberships cascade
    pub async fn delete_planet(&self, id: i32) -> DatabaseResult<Option<Model>> {
        let Some(planet) = self.get_planet_by_id(id).await? else {
            return Ok(None);
        };

        planet.clone().delete(&self.conn).await?;

        Ok(Some(planet))
    }
}
