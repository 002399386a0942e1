use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::{Database, DatabaseResult, entity::set_if_present};

use super::{ActiveModel, Column, Model, NewModel, UpdateModel, Vehicle};

impl Database {
    pub async fn get_all_vehicles(&self) -> DatabaseResult<Vec<Model>> {
        Vehicle::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn get_vehicle_by_id(&self, id: i32) -> DatabaseResult<Option<Model>> {
        Vehicle::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn create_vehicle(&self, new_vehicle: NewModel) -> DatabaseResult<Model> {
        let vehicle = ActiveModel {
            name: Set(new_vehicle.name),
            description: Set(new_vehicle.description),
            vehicle_model: Set(new_vehicle.vehicle_model),
            vehicle_class: Set(new_vehicle.vehicle_class),
            manufacturer: Set(new_vehicle.manufacturer),
            cost_in_credits: Set(new_vehicle.cost_in_credits),
            length: Set(new_vehicle.length),
            crew: Set(new_vehicle.crew),
            passengers: Set(new_vehicle.passengers),
            max_atmosphering_speed: Set(new_vehicle.max_atmosphering_speed),
            cargo_capacity: Set(new_vehicle.cargo_capacity),
            consumables: Set(new_vehicle.consumables),
            url: Set(new_vehicle.url),
            ..Default::default()
        };

        Ok(Vehicle::insert(vehicle)
            .exec_with_returning(&self.conn)
            .await?)
    }

    pub async fn update_vehicle(&self, id: i32, input: UpdateModel) -> DatabaseResult<Option<Model>> {
        let Some(existing) = self.get_vehicle_by_id(id).await? else {
            return Ok(None);
        };

        let mut vehicle: ActiveModel = existing.clone().into();

        set_if_present(&mut vehicle.name, input.name);
        set_if_present(&mut vehicle.description, input.description);
        set_if_present(&mut vehicle.vehicle_model, input.vehicle_model);
        set_if_present(&mut vehicle.vehicle_class, input.vehicle_class);
        set_if_present(&mut vehicle.manufacturer, input.manufacturer);
        set_if_present(&mut vehicle.cost_in_credits, input.cost_in_credits);
        set_if_present(&mut vehicle.length, input.length);
        set_if_present(&mut vehicle.crew, input.crew);
        set_if_present(&mut vehicle.passengers, input.passengers);
        set_if_present(
            &mut vehicle.max_atmosphering_speed,
            input.max_atmosphering_speed,
        );
        set_if_present(&mut vehicle.cargo_capacity, input.cargo_capacity);
        set_if_present(&mut vehicle.consumables, input.consumables);
        set_if_present(&mut vehicle.url, input.url);

        if !vehicle.is_changed() {
            return Ok(Some(existing));
        }

        Ok(Some(vehicle.update(&self.conn).await?))
    }

    pub async fn delete_vehicle(&self, id: i32) -> DatabaseResult<Option<Model>> {
        let Some(vehicle) = self.get_vehicle_by_id(id).await? else {
            return Ok(None);
        };

        vehicle.clone().delete(&self.conn).await?;

        Ok(Some(vehicle))
    }
}
