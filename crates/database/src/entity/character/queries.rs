use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::{Database, DatabaseResult, entity::set_if_present};

use super::{ActiveModel, Character, Column, Model, NewModel, UpdateModel};

impl Database {
    pub async fn get_all_characters(&self) -> DatabaseResult<Vec<Model>> {
        Character::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn get_character_by_id(&self, id: i32) -> DatabaseResult<Option<Model>> {
        Character::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn create_character(&self, new_character: NewModel) -> DatabaseResult<Model> {
        let character = ActiveModel {
            name: Set(new_character.name),
            description: Set(new_character.description),
            homeworld: Set(new_character.homeworld),
            height: Set(new_character.height),
            mass: Set(new_character.mass),
            hair_color: Set(new_character.hair_color),
            skin_color: Set(new_character.skin_color),
            eye_color: Set(new_character.eye_color),
            birth_year: Set(new_character.birth_year),
            gender: Set(new_character.gender),
            url: Set(new_character.url),
            ..Default::default()
        };

        Ok(Character::insert(character)
            .exec_with_returning(&self.conn)
            .await?)
    }

    pub async fn update_character(
        &self,
        id: i32,
        input: UpdateModel,
    ) -> DatabaseResult<Option<Model>> {
        let Some(existing) = self.get_character_by_id(id).await? else {
            return Ok(None);
        };

        let mut character: ActiveModel = existing.clone().into();

        set_if_present(&mut character.name, input.name);
        set_if_present(&mut character.description, input.description);
        set_if_present(&mut character.homeworld, input.homeworld);
        set_if_present(&mut character.height, input.height);
        set_if_present(&mut character.mass, input.mass);
        set_if_present(&mut character.hair_color, input.hair_color);
        set_if_present(&mut character.skin_color, input.skin_color);
        set_if_present(&mut character.eye_color, input.eye_color);
        set_if_present(&mut character.birth_year, input.birth_year);
        set_if_present(&mut character.gender, input.gender);
        set_if_present(&mut character.url, input.url);

        if !character.is_changed() {
            return Ok(Some(existing));
        }

        Ok(Some(character.update(&self.conn).await?))
    }

    pub async fn delete_character(&self, id: i32) -> DatabaseResult<Option<Model>> {
        let Some(character) = self.get_character_by_id(id).await? else {
            return Ok(None);
        };

        character.clone().delete(&self.conn).await?;

        Ok(Some(character))
    }
}
