use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait};

use crate::{
    Database, DatabaseResult,
    favorite::{self, Favorite},
};

use super::{ActiveModel, Column, Model, NewModel, User};

impl Database {
    /// Every user paired with their favorite list, if they have one
    pub async fn get_all_users(&self) -> DatabaseResult<Vec<(Model, Option<favorite::Model>)>> {
        User::find()
            .find_also_related(favorite::Entity)
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn get_user_by_id(&self, id: i32) -> DatabaseResult<Option<Model>> {
        User::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// The active user with the lowest id
    pub async fn get_first_active_user(&self) -> DatabaseResult<Option<Model>> {
        User::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Creates a user together with its empty favorite list
    pub async fn create_user(
        &self,
        new_user: NewModel,
    ) -> DatabaseResult<(Model, favorite::Model)> {
        let txn = self.conn.begin().await?;

        let user = User::insert(ActiveModel {
            email: Set(new_user.email),
            password: Set(new_user.password),
            is_active: Set(new_user.is_active),
            ..Default::default()
        })
        .exec_with_returning(&txn)
        .await?;

        let favorite = Favorite::insert(favorite::ActiveModel {
            name: Set(new_user.favorite_name),
            user_id: Set(user.id),
            ..Default::default()
        })
        .exec_with_returning(&txn)
        .await?;

        txn.commit().await?;

        Ok((user, favorite))
    }
}
