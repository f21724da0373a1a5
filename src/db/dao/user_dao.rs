use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::User, user};

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn find_by_username(&self, username: &str) -> DaoResult<Option<user::Model>> {
        let user = User::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db())
            .await?;
        Ok(user)
    }

    pub async fn create_user(
        &self,
        name: &str,
        username: &str,
        password_hash: &str,
    ) -> DaoResult<i32> {
        let model = user::ActiveModel {
            name: Set(name.to_string()),
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            ..Default::default()
        }
        .insert(self.db())
        .await?;
        Ok(model.id)
    }
}
