use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, ports::UserRepository},
};
use crate::entity::users::{Column as UserColumn, Entity as UserEntity};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn fetch_users(&self) -> Result<Vec<User>, CoreError> {
        let users = UserEntity::find()
            .order_by_asc(UserColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch users: {}", e);
                CoreError::Database(e.to_string())
            })?
            .into_iter()
            .map(User::from)
            .collect();

        Ok(users)
    }
}
