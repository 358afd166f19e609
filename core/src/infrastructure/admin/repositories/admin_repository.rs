use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;

use crate::domain::{
    admin::{entities::Admin, ports::AdminRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::admin::{Column as AdminColumn, Entity as AdminEntity};

#[derive(Debug, Clone)]
pub struct PostgresAdminRepository {
    pub db: DatabaseConnection,
}

impl PostgresAdminRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AdminRepository for PostgresAdminRepository {
    async fn find_by_credentials(
        &self,
        name: String,
        sandi: String,
    ) -> Result<Option<Admin>, CoreError> {
        // Exact plaintext equality on both columns; name is unique so at most
        // one row matches.
        let admin = AdminEntity::find()
            .filter(AdminColumn::Name.eq(name))
            .filter(AdminColumn::Sandi.eq(sandi))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to look up admin credentials: {}", e);
                CoreError::Database(e.to_string())
            })?
            .map(Admin::from);

        Ok(admin)
    }
}
