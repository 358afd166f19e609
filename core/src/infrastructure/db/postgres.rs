use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Bound on concurrent connections. Excess requests queue on the pool with no
/// acquire timeout; see DESIGN.md for the accepted exhaustion risk.
const MAX_CONNECTIONS: u32 = 10;

pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options.max_connections(MAX_CONNECTIONS);

        let db = Database::connect(options).await?;
        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
