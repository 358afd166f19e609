use clap::Parser;
use glukosa_core::domain::common::{DatabaseConfig, GlukosaConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "glukosa-api", about = "Diabetes self-assessment HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/glukosa".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://localhost:8000"
    )]
    pub allowed_origins: Vec<String>,

    /// Prebuilt frontend directory, served when it exists at startup.
    #[arg(long, env = "STATIC_DIR", default_value = "./frontend")]
    pub static_dir: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-port", env = "DATABASE_PORT", default_value = "5432")]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "")]
    pub password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "diabetes_db")]
    pub name: String,
}

impl From<Args> for GlukosaConfig {
    fn from(args: Args) -> Self {
        GlukosaConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
        }
    }
}
