use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use quotes_backend::config::Config;

/// Fresh in-memory database with the real schema applied. A single pooled
/// connection, otherwise every checkout would see its own empty memory db.
pub async fn setup_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None).await.expect("Failed to migrate");
    db
}

#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        jwt_expires_in: 15,
        mongo_user: String::new(),
        mongo_password: String::new(),
        mongo_db: String::new(),
        mongo_domain: String::new(),
    }
}
