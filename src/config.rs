use sea_orm::DatabaseConnection;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
    pub mongo_user: String,
    pub mongo_password: String,
    pub mongo_db: String,
    pub mongo_domain: String,
}

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}

impl Config {
    pub fn init() -> Config {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .expect("PORT must be a number");

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in .env");
        let jwt_expires_in = env::var("JWT_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "15".to_string())
            .parse::<i64>()
            .expect("JWT_EXPIRATION_MINUTES must be a number");

        // Legacy document store; only consulted by the import endpoint,
        // so an unconfigured source fails at import time, not at boot.
        let mongo_user = env::var("MONGO_USER").unwrap_or_default();
        let mongo_password = env::var("MONGO_PASSWORD").unwrap_or_default();
        let mongo_db = env::var("MONGO_DB").unwrap_or_default();
        let mongo_domain = env::var("MONGO_DOMAIN").unwrap_or_default();

        Config {
            server_host,
            server_port,
            database_url,
            jwt_secret,
            jwt_expires_in,
            mongo_user,
            mongo_password,
            mongo_db,
            mongo_domain,
        }
    }
}
