use std::net::SocketAddr;

use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

use quotes_backend::config::{AppState, Config};
use quotes_backend::routes;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let cfg = Config::init();
    tracing::info!("starting quotes backend");

    // 1. Database connection
    let db = Database::connect(&cfg.database_url)
        .await
        .expect("Failed to connect to database");

    // 2. Schema migration
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("database ready");

    // 3. Build app state
    let state = AppState {
        db,
        config: cfg.clone(),
    };

    // 4. Initialize router
    let app = routes::create_routes(state.clone()).with_state(state);

    // 5. Start server
    let addr_str = format!("{}:{}", cfg.server_host, cfg.server_port);
    let addr: SocketAddr = addr_str.parse().expect("Invalid address");

    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
