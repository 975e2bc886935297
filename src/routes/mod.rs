use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppState;
use crate::handlers::health_check_handler;

pub mod auth_route;
pub mod import_route;
pub mod quote_route;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS, Method::DELETE])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/auth", auth_route::auth_routes(state.clone()))
        .nest("/api/quotes", quote_route::quote_routes(state.clone()))
        .nest("/api/authors", quote_route::author_routes(state.clone()))
        .nest("/api/tags", quote_route::tag_routes(state.clone()))
        .nest("/api/import", import_route::import_routes(state))
        .route("/api/health", get(health_check_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
