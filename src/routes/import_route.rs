use axum::{middleware, routing::post, Router};

use crate::config::AppState;
use crate::handlers::import_handler::run_import_handler;
use crate::middleware::auth_middleware::auth_middleware;

pub fn import_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(run_import_handler))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
