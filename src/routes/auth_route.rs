use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::config::AppState;
use crate::handlers::auth_handler::*;
use crate::middleware::auth_middleware::auth_middleware;

pub fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user_handler))
        .route("/login", post(login_user_handler))
        .route(
            "/profile",
            get(profile_handler)
                .route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}
