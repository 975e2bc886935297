use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::config::AppState;
use crate::handlers::quote_handler::*;
use crate::middleware::auth_middleware::auth_middleware;

// Reads are public; anything that writes requires a logged-in user.

pub fn quote_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_quotes_handler))
        .route("/{id}", get(get_quote_handler));

    let protected = Router::new()
        .route("/", post(create_quote_handler))
        .route("/{id}", delete(delete_quote_handler))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

pub fn author_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_authors_handler))
        .route("/{id}/quotes", get(author_quotes_handler));

    let protected = Router::new()
        .route("/", post(create_author_handler))
        .route("/{id}", delete(delete_author_handler))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

pub fn tag_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_tags_handler))
        .route("/{id}/quotes", get(tag_quotes_handler));

    let protected = Router::new()
        .route("/", post(create_tag_handler))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
