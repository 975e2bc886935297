use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::config::AppState;
use crate::models::quote_model::*;
use crate::services::quote_service::QuoteService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn list_quotes_handler(State(state): State<AppState>) -> impl IntoResponse {
    match QuoteService::list_quotes(&state.db).await {
        Ok(res) => ResponseBuilder::success("QUOTES_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn get_quote_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match QuoteService::get_quote(&state.db, id).await {
        Ok(res) => ResponseBuilder::success("QUOTE_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn create_quote_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateQuoteRequest>,
) -> impl IntoResponse {
    match QuoteService::create_quote(&state.db, payload).await {
        Ok(res) => ResponseBuilder::created("QUOTE_CREATED", "Quote created", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn delete_quote_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match QuoteService::delete_quote(&state.db, id).await {
        Ok(_) => ResponseBuilder::success::<()>("QUOTE_DELETED", "Quote deleted", ()).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn list_authors_handler(State(state): State<AppState>) -> impl IntoResponse {
    match QuoteService::list_authors(&state.db).await {
        Ok(res) => ResponseBuilder::success("AUTHORS_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn create_author_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAuthorRequest>,
) -> impl IntoResponse {
    match QuoteService::create_author(&state.db, payload).await {
        Ok(res) => ResponseBuilder::created("AUTHOR_CREATED", "Author created", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn author_quotes_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match QuoteService::quotes_by_author(&state.db, id).await {
        Ok(res) => ResponseBuilder::success("AUTHOR_QUOTES_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn delete_author_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match QuoteService::delete_author(&state.db, id).await {
        Ok(_) => {
            ResponseBuilder::success::<()>("AUTHOR_DELETED", "Author deleted", ()).into_response()
        }
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn list_tags_handler(State(state): State<AppState>) -> impl IntoResponse {
    match QuoteService::list_tags(&state.db).await {
        Ok(res) => ResponseBuilder::success("TAGS_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn create_tag_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTagRequest>,
) -> impl IntoResponse {
    match QuoteService::create_tag(&state.db, payload).await {
        Ok(res) => ResponseBuilder::created("TAG_CREATED", "Tag created successfully", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn tag_quotes_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match QuoteService::quotes_by_tag(&state.db, id).await {
        Ok(res) => ResponseBuilder::success("TAG_QUOTES_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}
