use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct CreateAuthorRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    #[validate(length(min = 3, max = 120, message = "Author name must be 3-120 characters"))]
    pub name: String,
}

#[derive(Deserialize, Validate)]
pub struct CreateTagRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    #[validate(length(min = 3, max = 25, message = "Tag name must be 3-25 characters"))]
    pub name: String,
}

#[derive(Deserialize, Validate)]
pub struct CreateQuoteRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    #[validate(length(min = 10, max = 250, message = "Quote text must be 10-250 characters"))]
    pub text: String,

    // Author public ID; the author must already exist.
    pub author: Option<Uuid>,

    // Tag public IDs, order irrelevant, duplicates collapsed.
    #[serde(default)]
    pub tags: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub id: Uuid,
    pub text: String,
    pub author: AuthorResponse,
    pub tags: Vec<TagResponse>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct QuoteListResponse {
    pub data: Vec<QuoteResponse>,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct AuthorQuotesResponse {
    pub author: AuthorResponse,
    pub quotes: Vec<QuoteResponse>,
}

#[derive(Debug, Serialize)]
pub struct TagQuotesResponse {
    pub tag: TagResponse,
    pub quotes: Vec<QuoteResponse>,
}
