use axum::http::StatusCode;
use sea_orm::*;
use uuid::Uuid;

use crate::entities::{author, quote, quote::Entity as Quote, quote_tag, tag};
use crate::models::quote_model::*;
use crate::repositories::catalog_repository::CatalogRepository;

pub struct QuoteService;

impl QuoteService {
    pub async fn create_author(
        db: &DatabaseConnection,
        payload: CreateAuthorRequest,
    ) -> Result<AuthorResponse, (StatusCode, &'static str, String)> {
        let name = payload.name.trim().to_string();

        let exists = author::Entity::find()
            .filter(author::Column::Name.eq(&name))
            .one(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?;

        if exists.is_some() {
            return Err((
                StatusCode::CONFLICT,
                "AUTHOR_EXISTS",
                format!("Author '{}' already exists", name),
            ));
        }

        let saved = author::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            name: Set(name),
            created_at: Set(chrono::Utc::now()),
        }
        .insert(db)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", format!("Failed to create author: {}", e)))?;

        Ok(AuthorResponse {
            id: saved.public_id,
            name: saved.name,
        })
    }

    pub async fn list_authors(
        db: &DatabaseConnection,
    ) -> Result<Vec<AuthorResponse>, (StatusCode, &'static str, String)> {
        let authors = author::Entity::find()
            .order_by_asc(author::Column::Name)
            .all(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Failed to fetch authors".to_string()))?;

        Ok(authors
            .into_iter()
            .map(|a| AuthorResponse {
                id: a.public_id,
                name: a.name,
            })
            .collect())
    }

    /// Removing an author drops its quotes through the FK cascade.
    pub async fn delete_author(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let found = author::Entity::find()
            .filter(author::Column::PublicId.eq(public_id))
            .one(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "AUTHOR_NOT_FOUND", "Author not found".to_string()))?;

        author::Entity::delete_by_id(found.id)
            .exec(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", "Failed to delete author".to_string()))?;

        Ok(())
    }

    pub async fn create_tag(
        db: &DatabaseConnection,
        payload: CreateTagRequest,
    ) -> Result<TagResponse, (StatusCode, &'static str, String)> {
        let name = payload.name.trim().to_string();

        let exists = tag::Entity::find()
            .filter(tag::Column::Name.eq(&name))
            .one(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?;

        if exists.is_some() {
            return Err((
                StatusCode::CONFLICT,
                "TAG_EXISTS",
                format!("Tag '{}' already exists", name),
            ));
        }

        let saved = tag::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            name: Set(name),
            created_at: Set(chrono::Utc::now()),
        }
        .insert(db)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", format!("Failed to create tag: {}", e)))?;

        Ok(TagResponse {
            id: saved.public_id,
            name: saved.name,
        })
    }

    pub async fn list_tags(
        db: &DatabaseConnection,
    ) -> Result<Vec<TagResponse>, (StatusCode, &'static str, String)> {
        let tags = tag::Entity::find()
            .order_by_asc(tag::Column::Name)
            .all(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Failed to fetch tags".to_string()))?;

        Ok(tags
            .into_iter()
            .map(|t| TagResponse {
                id: t.public_id,
                name: t.name,
            })
            .collect())
    }

    pub async fn create_quote(
        db: &DatabaseConnection,
        payload: CreateQuoteRequest,
    ) -> Result<QuoteResponse, (StatusCode, &'static str, String)> {
        let author_public_id = payload.author.ok_or((
            StatusCode::BAD_REQUEST,
            "AUTHOR_REQUIRED",
            "Author must be selected".to_string(),
        ))?;

        let author = author::Entity::find()
            .filter(author::Column::PublicId.eq(author_public_id))
            .one(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::BAD_REQUEST, "AUTHOR_NOT_FOUND", format!("Author {} not found", author_public_id)))?;

        let txn = db.begin().await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "TXN_ERR", "Transaction start failed".to_string()))?;

        let mut tag_ids = Vec::with_capacity(payload.tags.len());
        for tag_uuid in &payload.tags {
            let tag = tag::Entity::find()
                .filter(tag::Column::PublicId.eq(*tag_uuid))
                .one(&txn)
                .await
                .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Tag lookup failed".to_string()))?
                .ok_or((StatusCode::BAD_REQUEST, "TAG_NOT_FOUND", format!("Tag with ID {} not found", tag_uuid)))?;
            tag_ids.push(tag.id);
        }

        let saved = CatalogRepository::create_quote(&txn, payload.text.trim(), author.id, &tag_ids)
            .await
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", format!("Failed to create quote: {}", e)))?;

        txn.commit().await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "TXN_COMMIT_ERR", "Transaction commit failed".to_string()))?;

        Self::get_quote(db, saved.public_id).await
    }

    pub async fn get_quote(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<QuoteResponse, (StatusCode, &'static str, String)> {
        let quote_opt = Quote::find()
            .filter(quote::Column::PublicId.eq(public_id))
            .find_also_related(author::Entity)
            .one(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?;

        let (quote, author_opt) = quote_opt
            .ok_or((StatusCode::NOT_FOUND, "QUOTE_NOT_FOUND", "Quote not found".to_string()))?;

        let author = author_opt
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "DATA_CORRUPT", "Quote has no author".to_string()))?;

        let tags = quote
            .find_related(tag::Entity)
            .all(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Failed to fetch tags".to_string()))?;

        Ok(Self::map_to_response(quote, tags, author))
    }

    pub async fn list_quotes(
        db: &DatabaseConnection,
    ) -> Result<QuoteListResponse, (StatusCode, &'static str, String)> {
        let quotes_with_authors = Quote::find()
            .find_also_related(author::Entity)
            .order_by_desc(quote::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Fetch failed".to_string()))?;

        let total = quotes_with_authors.len() as u64;
        let mut data = Vec::with_capacity(quotes_with_authors.len());
        for (q, author_opt) in quotes_with_authors {
            let author = author_opt
                .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "DATA_CORRUPT", "Quote has no author".to_string()))?;
            let tags = q.find_related(tag::Entity).all(db).await.unwrap_or_default();
            data.push(Self::map_to_response(q, tags, author));
        }

        Ok(QuoteListResponse { data, total })
    }

    pub async fn quotes_by_author(
        db: &DatabaseConnection,
        author_public_id: Uuid,
    ) -> Result<AuthorQuotesResponse, (StatusCode, &'static str, String)> {
        let author = author::Entity::find()
            .filter(author::Column::PublicId.eq(author_public_id))
            .one(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "AUTHOR_NOT_FOUND", "Author not found".to_string()))?;

        let quotes = Quote::find()
            .filter(quote::Column::AuthorId.eq(author.id))
            .order_by_desc(quote::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Fetch failed".to_string()))?;

        let mut data = Vec::with_capacity(quotes.len());
        for q in quotes {
            let tags = q.find_related(tag::Entity).all(db).await.unwrap_or_default();
            data.push(Self::map_to_response(q, tags, author.clone()));
        }

        Ok(AuthorQuotesResponse {
            author: AuthorResponse {
                id: author.public_id,
                name: author.name,
            },
            quotes: data,
        })
    }

    pub async fn quotes_by_tag(
        db: &DatabaseConnection,
        tag_public_id: Uuid,
    ) -> Result<TagQuotesResponse, (StatusCode, &'static str, String)> {
        let tag = tag::Entity::find()
            .filter(tag::Column::PublicId.eq(tag_public_id))
            .one(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "TAG_NOT_FOUND", "Tag not found".to_string()))?;

        let quotes_with_authors = Quote::find()
            .join(JoinType::InnerJoin, quote::Relation::QuoteTag.def())
            .filter(quote_tag::Column::TagId.eq(tag.id))
            .find_also_related(author::Entity)
            .order_by_desc(quote::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Fetch failed".to_string()))?;

        let mut data = Vec::with_capacity(quotes_with_authors.len());
        for (q, author_opt) in quotes_with_authors {
            let author = author_opt
                .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "DATA_CORRUPT", "Quote has no author".to_string()))?;
            let tags = q.find_related(tag::Entity).all(db).await.unwrap_or_default();
            data.push(Self::map_to_response(q, tags, author));
        }

        Ok(TagQuotesResponse {
            tag: TagResponse {
                id: tag.public_id,
                name: tag.name,
            },
            quotes: data,
        })
    }

    pub async fn delete_quote(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let found = Quote::find()
            .filter(quote::Column::PublicId.eq(public_id))
            .one(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "QUOTE_NOT_FOUND", "Quote not found".to_string()))?;

        quote::Entity::delete_by_id(found.id)
            .exec(db)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", "Failed to delete quote".to_string()))?;

        Ok(())
    }

    fn map_to_response(model: quote::Model, tags: Vec<tag::Model>, author: author::Model) -> QuoteResponse {
        QuoteResponse {
            id: model.public_id,
            text: model.text,
            author: AuthorResponse {
                id: author.public_id,
                name: author.name,
            },
            tags: tags
                .into_iter()
                .map(|t| TagResponse {
                    id: t.public_id,
                    name: t.name,
                })
                .collect(),
            created_at: model.created_at,
        }
    }
}
