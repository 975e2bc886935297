use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::entities::{author, quote, quote_tag, tag};

/// Row-level operations shared by the CRUD services and the import engine.
///
/// Every function is generic over [`ConnectionTrait`] so the caller decides
/// the transaction scope; the import engine passes one transaction for its
/// whole run.
pub struct CatalogRepository;

impl CatalogRepository {
    /// Return the author with this name, creating it if absent.
    pub async fn find_or_create_author<C>(conn: &C, name: &str) -> Result<author::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        if let Some(existing) = author::Entity::find()
            .filter(author::Column::Name.eq(name))
            .one(conn)
            .await?
        {
            return Ok(existing);
        }

        let new_author = author::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            name: Set(name.to_string()),
            created_at: Set(Utc::now()),
        };
        new_author.insert(conn).await
    }

    /// Return the tag with this name, creating it if absent.
    pub async fn find_or_create_tag<C>(conn: &C, name: &str) -> Result<tag::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        if let Some(existing) = tag::Entity::find()
            .filter(tag::Column::Name.eq(name))
            .one(conn)
            .await?
        {
            return Ok(existing);
        }

        let new_tag = tag::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            name: Set(name.to_string()),
            created_at: Set(Utc::now()),
        };
        new_tag.insert(conn).await
    }

    /// Insert a quote row and its tag links. `tag_ids` is collapsed to a
    /// set before linking, so repeated IDs cannot violate the composite key.
    pub async fn create_quote<C>(
        conn: &C,
        text: &str,
        author_id: i64,
        tag_ids: &[i64],
    ) -> Result<quote::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let new_quote = quote::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            text: Set(text.to_string()),
            author_id: Set(author_id),
            created_at: Set(Utc::now()),
        };
        let saved = new_quote.insert(conn).await?;

        let mut distinct: Vec<i64> = tag_ids.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        for tag_id in distinct {
            let link = quote_tag::ActiveModel {
                quote_id: Set(saved.id),
                tag_id: Set(tag_id),
            };
            link.insert(conn).await?;
        }

        Ok(saved)
    }
}
