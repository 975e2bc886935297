use std::collections::{HashMap, HashSet};

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use thiserror::Error;

use crate::models::import_model::{ImportSummary, SourceSnapshot};
use crate::repositories::catalog_repository::CatalogRepository;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The source store could not be reached or scanned. Raised before the
    /// target transaction starts, so nothing was written.
    #[error("source store error: {0}")]
    Source(#[from] mongodb::error::Error),

    /// Target store failure inside the transaction; everything rolls back.
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    /// A quote references an author ID that never appeared in the author
    /// collection. The source data is inconsistent and the run aborts.
    #[error("quote {quote_id} references unknown author {author_id}")]
    UnknownAuthor { quote_id: String, author_id: String },
}

pub struct ImportService;

impl ImportService {
    /// One-shot transfer of the source snapshot into the relational store.
    ///
    /// Two passes inside a single transaction: all authors first (building
    /// the source-ID to row-ID mapping), then every quote, resolving its
    /// author through the mapping and get-or-creating its tags by name. Any
    /// error drops the uncommitted transaction, leaving the store untouched.
    ///
    /// Authors and tags are matched by name, so re-running is harmless for
    /// them; quotes have no natural key and re-running duplicates them.
    pub async fn run(
        db: &DatabaseConnection,
        snapshot: SourceSnapshot,
    ) -> Result<ImportSummary, ImportError> {
        let txn = db.begin().await?;

        let mut author_ids: HashMap<String, i64> = HashMap::new();
        for doc in &snapshot.authors {
            let row = CatalogRepository::find_or_create_author(&txn, &doc.fullname).await?;
            author_ids.insert(doc.id.to_hex(), row.id);
        }

        let mut tag_names: HashSet<String> = HashSet::new();
        let mut quote_count: u64 = 0;

        for doc in &snapshot.quotes {
            let author_id = *author_ids.get(&doc.author.to_hex()).ok_or_else(|| {
                ImportError::UnknownAuthor {
                    quote_id: doc.id.to_hex(),
                    author_id: doc.author.to_hex(),
                }
            })?;

            let mut tag_ids = Vec::with_capacity(doc.tags.len());
            for name in &doc.tags {
                let tag = CatalogRepository::find_or_create_tag(&txn, name).await?;
                tag_ids.push(tag.id);
                tag_names.insert(name.clone());
            }

            CatalogRepository::create_quote(&txn, &doc.quote, author_id, &tag_ids).await?;
            quote_count += 1;
        }

        txn.commit().await?;

        Ok(ImportSummary {
            authors: author_ids.len() as u64,
            tags: tag_names.len() as u64,
            quotes: quote_count,
        })
    }
}
