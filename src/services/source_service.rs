use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Client;

use crate::config::Config;
use crate::models::import_model::{AuthorDocument, QuoteDocument, SourceSnapshot};

/// Read-only client for the legacy document store. Connects lazily; the
/// import endpoint is the only caller.
#[derive(Clone)]
pub struct SourceService {
    uri: String,
    db_name: String,
}

impl SourceService {
    pub fn new(cfg: &Config) -> Self {
        let uri = format!(
            "mongodb+srv://{}:{}@{}/{}?retryWrites=true&w=majority",
            cfg.mongo_user, cfg.mongo_password, cfg.mongo_domain, cfg.mongo_db
        );
        Self {
            uri,
            db_name: cfg.mongo_db.clone(),
        }
    }

    /// Full scan of both collections into memory. The source is assumed to
    /// fit; there is no pagination contract.
    pub async fn fetch_snapshot(&self) -> Result<SourceSnapshot, mongodb::error::Error> {
        let client = Client::with_uri_str(&self.uri).await?;
        let db = client.database(&self.db_name);

        let mut authors = Vec::new();
        let mut cursor = db
            .collection::<AuthorDocument>("authors")
            .find(doc! {})
            .await?;
        while let Some(author) = cursor.try_next().await? {
            authors.push(author);
        }

        let mut quotes = Vec::new();
        let mut cursor = db
            .collection::<QuoteDocument>("quotes")
            .find(doc! {})
            .await?;
        while let Some(quote) = cursor.try_next().await? {
            quotes.push(quote);
        }

        tracing::info!(
            authors = authors.len(),
            quotes = quotes.len(),
            "fetched source snapshot"
        );

        Ok(SourceSnapshot { authors, quotes })
    }
}
