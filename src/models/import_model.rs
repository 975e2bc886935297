use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Author document as stored in the legacy `authors` collection.
///
/// The biography fields exist in the source but have no column in the
/// relational schema; only `fullname` survives the migration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub fullname: String,
    #[serde(default)]
    pub born_date: Option<String>,
    #[serde(default)]
    pub born_location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Quote document as stored in the legacy `quotes` collection. `author`
/// holds the ObjectId of an author document.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub author: ObjectId,
    pub quote: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Full read-only snapshot of the source store, fetched before the target
/// transaction starts.
#[derive(Debug, Clone, Default)]
pub struct SourceSnapshot {
    pub authors: Vec<AuthorDocument>,
    pub quotes: Vec<QuoteDocument>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ImportSummary {
    /// Source authors processed (created or matched by name).
    pub authors: u64,
    /// Distinct tag names touched (created or matched by name).
    pub tags: u64,
    /// Quote rows created.
    pub quotes: u64,
}
