//! All things related to the storage of aliases

use async_trait::async_trait;
use thiserror::Error;

use crate::aliases::Alias;
use crate::config::Config;

pub use sqlite::Sqlite;

#[cfg(test)]
pub mod memory;
mod sqlite;

/// Setup the storage
///
/// Creates the configuration directory when missing, opens the database and
/// runs the idempotent schema setup
pub async fn setup(config: &Config) -> Result<Sqlite> {
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| Error::Connection(err.to_string()))?;
    }

    let storage = Sqlite::connect(&config.database_path).await?;

    // even a failed schema setup leaves the pool closed
    if let Err(error) = storage.init().await {
        storage.close().await;

        return Err(error);
    }

    Ok(storage)
}

/// Storage errors
#[derive(Debug, Error)]
pub enum Error {
    /// A connection error with the storage
    #[error("Connection error: {0}")]
    Connection(String),

    /// A failed statement against an otherwise healthy storage
    #[error("Query error: {0}")]
    Query(String),
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Values to create an Alias
pub struct CreateAliasValues<'a> {
    /// The short name to store
    pub alias: &'a str,

    /// Where the alias points; may hold one `{{.}}` substitution point
    pub link: &'a str,

    /// Free-form description
    pub description: Option<&'a str>,

    /// Ordered tags; values must not contain commas
    pub tags: &'a [String],
}

/// Storage with all supported operations
#[async_trait]
pub trait Storage: Clone + Send + Sync + 'static {
    /// Idempotent schema creation
    ///
    /// Safe to call on every startup; never alters existing data
    async fn init(&self) -> Result<()>;

    /// Create a single alias
    ///
    /// Insert-only: an existing record under the same name is not an error,
    /// duplicates are permitted by design
    async fn create_alias(&self, values: &CreateAliasValues<'_>) -> Result<Alias>;

    /// Find a single alias by exact name
    ///
    /// When duplicates exist the most-recently-created record wins (highest
    /// row ID), so lookups stay deterministic
    async fn find_single_alias_by_name(&self, alias: &str) -> Result<Option<Alias>>;

    /// Find all aliases, newest first
    ///
    /// Returns at most `limit` records ordered by creation date descending;
    /// records sharing a timestamp keep their insertion order
    async fn find_all_aliases(&self, limit: i64) -> Result<Vec<Alias>>;

    /// Delete every record stored under a name
    ///
    /// Returns the number of removed rows; zero is a valid outcome
    async fn delete_aliases_by_name(&self, alias: &str) -> Result<u64>;
}
