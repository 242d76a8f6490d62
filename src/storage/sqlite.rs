//! SQLite storage
//!
//! One database file per context, created on first use

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::aliases::tags_from_column;
use crate::aliases::tags_to_column;
use crate::aliases::Alias;

use super::CreateAliasValues;
use super::Error;
use super::Result;
use super::Storage;

/// Aliases live in the `service` table
///
/// `name` is never written by any operation; it stays for compatibility with
/// databases created by earlier versions of the tool
const CREATE_SERVICE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS service (
        id INTEGER PRIMARY KEY AUTOINCREMENT,

        name TEXT,
        link TEXT NOT NULL,
        alias TEXT NOT NULL,
        description TEXT,
        tags TEXT,

        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
";

/// Append-only activity log
///
/// Created for future use; no core operation writes to it yet
const CREATE_LOG_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS log (
        id INTEGER PRIMARY KEY AUTOINCREMENT,

        link TEXT NOT NULL,
        alias TEXT NOT NULL,
        user TEXT,

        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
";

/// SQLite storage
#[derive(Clone)]
pub struct Sqlite {
    /// Pool of connections
    connection_pool: SqlitePool,
}

impl Sqlite {
    /// Open the database file, creating it when missing
    pub async fn connect(database_path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true);

        let connection_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await
            .map_err(connection_error)?;

        Ok(Self { connection_pool })
    }

    /// Close the pool, flushing the database file
    ///
    /// Called on every command path before exit, including failed ones
    pub async fn close(&self) {
        self.connection_pool.close().await;
    }
}

/// SQLite version of an alias row
#[derive(sqlx::FromRow)]
struct SqliteAlias {
    /// Row ID
    id: i64,

    /// Optional display name
    name: Option<String>,

    /// Where the alias points
    link: String,

    /// The short name
    alias: String,

    /// Free-form description
    description: Option<String>,

    /// Tags as one comma-joined column
    tags: Option<String>,

    /// Creation date
    created_at: NaiveDateTime,
}

impl Alias {
    /// Create alias from SQLite version
    fn from_sqlite_alias(alias: SqliteAlias) -> Self {
        Self {
            id: alias.id,
            name: alias.name,
            alias: alias.alias,
            link: alias.link,
            description: alias.description,
            tags: tags_from_column(alias.tags.as_deref().unwrap_or_default()),
            created_at: alias.created_at,
        }
    }

    /// Maybe create alias from SQLite version
    fn from_sqlite_alias_optional(alias: Option<SqliteAlias>) -> Option<Self> {
        alias.map(Self::from_sqlite_alias)
    }

    /// Create multiple aliases from SQLite version
    fn from_sqlite_alias_multiple(aliases: Vec<SqliteAlias>) -> Vec<Self> {
        aliases
            .into_iter()
            .map(Self::from_sqlite_alias)
            .collect::<Vec<Self>>()
    }
}

#[async_trait]
impl Storage for Sqlite {
    async fn init(&self) -> Result<()> {
        tracing::debug!("Initialising service table if not exists");

        sqlx::query(CREATE_SERVICE_TABLE)
            .execute(&self.connection_pool)
            .await
            .map_err(query_error)?;

        tracing::debug!("Initialising log table if not exists");

        sqlx::query(CREATE_LOG_TABLE)
            .execute(&self.connection_pool)
            .await
            .map_err(query_error)?;

        Ok(())
    }

    async fn create_alias(&self, values: &CreateAliasValues<'_>) -> Result<Alias> {
        let alias = sqlx::query_as::<_, SqliteAlias>(
            "
            INSERT INTO service (link, alias, description, tags)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, name, link, alias, description, tags, created_at
            ",
        )
        .bind(values.link)
        .bind(values.alias)
        .bind(values.description)
        .bind(tags_to_column(values.tags))
        .fetch_one(&self.connection_pool)
        .await
        .map(Alias::from_sqlite_alias)
        .map_err(query_error)?;

        Ok(alias)
    }

    async fn find_single_alias_by_name(&self, alias: &str) -> Result<Option<Alias>> {
        // Duplicate names are permitted; the highest row ID is the
        // most-recently-created record and wins the lookup
        let alias = sqlx::query_as::<_, SqliteAlias>(
            "
            SELECT id, name, link, alias, description, tags, created_at
            FROM service
            WHERE alias = ?1
            ORDER BY id DESC
            LIMIT 1
            ",
        )
        .bind(alias)
        .fetch_optional(&self.connection_pool)
        .await
        .map(Alias::from_sqlite_alias_optional)
        .map_err(query_error)?;

        Ok(alias)
    }

    async fn find_all_aliases(&self, limit: i64) -> Result<Vec<Alias>> {
        // Newest first; `created_at` only has second resolution, so rows
        // sharing a timestamp keep their insertion order
        let aliases = sqlx::query_as::<_, SqliteAlias>(
            "
            SELECT id, name, link, alias, description, tags, created_at
            FROM service
            ORDER BY datetime(created_at) DESC, id ASC
            LIMIT ?1
            ",
        )
        .bind(limit)
        .fetch_all(&self.connection_pool)
        .await
        .map(Alias::from_sqlite_alias_multiple)
        .map_err(query_error)?;

        Ok(aliases)
    }

    async fn delete_aliases_by_name(&self, alias: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM service WHERE alias = ?1")
            .bind(alias)
            .execute(&self.connection_pool)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected())
    }
}

/// Map any connection setup failure to a storage error
fn connection_error(error: sqlx::Error) -> Error {
    Error::Connection(error.to_string())
}

/// Map any statement failure to a storage error
fn query_error(error: sqlx::Error) -> Error {
    Error::Query(error.to_string())
}
