use chrono::naive::NaiveDateTime;
use chrono::NaiveDate;
use tempfile::TempDir;

use crate::aliases::Alias;
use crate::storage::CreateAliasValues;
use crate::storage::Sqlite;
use crate::storage::Storage;

/// Storage backed by a database file scoped to the test
pub async fn sqlite_storage(directory: &TempDir) -> Sqlite {
    let storage = Sqlite::connect(&directory.path().join("test.1.db"))
        .await
        .unwrap();

    storage.init().await.unwrap();

    storage
}

/// Create an alias without description or tags
pub async fn create<S: Storage>(storage: &S, alias: &str, link: &str) -> Alias {
    create_full(storage, alias, link, None, &[]).await
}

/// Create an alias with all its details
pub async fn create_full<S: Storage>(
    storage: &S,
    alias: &str,
    link: &str,
    description: Option<&str>,
    tags: &[String],
) -> Alias {
    storage
        .create_alias(&CreateAliasValues {
            alias,
            link,
            description,
            tags,
        })
        .await
        .unwrap()
}

/// An alias record with a chosen ID and creation date
///
/// For seeding the memory storage when a test needs control over ordering
pub fn record(id: i64, alias: &str, link: &str, created_at: NaiveDateTime) -> Alias {
    Alias {
        id,
        name: None,
        alias: alias.to_string(),
        link: link.to_string(),
        description: None,
        tags: Vec::new(),
        created_at,
    }
}

/// A creation date within a test's own timeline
pub fn creation_date(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}
