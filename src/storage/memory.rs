//! Memory storage
//!
//! Will be destroyed on system shutdown; only used by tests

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::aliases::Alias;

use super::CreateAliasValues;
use super::Result;
use super::Storage;

/// An in-memory storage
///
/// Will be destroyed on system shutdown
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// All aliases in storage, in insertion order
    aliases: Arc<Mutex<Vec<Alias>>>,
}

impl Memory {
    /// Create a new empty Memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Memory storage seeded with existing records
    ///
    /// Lets tests control IDs and creation dates directly
    pub fn with_aliases(aliases: Vec<Alias>) -> Self {
        Self {
            aliases: Arc::new(Mutex::new(aliases)),
        }
    }
}

#[async_trait]
impl Storage for Memory {
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    async fn create_alias(&self, values: &CreateAliasValues<'_>) -> Result<Alias> {
        let mut aliases = self.aliases.lock().await;

        let alias = Alias {
            id: aliases.last().map_or(1, |alias| alias.id + 1),
            name: None,
            alias: values.alias.to_string(),
            link: values.link.to_string(),
            description: values.description.map(String::from),
            tags: values.tags.to_vec(),
            created_at: Utc::now().naive_utc(),
        };

        aliases.push(alias.clone());

        Ok(alias)
    }

    async fn find_single_alias_by_name(&self, alias: &str) -> Result<Option<Alias>> {
        // Insertion order makes the last match the most-recently-created one
        Ok(self
            .aliases
            .lock()
            .await
            .iter()
            .rev()
            .find(|candidate| candidate.alias == alias)
            .cloned())
    }

    async fn find_all_aliases(&self, limit: i64) -> Result<Vec<Alias>> {
        let aliases = self.aliases.lock().await;

        let mut aliases = aliases.clone();

        // Stable: records sharing a timestamp keep their insertion order
        aliases.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        aliases.truncate(usize::try_from(limit).unwrap_or_default());

        Ok(aliases)
    }

    async fn delete_aliases_by_name(&self, alias: &str) -> Result<u64> {
        let mut aliases = self.aliases.lock().await;

        let before = aliases.len();

        aliases.retain(|candidate| candidate.alias != alias);

        Ok((before - aliases.len()) as u64)
    }
}
