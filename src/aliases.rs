//! Aliases

use chrono::naive::NaiveDateTime;

/// A stored alias for a link
///
/// Aliases are insert-only: they are never updated in place, and nothing
/// enforces uniqueness on the alias name. When several records share a name,
/// the most-recently-created one wins at lookup time.
#[derive(Clone, Debug, PartialEq)]
pub struct Alias {
    /// Row ID, assigned by the store in insertion order
    pub id: i64,

    /// Optional display name
    ///
    /// Kept for schema compatibility; no operation writes it
    #[allow(dead_code)]
    pub name: Option<String>,

    /// The short name typed by the user
    pub alias: String,

    /// Where the alias points
    ///
    /// May contain a single `{{.}}` substitution point, in which case the
    /// alias acts as a prefix alias (see the resolver)
    pub link: String,

    /// Free-form description
    pub description: Option<String>,

    /// Ordered tags
    ///
    /// Serialized as one comma-joined column, so tag values must not
    /// contain commas
    pub tags: Vec<String>,

    /// Creation date, assigned by the store
    pub created_at: NaiveDateTime,
}

/// Join tags into the single stored column
pub fn tags_to_column(tags: &[String]) -> String {
    tags.join(",")
}

/// Split the stored column back into tags
///
/// An empty column is an empty tag list, not a list of one empty tag
pub fn tags_from_column(column: &str) -> Vec<String> {
    if column.is_empty() {
        Vec::new()
    } else {
        column.split(',').map(String::from).collect()
    }
}
