//! The resolver
//!
//! The most important part of Goto, turning a typed token into the URL to
//! open. Exact matches win outright; otherwise the token is split once at
//! its last `/` and the left side is looked up as a prefix alias whose link
//! is rendered as a template with the right side as argument.

use thiserror::Error;

use crate::storage;
use crate::storage::Storage;
use crate::template;

/// Resolver errors
///
/// A token that matches nothing is not an error, see [`Resolution::NotFound`]
#[derive(Debug, Error)]
pub enum Error {
    /// The storage failed underneath the lookup
    #[error(transparent)]
    Storage(#[from] storage::Error),

    /// A prefix alias matched but its stored link is broken
    #[error("alias {alias:?} has a broken link template: {source}")]
    Template {
        /// The matched prefix alias
        alias: String,

        /// What is wrong with its link
        source: template::Error,
    },
}

/// Outcome of a resolution
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The final URL to open
    Found(String),

    /// No alias matches the token; a normal outcome, not an error
    NotFound,
}

/// Resolve a token into a final URL
///
/// The lookup contract, in order:
///
/// 1. An exact match returns its link unmodified, even when the link
///    contains template syntax
/// 2. Without one, the token splits at its **last** `/` into a prefix and an
///    argument; a token without `/` cannot split and is not found
/// 3. The prefix gets one exact lookup, nothing recursive; no match means
///    the whole resolution is not found
/// 4. The matched link renders as a template with the argument substituted,
///    the empty string being a legal argument
pub async fn resolve<S: Storage>(storage: &S, token: &str) -> Result<Resolution, Error> {
    tracing::debug!(r#"Looking for exact alias "{token}""#);

    if let Some(alias) = storage.find_single_alias_by_name(token).await? {
        return Ok(Resolution::Found(alias.link));
    }

    let Some((prefix, argument)) = token.rsplit_once('/') else {
        tracing::debug!(r#"Token "{token}" has no prefix to fall back to"#);

        return Ok(Resolution::NotFound);
    };

    tracing::debug!(r#"Looking for prefix alias "{prefix}""#);

    let Some(alias) = storage.find_single_alias_by_name(prefix).await? else {
        return Ok(Resolution::NotFound);
    };

    tracing::debug!(r#"Found it, templating with argument "{argument}""#);

    let url = template::render(&alias.link, argument).map_err(|source| Error::Template {
        alias: alias.alias,
        source,
    })?;

    Ok(Resolution::Found(url))
}
