//! Link templates
//!
//! Stored links may carry a single substitution point, written `{{.}}`, that
//! the resolver fills in with the last path segment of the typed token. This
//! is the only templating feature links ever use, so the renderer stays
//! deliberately small.

use thiserror::Error;

/// Template errors
///
/// Distinct from a failed lookup: a matching alias exists, its stored link
/// is just broken
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A `{{` without its closing `}}`
    #[error("unclosed substitution point, missing \"}}}}\"")]
    Unclosed,

    /// Something other than `.` between the braces
    #[error("unsupported action {0:?} in substitution point")]
    UnsupportedAction(String),
}

/// Result type for template rendering
pub type Result<T> = core::result::Result<T, Error>;

/// Count the substitution points of a link
///
/// Used at alias-creation time to reject broken templates before they are
/// stored, rather than surfacing the error at resolution time
pub fn substitution_points(link: &str) -> Result<usize> {
    parse(link).map(|segments| {
        segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Point))
            .count()
    })
}

/// Render a link, substituting the argument at every point
///
/// A link without any substitution point renders to itself; the empty string
/// is a legal argument
pub fn render(link: &str, argument: &str) -> Result<String> {
    let mut url = String::with_capacity(link.len() + argument.len());

    for segment in parse(link)? {
        match segment {
            Segment::Literal(literal) => url.push_str(literal),
            Segment::Point => url.push_str(argument),
        }
    }

    Ok(url)
}

/// A parsed piece of a link template
enum Segment<'a> {
    /// Verbatim text
    Literal(&'a str),

    /// One `{{.}}` substitution point
    Point,
}

/// Split a link into literal text and substitution points
///
/// Only `{{` opens an action; a lone `}}` is literal text, matching the
/// templating semantics of the original tool
fn parse(link: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut rest = link;

    while let Some(start) = rest.find("{{") {
        let (literal, action) = rest.split_at(start);

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let action = &action[2..];
        let end = action.find("}}").ok_or(Error::Unclosed)?;

        let inner = action[..end].trim();
        if inner != "." {
            return Err(Error::UnsupportedAction(inner.to_string()));
        }

        segments.push(Segment::Point);
        rest = &action[end + 2..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }

    Ok(segments)
}
