//! Command handlers
//!
//! Thin glue between the parsed command line and the core: validation and
//! presentation live here, the lookup and persistence contracts do not.

use anyhow::bail;
use anyhow::Result;
use colored::Colorize;

use crate::launcher::open_browser;
use crate::resolver;
use crate::resolver::Resolution;
use crate::storage::CreateAliasValues;
use crate::storage::Storage;
use crate::template;

/// Create a single alias
///
/// Validates the link template up front: a broken or ambiguous template
/// would otherwise only surface later, at resolution time
pub async fn create_alias<S: Storage>(
    storage: &S,
    alias: &str,
    link: &str,
    description: Option<&str>,
    tags: &[String],
) -> Result<()> {
    if alias.is_empty() {
        bail!("an alias cannot be empty");
    }

    if link.is_empty() {
        bail!("a link cannot be empty");
    }

    match template::substitution_points(link) {
        Ok(points) if points > 1 => {
            bail!("a link may contain at most one {} substitution point", "{{.}}");
        }
        Err(error) => bail!("broken link template: {error}"),
        Ok(_) => {}
    }

    tracing::debug!("Creating alias {alias} -> {link} ({tags:?})");

    let created = storage
        .create_alias(&CreateAliasValues {
            alias,
            link,
            description,
            tags,
        })
        .await?;

    println!(
        "{} Added alias: {} -> {}",
        "✓".bold().green(),
        created.alias.cyan(),
        created.link.blue().underline()
    );

    Ok(())
}

/// List stored aliases, newest first
pub async fn list_aliases<S: Storage>(storage: &S, limit: i64) -> Result<()> {
    let aliases = storage.find_all_aliases(limit).await?;

    if aliases.is_empty() {
        println!("{} No aliases stored yet", "ℹ".bold().blue());

        return Ok(());
    }

    println!("{}", "Stored aliases:".bold().green());
    println!();

    for alias in &aliases {
        let mut info_parts = vec![format!(
            "{} -> {}",
            alias.alias.cyan(),
            alias.link.blue().underline()
        )];

        if let Some(description) = &alias.description {
            if !description.is_empty() {
                info_parts.push(description.clone());
            }
        }

        if !alias.tags.is_empty() {
            info_parts.push(format!("[{}]", alias.tags.join(", ")).dimmed().to_string());
        }

        info_parts.push(
            format!("(created: {})", alias.created_at.format("%Y-%m-%d %H:%M:%S"))
                .dimmed()
                .yellow()
                .to_string(),
        );

        println!("  {}", info_parts.join(" "));
    }

    println!();
    println!(
        "{} Total {} aliases",
        "ℹ".bold().blue(),
        aliases.len().to_string().green()
    );

    Ok(())
}

/// Delete every record stored under an alias
///
/// Removing nothing is a valid outcome, not an error
pub async fn delete_alias<S: Storage>(storage: &S, alias: &str) -> Result<()> {
    let removed = storage.delete_aliases_by_name(alias).await?;

    if removed == 0 {
        println!("{} Nothing stored under: {}", "ℹ".bold().blue(), alias.cyan());
    } else {
        println!(
            "{} Removed {removed} record(s) under: {}",
            "✓".bold().green(),
            alias.cyan()
        );
    }

    Ok(())
}

/// Resolve a token and open it in the browser
///
/// A token matching nothing is reported, not failed; a matching alias with a
/// broken link template is an error the user can act on
pub async fn launch<S: Storage>(storage: &S, token: &str) -> Result<()> {
    match resolver::resolve(storage, token).await {
        Ok(Resolution::Found(url)) => {
            println!("{} Opening: {}", "✓".bold().green(), url.blue().underline());

            open_browser(&url)?;

            Ok(())
        }
        Ok(Resolution::NotFound) => {
            println!("{} No alias matches: {}", "ℹ".bold().blue(), token.cyan());

            Ok(())
        }
        Err(error @ resolver::Error::Template { .. }) => {
            bail!("alias is misconfigured: {error}");
        }
        Err(error) => Err(error.into()),
    }
}
