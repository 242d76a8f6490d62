//! Command line surface
//!
//! Three bookkeeping commands plus the default action: any other token is a
//! launch request, resolved and opened in the browser.

use clap::Parser;
use clap::Subcommand;

/// Goto, a personal alias launcher
#[derive(Debug, Parser)]
#[command(name = "goto", version, about)]
pub struct Cli {
    /// Context to run against, overriding `GOTO_CONTEXT`
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// All supported commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Map a short alias to a link
    ///
    /// The link may contain one `{{.}}` substitution point, making the
    /// alias usable as a prefix: `goto alias ticket
    /// https://issues.example.com/{{.}}` then `goto ticket/123`
    Alias {
        /// The short name to store
        alias: String,

        /// Where the alias points
        link: String,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,

        /// Link tags; repeat the flag for multiple tags
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// List stored aliases, newest first
    Ls {
        /// Maximum number of aliases to show
        #[arg(long, default_value_t = 100)]
        limit: i64,
    },

    /// Delete every record stored under an alias
    Rm {
        /// The alias to delete
        alias: String,
    },

    /// Resolve a token and open it in the browser
    #[command(external_subcommand)]
    Open(Vec<String>),
}
