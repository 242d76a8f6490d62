//! Launch context configuration
//!
//! Every command runs against one named context, each with its own database
//! file under `~/.config/goto/`. The context comes from the `GOTO_CONTEXT`
//! environment variable and is resolved exactly once at startup; the core
//! only ever sees the resulting [`Config`] value.

use std::path::PathBuf;

use crate::utils::env_var_or_else;

/// Context used when `GOTO_CONTEXT` is not set
pub const DEFAULT_CONTEXT: &str = "default";

/// Schema generation, part of the database file name so future layout
/// changes can live next to old files
const SCHEMA_GENERATION: u8 = 1;

/// Resolved launch context
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the context
    pub context: String,

    /// Database file backing the context
    pub database_path: PathBuf,
}

impl Config {
    /// Resolve the context from the environment
    pub fn from_env() -> Self {
        let context = env_var_or_else("GOTO_CONTEXT", || String::from(DEFAULT_CONTEXT));

        Self::with_context(context)
    }

    /// Resolve a specific, named context
    pub fn with_context(context: String) -> Self {
        let database_path = config_dir().join(format!("{context}.{SCHEMA_GENERATION}.db"));

        Self {
            context,
            database_path,
        }
    }
}

/// Directory holding every context database
fn config_dir() -> PathBuf {
    let home = std::env::var_os("HOME").unwrap_or_default();

    PathBuf::from(home).join(".config").join("goto")
}
