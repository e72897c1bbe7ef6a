//! External tool configuration
//!
//! Which commands to delegate tree drawing and file printing to, loaded
//! from `<config_dir>/treecat/treecat.toml`. Missing files yield the
//! defaults; unparsable files yield the defaults with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_TREE_COMMAND: &str = "tree";
const DEFAULT_FILE_COMMAND: &str = "bat";

/// External commands used for the tree view and for file contents.
///
/// Constructed once at startup and passed down; never global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub tree_command: String,
    pub file_command: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tree_command: DEFAULT_TREE_COMMAND.to_string(),
            file_command: DEFAULT_FILE_COMMAND.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    tree_command: Option<String>,
    file_command: Option<String>,
}

impl ToolConfig {
    /// Load the configuration from the default location, falling back to
    /// the defaults when no config file exists.
    pub fn load() -> Self {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::default(),
        }
    }

    /// Load the configuration from an explicit path.
    ///
    /// Unreadable or unparsable files warn on stderr and yield the
    /// defaults so a broken config never blocks a run.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("treecat: cannot read config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        let parsed: ConfigFile = match toml::from_str(&content) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("treecat: cannot parse config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        let defaults = Self::default();
        Self {
            tree_command: parsed.tree_command.unwrap_or(defaults.tree_command),
            file_command: parsed.file_command.unwrap_or(defaults.file_command),
        }
    }
}

/// The default config file location, `<config_dir>/treecat/treecat.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("treecat").join("treecat.toml"))
}
