//! Tree renderer selection

use std::io;
use std::path::Path;
use std::process::Command;

use crate::config::ToolConfig;
use crate::filter::FilterSet;
use crate::tools;

use super::TreeWalker;

/// Which implementation draws the tree, decided once at startup.
pub enum TreeRenderer {
    /// Delegate to an external command, invoked with the root path
    /// appended to the configured arguments.
    External { program: String, args: Vec<String> },
    /// The built-in walker.
    Native { use_color: bool },
}

impl TreeRenderer {
    /// Choose the renderer.
    ///
    /// The external command cannot apply list filters, so any list-axis
    /// pattern forces the built-in walker. Returns the renderer and an
    /// optional info line explaining a fallback.
    pub fn select(
        config: &ToolConfig,
        list_filters: &FilterSet,
        force_native: bool,
        use_color: bool,
    ) -> (Self, Option<String>) {
        if force_native {
            return (Self::Native { use_color }, None);
        }

        if !tools::command_exists(&config.tree_command) {
            let info = format!(
                "Info: '{}' not found. Using built-in tree implementation.",
                config.tree_command
            );
            return (Self::Native { use_color }, Some(info));
        }

        if !list_filters.is_empty() {
            let info = format!(
                "Info: external '{}' command does not support filters. Using built-in tree.",
                config.tree_command
            );
            return (Self::Native { use_color }, Some(info));
        }

        match tools::split_command(&config.tree_command) {
            Some((program, args)) => (
                Self::External {
                    program: program.to_string(),
                    args: args.into_iter().map(str::to_string).collect(),
                },
                None,
            ),
            None => (Self::Native { use_color }, None),
        }
    }

    pub fn render(&self, root: &Path, list_filters: &FilterSet) -> io::Result<()> {
        match self {
            Self::External { program, args } => {
                match Command::new(program).args(args).arg(root).status() {
                    Ok(status) if status.success() => {}
                    Ok(status) => eprintln!("treecat: {} exited with {}", program, status),
                    Err(e) => eprintln!("treecat: failed to run {}: {}", program, e),
                }
                Ok(())
            }
            Self::Native { use_color } => {
                TreeWalker::new(root, list_filters, *use_color).print()
            }
        }
    }
}
