//! Treecat - display a directory tree and the contents of matching files

pub mod config;
pub mod dump;
pub mod filter;
pub mod stdout_guard;
pub mod tools;
pub mod tree;

pub use config::ToolConfig;
pub use dump::{Dumper, FilePrinter};
pub use filter::{FilterSet, Filters, Pattern, RelPath, pattern_matches};
pub use stdout_guard::StdoutGuard;
pub use tree::{TreeRenderer, TreeWalker};
