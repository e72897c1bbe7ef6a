//! Recursive file content dumping
//!
//! The content phase walks the tree a second time with its own filter
//! axes:
//!
//! - `Dumper`: work-list traversal; directories prune on the list axis,
//!   files are selected on the print axis
//! - `FilePrinter`: emits one file's bytes via an external command or the
//!   built-in reader

mod printer;
mod walker;

pub use printer::FilePrinter;
pub use walker::Dumper;
