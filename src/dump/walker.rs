//! Work-list traversal for the content phase

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::filter::{Filters, RelPath};
use crate::stdout_guard::StdoutGuard;

use super::FilePrinter;

/// Walks the tree and emits the contents of every print-visible file.
///
/// Directories are checked against the list axis before their children
/// are pushed onto the work list, so a hidden subtree is never read at
/// all. Regular files are checked against the print axis; a hidden file
/// does not affect its siblings. Each emitted file is framed by a
/// `--- <relative path> ---` header and a trailing blank line.
pub struct Dumper<'a> {
    root: &'a Path,
    filters: &'a Filters,
    printer: &'a FilePrinter,
    guard: Option<StdoutGuard>,
}

impl<'a> Dumper<'a> {
    pub fn new(
        root: &'a Path,
        filters: &'a Filters,
        printer: &'a FilePrinter,
        guard: Option<StdoutGuard>,
    ) -> Self {
        Self {
            root,
            filters,
            printer,
            guard,
        }
    }

    pub fn run(&self) -> io::Result<()> {
        let mut pending = vec![self.root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            self.dump_dir(&dir, &mut pending)?;
        }
        Ok(())
    }

    /// Emit one directory's files and queue its visible subdirectories.
    fn dump_dir(&self, dir: &Path, pending: &mut Vec<PathBuf>) -> io::Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(_) => return Ok(()),
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|e| e.file_name());

        let mut subdirs = Vec::new();
        for entry in entries {
            let path = entry.path();
            // Underivable relative paths are hidden, never an abort.
            let Some(rel) = RelPath::new(self.root, &path) else {
                continue;
            };
            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                if self.filters.list.is_visible(rel.path(), rel.name()) {
                    subdirs.push(path);
                }
                continue;
            }

            // Regular files only; the metadata lookup follows symlinks,
            // while symlinked directories stay unvisited above.
            let Ok(meta) = fs::metadata(&path) else {
                continue;
            };
            if !meta.is_file() {
                continue;
            }

            if !self.filters.print.is_visible(rel.path(), rel.name()) {
                continue;
            }

            if let Some(guard) = &self.guard {
                if guard.is_output_file(&meta) {
                    eprintln!("--- {} ---", rel.path());
                    eprintln!("[Warning: skipping file to avoid I/O loop (file is program output)]");
                    println!();
                    continue;
                }
            }

            println!("--- {} ---", rel.path());
            self.printer.print(&path)?;
            println!();
        }

        // Reversed so the work list pops subdirectories in filename order.
        pending.extend(subdirs.into_iter().rev());
        Ok(())
    }
}
