//! Built-in tree renderer

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::filter::{FilterSet, RelPath};

/// Recursive tree printer consulting the list axis for every entry.
///
/// A hidden directory is neither displayed nor descended into. Entries are
/// printed in filename order; unreadable directories and entries whose
/// relative path cannot be derived are skipped without aborting the walk.
pub struct TreeWalker<'a> {
    root: &'a Path,
    filters: &'a FilterSet,
    use_color: bool,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: &'a Path, filters: &'a FilterSet, use_color: bool) -> Self {
        Self {
            root,
            filters,
            use_color,
        }
    }

    /// Print the root name and the filtered tree beneath it.
    pub fn print(&self) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        let name = self
            .root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(stdout, "{}", name)?;
        stdout.reset()?;
        writeln!(stdout, "/")?;

        self.print_dir(self.root, "", &mut stdout)
    }

    fn print_dir(&self, dir: &Path, prefix: &str, stdout: &mut StandardStream) -> io::Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(_) => return Ok(()),
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|e| e.file_name());

        // Filter before printing so connectors know which entry is last.
        let mut visible: Vec<(PathBuf, String, bool)> = Vec::new();
        for entry in entries {
            let path = entry.path();
            let Some(rel) = RelPath::new(self.root, &path) else {
                continue;
            };
            if !self.filters.is_visible(rel.path(), rel.name()) {
                continue;
            }
            // file_type does not follow symlinks, so a symlinked
            // directory is shown as a plain entry and never descended.
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            visible.push((path, rel.name().to_string(), is_dir));
        }

        let total = visible.len();
        for (i, (path, name, is_dir)) in visible.into_iter().enumerate() {
            let is_last = i + 1 == total;
            let connector = if is_last { "└── " } else { "├── " };
            write!(stdout, "{}{}", prefix, connector)?;

            if is_dir {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(stdout, "{}", name)?;
                stdout.reset()?;
                writeln!(stdout, "/")?;

                let new_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                self.print_dir(&path, &new_prefix, stdout)?;
            } else {
                writeln!(stdout, "{}", name)?;
            }
        }

        Ok(())
    }
}
