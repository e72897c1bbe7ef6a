//! Detection of stdout redirected into the traversal tree
//!
//! When output goes to a regular file, dumping that same file would feed
//! the program its own output. The guard records the redirect target's
//! identity at startup so the dumper can skip it.

use std::fs::Metadata;

/// Identity of the regular file stdout is redirected to, if any.
#[derive(Debug, Clone, Copy)]
pub struct StdoutGuard {
    dev: u64,
    ino: u64,
}

impl StdoutGuard {
    /// Capture stdout's identity. Returns `None` on a terminal, a pipe,
    /// or a platform without device/inode identity.
    #[cfg(unix)]
    pub fn detect() -> Option<Self> {
        use std::fs::File;
        use std::io::IsTerminal;
        use std::os::fd::AsFd;
        use std::os::unix::fs::MetadataExt;

        let stdout = std::io::stdout();
        if stdout.is_terminal() {
            return None;
        }

        // Duplicate the fd so the File can close without touching fd 1.
        let fd = stdout.as_fd().try_clone_to_owned().ok()?;
        let meta = File::from(fd).metadata().ok()?;
        if !meta.is_file() {
            return None;
        }
        Some(Self {
            dev: meta.dev(),
            ino: meta.ino(),
        })
    }

    #[cfg(not(unix))]
    pub fn detect() -> Option<Self> {
        None
    }

    /// Whether `meta` describes the same file stdout writes to.
    #[cfg(unix)]
    pub fn is_output_file(&self, meta: &Metadata) -> bool {
        use std::os::unix::fs::MetadataExt;

        meta.dev() == self.dev && meta.ino() == self.ino
    }

    #[cfg(not(unix))]
    pub fn is_output_file(&self, _meta: &Metadata) -> bool {
        false
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_is_output_file_compares_identity() {
        use std::os::unix::fs::MetadataExt;

        let file = tempfile::NamedTempFile::new().expect("temp file");
        let meta = file.path().metadata().expect("metadata");
        let guard = StdoutGuard {
            dev: meta.dev(),
            ino: meta.ino(),
        };
        assert!(guard.is_output_file(&meta));

        let other = tempfile::NamedTempFile::new().expect("temp file");
        let other_meta = other.path().metadata().expect("metadata");
        assert!(!guard.is_output_file(&other_meta));
    }
}
