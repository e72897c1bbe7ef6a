//! Helpers for resolving and splitting configured external commands

use std::env;
use std::path::Path;

/// Split a configured command string into the program and its leading
/// arguments. Splitting is on whitespace; the config format has no
/// quoting.
pub fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Check whether the program of a configured command is available.
///
/// Only the first whitespace-separated token is resolved, so `lsd --tree`
/// checks for `lsd`. Absolute and relative paths are checked directly;
/// bare names are searched on `PATH`.
pub fn command_exists(command: &str) -> bool {
    let Some((program, _)) = split_command(command) else {
        return false;
    };

    if program.contains('/') {
        return is_executable(Path::new(program));
    }

    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| is_executable(&dir.join(program)))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("bat"), Some(("bat", vec![])));
        assert_eq!(
            split_command("lsd --tree --depth 2"),
            Some(("lsd", vec!["--tree", "--depth", "2"]))
        );
        assert_eq!(split_command(""), None);
        assert_eq!(split_command("   "), None);
    }

    #[test]
    fn test_command_exists_for_shell() {
        // A POSIX shell is present on every supported CI host.
        #[cfg(unix)]
        assert!(command_exists("sh"));
        assert!(!command_exists("definitely-not-a-real-tool-name"));
        assert!(!command_exists(""));
    }
}
