//! File content emission

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use crate::config::ToolConfig;
use crate::tools;

/// How file contents reach stdout, decided once at startup.
pub enum FilePrinter {
    /// Delegate to an external command with the file path appended.
    External { program: String, args: Vec<String> },
    /// Built-in byte copy.
    Native,
}

impl FilePrinter {
    /// Choose the printer: the configured command when present on `PATH`,
    /// else `cat`, else the built-in reader. `bat` gets flags that keep
    /// its output non-interactive.
    pub fn select(config: &ToolConfig, force_native: bool) -> Self {
        if force_native {
            return Self::Native;
        }

        if tools::command_exists(&config.file_command) {
            if let Some((program, args)) = tools::split_command(&config.file_command) {
                let mut args: Vec<String> = args.into_iter().map(str::to_string).collect();
                if program == "bat" {
                    args.push("--paging=never".to_string());
                    args.push("--style=full".to_string());
                }
                return Self::External {
                    program: program.to_string(),
                    args,
                };
            }
        }

        if tools::command_exists("cat") {
            return Self::External {
                program: "cat".to_string(),
                args: Vec::new(),
            };
        }

        Self::Native
    }

    /// Emit one file. Per-file failures are reported on stderr and never
    /// abort the run.
    pub fn print(&self, path: &Path) -> io::Result<()> {
        match self {
            Self::External { program, args } => {
                match Command::new(program).args(args).arg(path).status() {
                    Ok(status) if status.success() => {}
                    Ok(status) => eprintln!("treecat: {} exited with {}", program, status),
                    Err(e) => eprintln!("treecat: failed to run {}: {}", program, e),
                }
                Ok(())
            }
            Self::Native => {
                let mut file = match File::open(path) {
                    Ok(f) => f,
                    Err(_) => {
                        eprintln!("[Could not open file: {}]", path.display());
                        return Ok(());
                    }
                };
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                if let Err(e) = io::copy(&mut file, &mut lock) {
                    eprintln!("treecat: error reading {}: {}", path.display(), e);
                }
                lock.flush()
            }
        }
    }
}
