//! CLI entry point for treecat

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use treecat::{Dumper, FilePrinter, FilterSet, Filters, StdoutGuard, ToolConfig, TreeRenderer};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treecat")]
#[command(about = "Display a directory tree and the contents of matching files")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Trailing patterns treated as print includes (e.g. `treecat . '*.txt'`)
    #[arg(value_name = "PATTERN")]
    patterns: Vec<String>,

    /// Exclude from both the tree and the contents (can be used multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Include in both the tree and the contents; overrides excludes
    #[arg(short = 'i', long = "include", value_name = "PATTERN")]
    include: Vec<String>,

    /// Only list tree entries matching the pattern
    #[arg(long = "list-include", visible_alias = "li", value_name = "PATTERN")]
    list_include: Vec<String>,

    /// Hide matching tree entries; hidden directories are not traversed
    #[arg(long = "list-exclude", visible_alias = "le", value_name = "PATTERN")]
    list_exclude: Vec<String>,

    /// Only print contents of files matching the pattern
    #[arg(long = "print-include", visible_alias = "pi", value_name = "PATTERN")]
    print_include: Vec<String>,

    /// Skip printing contents of files matching the pattern
    #[arg(long = "print-exclude", visible_alias = "pe", value_name = "PATTERN")]
    print_exclude: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Skip external tools and use the built-in renderers
    #[arg(long = "native")]
    native: bool,

    /// Read tool configuration from an explicit file
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Build the two filter axes from the flag groups.
///
/// `-e`/`-i` apply to both axes; the single-axis flags and the trailing
/// legacy patterns extend one axis only.
fn build_filters(args: &Args, legacy_patterns: &[String]) -> Filters {
    let list_includes: Vec<&String> = args.include.iter().chain(&args.list_include).collect();
    let list_excludes: Vec<&String> = args.exclude.iter().chain(&args.list_exclude).collect();
    let print_includes: Vec<&String> = args
        .include
        .iter()
        .chain(&args.print_include)
        .chain(legacy_patterns)
        .collect();
    let print_excludes: Vec<&String> = args.exclude.iter().chain(&args.print_exclude).collect();

    Filters {
        list: FilterSet::new(list_includes, list_excludes),
        print: FilterSet::new(print_includes, print_excludes),
    }
}

fn main() {
    let args = Args::parse();

    // The directory may be omitted entirely (`treecat '*.md'`): a first
    // positional that is not a directory is treated as one more pattern
    // against the current directory.
    let mut legacy_patterns = args.patterns.clone();
    let target = if args.path.as_os_str() != "." && !args.path.is_dir() {
        let Some(pattern) = args.path.to_str() else {
            eprintln!("treecat: cannot access '{}'", args.path.display());
            process::exit(1);
        };
        legacy_patterns.insert(0, pattern.to_string());
        PathBuf::from(".")
    } else {
        args.path.clone()
    };

    let root = match target.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("treecat: cannot resolve '{}': {}", target.display(), e);
            process::exit(1);
        }
    };

    let filters = build_filters(&args, &legacy_patterns);
    let config = match &args.config {
        Some(path) => ToolConfig::load_from(path),
        None => ToolConfig::load(),
    };
    let use_color = should_use_color(args.color);
    let guard = StdoutGuard::detect();

    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string());
    println!("--- Directory Tree for: {} ---", root_name);
    println!("Located at: {}", root.display());
    println!();

    let (renderer, info) = TreeRenderer::select(&config, &filters.list, args.native, use_color);
    if let Some(info) = info {
        println!("{}", info);
    }
    if let Err(e) = renderer.render(&root, &filters.list) {
        eprintln!("treecat: error writing output: {}", e);
        process::exit(1);
    }
    println!();

    println!("--- File Contents (Recursive) ---");
    let printer = FilePrinter::select(&config, args.native);
    let dumper = Dumper::new(&root, &filters, &printer, guard);
    if let Err(e) = dumper.run() {
        eprintln!("treecat: error writing output: {}", e);
        process::exit(1);
    }

    println!("--- End of Listing ---");
}
