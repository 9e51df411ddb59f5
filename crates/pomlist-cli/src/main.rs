//! pomlist CLI - list the Maven artifacts in a checkout
//!
//! `pomlist <root>` walks the tree, prints every project's `artifactId`
//! sorted ascending and a trailing `<n> artifacts found` line.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use pomlist_scanner::{find_projects, ExclusionMode, OutputStyle, Scanner};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pomlist")]
#[command(about = "List the artifactIds of all Maven projects under a directory")]
#[command(version)]
struct Cli {
    /// Root directory to scan, e.g. trunk or whiteboard
    #[arg(value_name = "ROOT")]
    roots: Vec<PathBuf>,

    /// How each identifier is printed
    #[arg(short, long, value_enum, default_value = "wiki")]
    style: Style,

    /// Exclude only path components named exactly `src` or `target`
    #[arg(long)]
    segments: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Style {
    /// `* {{artifactId}}`
    Wiki,
    /// Bare artifactId
    Plain,
    /// Full report as JSON
    Json,
}

impl From<Style> for OutputStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Wiki => OutputStyle::Wiki,
            Style::Plain => OutputStyle::Plain,
            Style::Json => OutputStyle::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let [root] = cli.roots.as_slice() else {
        println!("{}", usage(&program_name()));
        std::process::exit(1);
    };

    if let Err(e) = run_scan(root, cli.style.into(), cli.segments) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_scan(root: &Path, style: OutputStyle, segments: bool) -> anyhow::Result<()> {
    let exclusion = if segments {
        ExclusionMode::Segment
    } else {
        ExclusionMode::Substring
    };
    let scanner = Scanner::new().with_exclusion(exclusion);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    find_projects(&scanner, root, style, &mut out)
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    Ok(())
}

fn usage(program: &str) -> String {
    format!("usage: {program} projects root, e.g. trunk or whiteboard")
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map_or_else(
            || "pomlist".to_string(),
            |name| name.to_string_lossy().to_string(),
        )
}
