//! Command-line interface for the changeset engine.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::MatchConfig;
use crate::emit::{render, save_output, OutputFormat};
use crate::engine::diff_articles_with;
use crate::error::Result;
use crate::keyed::diff_by_id;
use crate::source::{load_document, ArticleDocument};
use crate::types::ChangeSet;

/// RegelRecht Changeset - Compare two versions of a law article by article.
#[derive(Parser)]
#[command(name = "regelrecht-changeset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the changeset between an old and a new version.
    Diff {
        /// Old version (JSON or YAML article list)
        old: PathBuf,

        /// New version (JSON or YAML article list)
        new: PathBuf,

        /// Identifier of the old version (default: document id or file stem)
        #[arg(long)]
        base: Option<String>,

        /// Identifier of the new version (default: document id or file stem)
        #[arg(long)]
        result: Option<String>,

        /// Output format: json, yaml or text
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pair articles by id only, skipping heading and content matching
        #[arg(long)]
        keyed: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Diff {
            old,
            new,
            base,
            result,
            format,
            output,
            keyed,
        } => diff_command(&DiffArgs {
            old: &old,
            new: &new,
            base: base.as_deref(),
            result: result.as_deref(),
            format: &format,
            output: output.as_deref(),
            keyed,
        }),
    }
}

struct DiffArgs<'a> {
    old: &'a Path,
    new: &'a Path,
    base: Option<&'a str>,
    result: Option<&'a str>,
    format: &'a str,
    output: Option<&'a Path>,
    keyed: bool,
}

/// Version identifier: explicit flag, then document id, then file stem.
fn version_id(explicit: Option<&str>, document: &ArticleDocument, path: &Path) -> String {
    explicit
        .map(String::from)
        .or_else(|| document.id.clone())
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
}

/// Execute the diff command.
fn diff_command(args: &DiffArgs<'_>) -> Result<()> {
    // Validate options before reading any input
    let format: OutputFormat = args.format.parse()?;
    let config = MatchConfig::from_env()?;

    let old_document = load_document(args.old, "old")?;
    let new_document = load_document(args.new, "new")?;

    let base = version_id(args.base, &old_document, args.old);
    let result = version_id(args.result, &new_document, args.new);

    let changeset = if args.keyed {
        diff_by_id(base, result, &old_document.articles, &new_document.articles)
    } else {
        diff_articles_with(
            base,
            result,
            &old_document.articles,
            &new_document.articles,
            &config,
        )
    };

    let rendered = render(&changeset, format)?;

    match args.output {
        Some(path) => {
            save_output(&rendered, path)?;
            print_summary(&changeset);
            eprintln!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            );
        }
        None if format == OutputFormat::Text && std::io::stdout().is_terminal() => {
            print!("{}", colorize(&rendered));
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Print change counts to stderr.
fn print_summary(changeset: &ChangeSet) {
    let stats = &changeset.stats;
    eprintln!(
        "{} {} -> {}",
        style("Compared").bold(),
        style(&changeset.base).cyan(),
        style(&changeset.result).cyan()
    );
    eprintln!("  Substituted: {}", style(stats.substituted).yellow());
    eprintln!("  Inserted: {}", style(stats.inserted).green());
    eprintln!("  Repealed: {}", style(stats.repealed).red());
}

/// Colour a text rendering by line marker for terminal output.
fn colorize(rendered: &str) -> String {
    rendered
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if line.starts_with("~ ") {
                style(line).yellow().bold().to_string()
            } else if line.starts_with("+ ") || line.starts_with("+++") {
                style(line).green().bold().to_string()
            } else if line.starts_with("- ") || line.starts_with("---") {
                style(line).red().bold().to_string()
            } else if trimmed.starts_with("+ ") {
                style(line).green().to_string()
            } else if trimmed.starts_with("- ") {
                style(line).red().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}
