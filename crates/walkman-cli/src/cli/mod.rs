//! CLI for walkman.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;
use walkman_core::config;
use walkman_core::output::OutputFormat;

use commands::{run_completions, run_extract, run_man, run_tree, ExtractArgs, TreeArgs};

/// Top-level CLI for walkman.
#[derive(Debug, Parser)]
#[command(name = "walkman")]
#[command(about = "walkman: list the unique link targets of an HTML document", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format flag; mirrors [`OutputFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One href per line.
    Lines,
    /// JSON array of strings.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Lines => OutputFormat::Lines,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the unique href of every anchor in an HTML document, in document order.
    Extract {
        /// HTML file to read; omit or pass "-" for stdin.
        input: Option<String>,
        /// Resolve hrefs against this absolute URL instead of printing raw attribute text.
        #[arg(long, value_name = "URL")]
        base: Option<String>,
        /// Output format (defaults to the config file, then "lines").
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Write to this file instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Build a sorted directory tree from a document's links, as indented "- name" lines.
    Tree {
        /// HTML file to read; omit or pass "-" for stdin.
        input: Option<String>,
        /// Name of the root entry.
        #[arg(long, short, value_name = "NAME", conflicts_with = "from_tree")]
        root: Option<String>,
        /// Host to strip from link targets, e.g. "example.com".
        #[arg(long, short = 'H', value_name = "HOST")]
        hostname: Option<String>,
        /// Start from a tree saved earlier; INPUT, if given, adds to it.
        #[arg(long, short = 'I', value_name = "FILE")]
        from_tree: Option<PathBuf>,
        /// Write to this file instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a man page in roff format.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Extract {
                input,
                base,
                format,
                output,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let args = ExtractArgs {
                    input,
                    base,
                    format: format.map(OutputFormat::from),
                    output,
                };
                run_extract(&cfg, args)?;
            }
            CliCommand::Tree {
                input,
                root,
                hostname,
                from_tree,
                output,
            } => run_tree(TreeArgs {
                input,
                root,
                hostname,
                from_tree,
                output,
            })?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
