//! Command-line interface definitions.

use crate::utils::date::DateTime;
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// folio site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented folio.toml with the built-in values
    #[command(visible_alias = "i")]
    Init {
        /// Directory to write folio.toml into (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        path: Option<PathBuf>,

        /// Print the template instead of writing it
        #[arg(short, long)]
        dry: bool,
    },

    /// Load and validate the configuration
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved configuration
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show how many posts land on the index and on each page
    #[command(visible_alias = "p")]
    Paginate {
        /// Number of published posts
        count: usize,
    },

    /// Check whether a post dated DATETIME is published
    Publish {
        /// Post date, e.g. 2024-06-15 or 2024-06-15T14:30:00+03:00
        #[arg(value_parser = parse_datetime)]
        date: DateTime,

        /// Evaluate at this time instead of now
        #[arg(long, value_parser = parse_datetime)]
        now: Option<DateTime>,

        /// The post is a draft
        #[arg(short, long)]
        draft: bool,

        /// Development mode: scheduled posts are shown early
        #[arg(long)]
        dev: bool,
    },

    /// Resolve the edit link and preview image for a post
    #[command(visible_alias = "l")]
    Links {
        /// Post source path relative to the repository root
        file_path: String,

        /// Post slug (default: file name without extension)
        #[arg(short, long)]
        slug: Option<String>,

        /// The post's own preview image
        #[arg(long = "og-image", value_hint = clap::ValueHint::Url)]
        og_image: Option<String>,

        /// The post hides its edit link
        #[arg(long)]
        hide_edit: bool,
    },
}

/// Serialization format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Toml,
    Json,
}

fn parse_datetime(s: &str) -> Result<DateTime, String> {
    DateTime::parse(s).ok_or_else(|| {
        format!("invalid datetime '{s}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS[Z|±HH:MM]")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_and_verbose_flags() {
        let cli = Cli::try_parse_from(["folio", "-v", "check"]).unwrap();
        assert!(cli.verbose);
        let cli = Cli::try_parse_from(["folio", "check", "--verbose"]).unwrap();
        assert!(cli.verbose);

        let err = Cli::try_parse_from(["folio", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_parse_show_json() {
        let cli = Cli::try_parse_from(["folio", "show", "--format", "json", "--pretty"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: OutputFormat::Json,
                pretty: true
            }
        ));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "check", "-C", "site/folio.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("site/folio.json")));
    }

    #[test]
    fn test_publish_dates() {
        let cli = Cli::try_parse_from([
            "folio",
            "publish",
            "2024-06-15T12:10:00+03:00",
            "--now",
            "2024-06-15T09:00:00Z",
        ])
        .unwrap();
        let Commands::Publish { date, now, .. } = cli.command else {
            panic!("expected publish");
        };
        assert_eq!(date.offset_minutes, 180);
        assert!(now.is_some());

        assert!(Cli::try_parse_from(["folio", "publish", "tomorrow"]).is_err());
    }

    #[test]
    fn test_init_path_optional() {
        let cli = Cli::try_parse_from(["folio", "init", "--dry"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { path: None, dry: true }));
    }
}
