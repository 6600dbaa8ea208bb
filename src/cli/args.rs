//! CLI argument definitions
//!
//! All Clap derive structs for `mapdocs` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::ConfigOverrides;
use crate::docgen::thumbnail::DEFAULT_SCALE;
use crate::observability::{ColorChoice, LogFormat};

// ============================================================================
// Root CLI
// ============================================================================

/// Generate documentation pages for Dungeondraft dd2vtt battlemaps.
#[derive(Parser, Debug)]
#[command(name = "mapdocs", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "MAPDOCS_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "MAPDOCS_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a README.md next to every map file.
    Generate(GenerateArgs),

    /// List discovered maps with their titles and grid sizes.
    List(ListArgs),

    /// Write a downscaled preview PNG next to every map file.
    Thumbnail(ThumbnailArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Shared Arguments
// ============================================================================

/// Where to look for maps and how to treat failures.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory to scan recursively for map files.
    #[arg(env = "MAPDOCS_ROOT")]
    pub root: Option<PathBuf>,

    /// Map file extension [default: dd2vtt].
    #[arg(short, long, env = "MAPDOCS_EXTENSION")]
    pub extension: Option<String>,

    /// Path to a YAML configuration file.
    #[arg(short, long, env = "MAPDOCS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Abort on the first map that fails instead of continuing.
    #[arg(long)]
    pub fail_fast: bool,
}

impl SourceArgs {
    /// Configuration overrides carried by these arguments.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config: self.config.clone(),
            root: self.root.clone(),
            extension: self.extension.clone(),
            output_name: None,
            fail_fast: self.fail_fast,
            dry_run: false,
        }
    }
}

// ============================================================================
// Command Arguments
// ============================================================================

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Map source selection.
    #[command(flatten)]
    pub source: SourceArgs,

    /// File name of the generated document [default: README.md].
    #[arg(short, long, env = "MAPDOCS_OUTPUT_NAME")]
    pub output_name: Option<String>,

    /// Render every document but write nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Report format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

impl GenerateArgs {
    /// Configuration overrides carried by these arguments.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            output_name: self.output_name.clone(),
            dry_run: self.dry_run,
            ..self.source.overrides()
        }
    }
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Map source selection.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `thumbnail`.
#[derive(Args, Debug)]
pub struct ThumbnailArgs {
    /// Map source selection.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Divide each image dimension by this factor.
    #[arg(long, default_value_t = DEFAULT_SCALE, value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: u32,

    /// Replace thumbnails that already exist.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["mapdocs", "generate", "maps"]).unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("Expected GenerateArgs");
        };
        assert_eq!(args.source.root, Some(PathBuf::from("maps")));
        assert_eq!(args.format, OutputFormat::Human);
        assert!(!args.dry_run);
        assert!(!args.source.fail_fast);
    }

    #[test]
    fn test_generate_overrides() {
        let cli = Cli::try_parse_from([
            "mapdocs",
            "generate",
            "maps",
            "--extension",
            ".uvtt",
            "--output-name",
            "INDEX.md",
            "--fail-fast",
            "--dry-run",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("Expected GenerateArgs");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.root, Some(PathBuf::from("maps")));
        assert_eq!(overrides.extension.as_deref(), Some(".uvtt"));
        assert_eq!(overrides.output_name.as_deref(), Some("INDEX.md"));
        assert!(overrides.fail_fast);
        assert!(overrides.dry_run);
    }

    #[test]
    fn test_thumbnail_scale() {
        let cli = Cli::try_parse_from(["mapdocs", "thumbnail", "--scale", "8"]).unwrap();
        let Commands::Thumbnail(args) = cli.command else {
            panic!("Expected ThumbnailArgs");
        };
        assert_eq!(args.scale, 8);
        assert!(!args.force);
    }

    #[test]
    fn test_thumbnail_default_scale() {
        let cli = Cli::try_parse_from(["mapdocs", "thumbnail"]).unwrap();
        let Commands::Thumbnail(args) = cli.command else {
            panic!("Expected ThumbnailArgs");
        };
        assert_eq!(args.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_thumbnail_zero_scale_rejected() {
        let result = Cli::try_parse_from(["mapdocs", "thumbnail", "--scale", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["mapdocs", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["mapdocs", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_list_json() {
        let cli = Cli::try_parse_from(["mapdocs", "list", "--format", "json"]).unwrap();
        let Commands::List(args) = cli.command else {
            panic!("Expected ListArgs");
        };
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "mapdocs",
            "generate",
            "-vvv",
            "--quiet",
            "--color",
            "never",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 3);
        assert!(cli.quiet);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_completions_shells_parse() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["mapdocs", "completions", shell]);
            assert!(cli.is_ok(), "Failed to parse shell={shell}");
        }
    }

    #[test]
    fn test_unknown_command() {
        assert!(Cli::try_parse_from(["mapdocs", "publish"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
