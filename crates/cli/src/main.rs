mod commands;
mod exit_code;
mod progress;

use clap::{Parser, Subcommand};
use exit_code::ExitCode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphql-codegen")]
#[command(about = "Generate React Query hooks from GraphQL documents", long_about = None)]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Path to codegen config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Force colored output even when not a TTY
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true, conflicts_with = "color")]
    no_color: bool,

    /// Suppress all output except errors and warnings
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Suppress progress indicators (spinners)
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show progress indicators (spinners)
    pub show_progress: bool,
    /// Whether to show informational output (success messages, summaries)
    pub show_info: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate hooks for every target in the config
    Generate {
        /// Print the generated code instead of writing files
        #[arg(long)]
        stdout: bool,
    },

    /// Check that generated files are up to date without writing them
    ///
    /// Exits with a non-zero code when any output is missing or differs from
    /// a fresh generation. Recommended for CI pipelines.
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let output_opts = OutputOptions {
        show_progress: !cli.quiet && !cli.no_progress,
        show_info: !cli.quiet,
    };

    let code = match cli.command {
        Commands::Generate { stdout } => commands::generate::run(cli.config, stdout, output_opts),
        Commands::Check => commands::check::run(cli.config, output_opts),
    }?;

    if code != ExitCode::Success {
        code.exit();
    }
    Ok(())
}

/// Initialize tracing to stderr, filtered by `RUST_LOG`
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// Priority order (highest to lowest):
/// 1. `--color` flag (force colors on)
/// 2. `--no-color` flag (force colors off)
/// 3. `NO_COLOR` environment variable (if set to any value, disable colors)
/// 4. `CLICOLOR_FORCE` environment variable (if set to non-zero, force colors)
/// 5. `CLICOLOR` environment variable (if set to "0", disable colors)
/// 6. Default: colors enabled if stdout is a TTY (handled by `colored` crate)
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    let env_override = if std::env::var_os("NO_COLOR").is_some() {
        Some(false)
    } else if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        (!val.is_empty() && val != "0").then_some(true)
    } else {
        std::env::var("CLICOLOR")
            .is_ok_and(|val| val == "0")
            .then_some(false)
    };

    let flag_override = if force_color {
        Some(true)
    } else if no_color {
        Some(false)
    } else {
        None
    };

    if let Some(enabled) = flag_override.or(env_override) {
        control::set_override(enabled);
    }
}
