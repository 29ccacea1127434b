use crate::commands::common::{print_skipped, report_failure, CommandContext, GeneratedTarget};
use crate::{ExitCode, OutputOptions};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// What happened to an output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The file exists and `overwrite` is off
    Kept,
}

/// Write a generated target, creating parent directories as needed.
pub fn write_target(target: &GeneratedTarget, overwrite: bool) -> Result<WriteOutcome> {
    if !overwrite && target.path.exists() {
        tracing::debug!(path = %target.path.display(), "Keeping existing output");
        return Ok(WriteOutcome::Kept);
    }

    if let Some(parent) = target.path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(&target.path, target.output.render())
        .with_context(|| format!("Failed to write file: {}", target.path.display()))?;

    Ok(WriteOutcome::Written)
}

/// Run the generate command
#[tracing::instrument(skip_all)]
pub fn run(
    config_path: Option<PathBuf>,
    to_stdout: bool,
    output_opts: OutputOptions,
) -> Result<ExitCode> {
    let start_time = std::time::Instant::now();

    let ctx = match CommandContext::load(config_path) {
        Ok(ctx) => ctx,
        Err(e) => return Ok(report_failure("Failed to load config", &e)),
    };

    let spinner = crate::progress::spinner("Generating hooks...", output_opts);
    let targets = match ctx.generate_all() {
        Ok(targets) => targets,
        Err(e) => {
            spinner.finish_and_clear();
            return Ok(report_failure("Generation failed", &e));
        }
    };
    spinner.finish_and_clear();

    for target in &targets {
        print_skipped(target);

        if to_stdout {
            print!("{}", target.output.render());
            continue;
        }

        let outcome = match write_target(target, ctx.config.overwrite) {
            Ok(outcome) => outcome,
            Err(e) => return Ok(report_failure("Failed to write output", &e)),
        };

        if output_opts.show_info {
            match outcome {
                WriteOutcome::Written => println!(
                    "{} {} ({} hooks from {} documents)",
                    "✓".green(),
                    target.name.bold(),
                    target.output.hooks().count(),
                    target.document_count
                ),
                WriteOutcome::Kept => println!(
                    "{} {}",
                    "-".dimmed(),
                    format!("Kept existing {}", target.name).dimmed()
                ),
            }
        }
    }

    if output_opts.show_info && !to_stdout {
        println!(
            "\n{}",
            "✓ Code generation completed successfully!".green().bold()
        );
        println!(
            "  {} total: {:.2}s",
            "⏱".dimmed(),
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(ExitCode::Success)
}
