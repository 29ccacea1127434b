//! Verify generated files are up to date.
//!
//! Regenerates every target in memory and compares the result with what is on
//! disk. Nothing is written. Intended for CI.

use crate::commands::common::{report_failure, CommandContext, GeneratedTarget};
use crate::{ExitCode, OutputOptions};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Compare a freshly generated target with the file on disk.
pub fn target_status(target: &GeneratedTarget) -> Result<TargetStatus> {
    let on_disk = match std::fs::read_to_string(&target.path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TargetStatus::Missing),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read file: {}", target.path.display()))
        }
    };

    if on_disk == target.output.render() {
        Ok(TargetStatus::UpToDate)
    } else {
        Ok(TargetStatus::Stale)
    }
}

/// Run the check command
#[tracing::instrument(skip_all)]
pub fn run(config_path: Option<PathBuf>, output_opts: OutputOptions) -> Result<ExitCode> {
    let ctx = match CommandContext::load(config_path) {
        Ok(ctx) => ctx,
        Err(e) => return Ok(report_failure("Failed to load config", &e)),
    };

    let spinner = crate::progress::spinner("Checking generated files...", output_opts);
    let targets = match ctx.generate_all() {
        Ok(targets) => targets,
        Err(e) => {
            spinner.finish_and_clear();
            return Ok(report_failure("Generation failed", &e));
        }
    };
    spinner.finish_and_clear();

    let mut outdated = 0;
    for target in &targets {
        let status = match target_status(target) {
            Ok(status) => status,
            Err(e) => return Ok(report_failure("Check failed", &e)),
        };

        match status {
            TargetStatus::UpToDate => {
                if output_opts.show_info {
                    println!("{} {}", "✓".green(), target.name);
                }
            }
            TargetStatus::Stale => {
                outdated += 1;
                eprintln!("{} {} is out of date", "✗".red(), target.name.bold());
            }
            TargetStatus::Missing => {
                outdated += 1;
                eprintln!("{} {} is missing", "✗".red(), target.name.bold());
            }
        }
    }

    if outdated > 0 {
        eprintln!(
            "\n{}",
            format!("✗ {outdated} generated file(s) need regenerating. Run `graphql-codegen generate`.")
                .red()
        );
        return Ok(ExitCode::StaleOutput);
    }

    if output_opts.show_info {
        println!("\n{}", "✓ All generated files are up to date".green().bold());
    }
    Ok(ExitCode::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::tests::{project, CONFIG};
    use crate::commands::generate::write_target;

    fn quiet() -> OutputOptions {
        OutputOptions {
            show_progress: false,
            show_info: false,
        }
    }

    #[test]
    fn test_missing_output_is_stale() {
        let (_dir, config_path) = project(CONFIG);
        assert_eq!(run(Some(config_path), quiet()).unwrap(), ExitCode::StaleOutput);
    }

    #[test]
    fn test_statuses() {
        let (_dir, config_path) = project(CONFIG);
        let ctx = CommandContext::load(Some(config_path.clone())).unwrap();
        let targets = ctx.generate_all().unwrap();
        let target = &targets[0];

        assert_eq!(target_status(target).unwrap(), TargetStatus::Missing);

        write_target(target, true).unwrap();
        assert_eq!(target_status(target).unwrap(), TargetStatus::UpToDate);
        assert_eq!(run(Some(config_path), quiet()).unwrap(), ExitCode::Success);

        std::fs::write(&target.path, "// edited").unwrap();
        assert_eq!(target_status(target).unwrap(), TargetStatus::Stale);
    }
}
