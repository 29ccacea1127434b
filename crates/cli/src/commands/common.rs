use crate::ExitCode;
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_codegen_config::{find_config, load_config, CodegenConfig, ConfigError, OutputConfig};
use graphql_codegen_syntax::{DocumentError, DocumentSet, NamingOptions};
use graphql_react_query::PluginOutput;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Loaded config plus the directory its relative paths resolve against
pub struct CommandContext {
    pub config: CodegenConfig,
    pub config_path: PathBuf,
    pub base_dir: PathBuf,
}

/// The generated contents of one `generates` target
pub struct GeneratedTarget {
    /// Output path as written in the config
    pub name: String,
    /// Output path resolved against the config directory
    pub path: PathBuf,
    pub document_count: usize,
    pub output: PluginOutput,
}

impl CommandContext {
    /// Load the config at `config_path`, or search for one upwards from the
    /// current directory.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let config_path = if let Some(path) = config_path {
            path
        } else {
            let current_dir = std::env::current_dir()?;
            find_config(&current_dir)
                .context("Failed to search for config")?
                .context("No codegen config file found")?
        };

        let config = load_config(&config_path).context("Failed to load config")?;

        let base_dir = config_path
            .parent()
            .context("Failed to get config directory")?
            .to_path_buf();

        tracing::debug!(
            config = %config_path.display(),
            targets = config.target_count(),
            "Loaded config"
        );

        Ok(Self {
            config,
            config_path,
            base_dir,
        })
    }

    /// Generate every target, in config order.
    pub fn generate_all(&self) -> Result<Vec<GeneratedTarget>> {
        self.config
            .targets()
            .map(|(name, target)| self.generate_target(name, target))
            .collect()
    }

    /// Read the target's documents and render its output.
    #[tracing::instrument(skip(self, target))]
    pub fn generate_target(&self, name: &str, target: &OutputConfig) -> Result<GeneratedTarget> {
        let patterns = target.expanded_document_patterns(self.config.documents.as_ref());

        let files = self.load_document_files(&patterns)?;
        if files.is_empty() {
            return Err(ConfigError::Invalid {
                path: self.config_path.clone(),
                message: format!("No documents match the patterns of \"{name}\""),
            }
            .into());
        }

        let documents = DocumentSet::from_sources(
            NamingOptions::from(&target.config),
            files
                .iter()
                .map(|(path, source)| (path.as_str(), source.as_str())),
        )?;

        Ok(GeneratedTarget {
            name: name.to_string(),
            path: self.base_dir.join(name),
            document_count: files.len(),
            output: graphql_react_query::generate(&documents, &target.config),
        })
    }

    /// Expand glob patterns relative to the config directory and read the
    /// matched files, sorted by path.
    fn load_document_files(&self, patterns: &[String]) -> Result<Vec<(String, String)>> {
        let mut paths = BTreeSet::new();

        for pattern in patterns {
            let full_pattern = self.base_dir.join(pattern).display().to_string();

            for entry in glob::glob(&full_pattern)
                .with_context(|| format!("Invalid glob pattern: {full_pattern}"))?
            {
                let path = entry.context("Glob error")?;
                if path.is_file() && !is_in_node_modules(&path) {
                    paths.insert(path);
                }
            }
        }

        paths
            .into_iter()
            .map(|path| {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))?;
                Ok((path.display().to_string(), content))
            })
            .collect()
    }
}

fn is_in_node_modules(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == "node_modules")
}

/// Exit code for a failed load or generation.
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<DocumentError>().is_some() {
        ExitCode::ParseError
    } else if error.downcast_ref::<ConfigError>().is_some() {
        ExitCode::ConfigError
    } else {
        ExitCode::IoError
    }
}

/// Print skipped-operation warnings of a target.
pub fn print_skipped(target: &GeneratedTarget) {
    for skipped in target.output.skipped() {
        eprintln!("{} {}", "⚠".yellow(), skipped.to_string().yellow());
    }
}

/// Print a failed run and return its exit code.
pub fn report_failure(context: &str, error: &anyhow::Error) -> ExitCode {
    eprintln!("{} {error:#}", format!("✗ {context}:").red());
    exit_code_for(error)
}
