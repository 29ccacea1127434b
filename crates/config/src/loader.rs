use crate::{CodegenConfig, ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &[
    "codegen.yml",
    "codegen.yaml",
    "codegen.json",
    ".codegenrc.yml",
    ".codegenrc.yaml",
    ".codegenrc.json",
    ".codegenrc",
];

/// Find a codegen config file by walking up the directory tree from the given start directory.
/// Returns the path to the config file if found.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::info!(path = %config_path.display(), checked_dirs, "Found config file");
                return Ok(Some(config_path));
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            break;
        }
    }

    Ok(None)
}

/// Load a codegen config from the specified path.
/// Automatically detects the format based on file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<CodegenConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::info!(targets = config.target_count(), "Config loaded successfully");
    Ok(config)
}

/// Load a codegen config from a string.
/// The path is used for error messages and format detection.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<CodegenConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");

    tracing::debug!(extension, file_name, "Detecting config format");

    let config = match extension {
        "yml" | "yaml" => parse_yaml(contents, path)?,
        "json" => parse_json(contents, path)?,
        "" if file_name == ".codegenrc" => {
            // .codegenrc without extension - try YAML first, then JSON
            tracing::trace!("Trying YAML then JSON for .codegenrc");
            parse_yaml(contents, path).or_else(|_| parse_json(contents, path))?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config, path)?;

    Ok(config)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<CodegenConfig> {
    serde_saphyr::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<CodegenConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Validate the loaded configuration
#[tracing::instrument(skip(config, path), fields(path = %path.display(), targets = config.target_count()))]
fn validate_config(config: &CodegenConfig, path: &Path) -> Result<()> {
    let invalid = |message: String| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    };

    if config.generates.is_empty() {
        return Err(invalid("No output files configured in 'generates'".to_string()));
    }

    for (output_path, output) in config.targets() {
        tracing::trace!(output = output_path, "Validating output target");

        if output_path.trim().is_empty() {
            return Err(invalid("Output path must not be empty".to_string()));
        }

        let patterns = output.document_patterns(config.documents.as_ref());
        if patterns.is_empty() {
            return Err(invalid(format!(
                "Output '{output_path}' has no documents configured"
            )));
        }

        if patterns.iter().any(|pattern| pattern.trim().is_empty()) {
            return Err(invalid(format!(
                "Output '{output_path}' has an empty document pattern"
            )));
        }
    }

    tracing::debug!("Config validation passed");
    Ok(())
}
