use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level code generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenConfig {
    /// Document patterns shared by every output target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<DocumentsConfig>,

    /// Output files keyed by path, in declaration order
    pub generates: IndexMap<String, OutputConfig>,

    /// Whether existing output files are replaced (defaults to true)
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,
}

const fn default_overwrite() -> bool {
    true
}

impl CodegenConfig {
    /// Iterate over output targets in declaration order.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &OutputConfig)> + '_ {
        self.generates
            .iter()
            .map(|(path, output)| (path.as_str(), output))
    }

    /// Number of output targets
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.generates.len()
    }
}

/// A single output file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Document patterns for this target, replacing the top-level ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<DocumentsConfig>,

    /// Plugin options
    #[serde(default)]
    pub config: PluginConfig,
}

impl OutputConfig {
    /// Resolve the document patterns for this target.
    ///
    /// The target's own `documents` wins over the shared ones. Returns an empty
    /// list when neither is set.
    #[must_use]
    pub fn document_patterns<'a>(&'a self, shared: Option<&'a DocumentsConfig>) -> Vec<&'a str> {
        self.documents
            .as_ref()
            .or(shared)
            .map(DocumentsConfig::patterns)
            .unwrap_or_default()
    }

    /// Like [`Self::document_patterns`], with brace groups expanded for the
    /// glob matcher.
    #[must_use]
    pub fn expanded_document_patterns(&self, shared: Option<&DocumentsConfig>) -> Vec<String> {
        self.documents
            .as_ref()
            .or(shared)
            .map(DocumentsConfig::expanded_patterns)
            .unwrap_or_default()
    }
}

/// Options understood by the React Query plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginConfig {
    /// How generated hooks reach the server.
    ///
    /// `"fetch"`, `"graphql-request"`, `{ endpoint, fetchParams }`, or the name
    /// of a custom fetcher (`"./fetcher#useFetchData"`). Kept raw: any value is
    /// accepted. Falsy values select `"fetch"`; other unknown shapes fall back
    /// to the custom fetcher.
    pub fetcher: serde_json::Value,

    /// Namespace that result and variables types are imported under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_operation_types_from: Option<String>,

    /// Do not append `Query`/`Mutation`/`Subscription` to operation type names
    pub omit_operation_suffix: bool,

    /// Skip the suffix when the operation name already ends with it
    pub dedupe_operation_suffix: bool,

    pub document_variable_prefix: String,

    pub document_variable_suffix: String,

    pub fragment_variable_suffix: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            fetcher: serde_json::Value::String("fetch".to_string()),
            import_operation_types_from: None,
            omit_operation_suffix: false,
            dedupe_operation_suffix: false,
            document_variable_prefix: String::new(),
            document_variable_suffix: "Document".to_string(),
            fragment_variable_suffix: "FragmentDoc".to_string(),
        }
    }
}

impl PluginConfig {
    /// The prefix applied to operation type references, e.g. `"Types."`.
    #[must_use]
    pub fn import_prefix(&self) -> String {
        self.import_operation_types_from
            .as_deref()
            .filter(|alias| !alias.is_empty())
            .map(|alias| format!("{alias}."))
            .unwrap_or_default()
    }
}

/// Document configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentsConfig {
    /// Single pattern
    Pattern(String),
    /// Multiple patterns
    Patterns(Vec<String>),
}

impl DocumentsConfig {
    /// Get all document patterns
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            Self::Pattern(pattern) => vec![pattern.as_str()],
            Self::Patterns(patterns) => patterns.iter().map(String::as_str).collect(),
        }
    }

    /// Patterns ready for glob expansion.
    ///
    /// Brace groups (`*.{graphql,gql}`) are expanded since the glob matcher
    /// does not support them, and leading `./` is stripped.
    #[must_use]
    pub fn expanded_patterns(&self) -> Vec<String> {
        self.patterns()
            .into_iter()
            .flat_map(expand_braces)
            .collect()
    }
}

/// Normalize a glob pattern for consistent matching
///
/// Handles:
/// - Leading "./" prefix (removes it)
/// - Consecutive slashes (collapses to single slash)
fn normalize_pattern(pattern: &str) -> String {
    let mut normalized = pattern.strip_prefix("./").unwrap_or(pattern).to_string();

    while normalized.contains("//") {
        normalized = normalized.replace("//", "/");
    }

    normalized
}

/// Expand a single brace group like "src/**/*.{graphql,gql}" into separate patterns
fn expand_braces(pattern: &str) -> Vec<String> {
    let normalized = normalize_pattern(pattern);

    if let (Some(start), Some(end)) = (normalized.find('{'), normalized.find('}')) {
        if start < end {
            let before = &normalized[..start];
            let after = &normalized[end + 1..];
            let options = &normalized[start + 1..end];

            return options
                .split(',')
                .map(|opt| format!("{}{}{}", before, opt.trim(), after))
                .collect();
        }
    }

    vec![normalized]
}
