use graphql_codegen_syntax::OperationKind;

/// An operation the generator does not emit a hook for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOperation {
    pub name: String,
    pub kind: OperationKind,
}

impl std::fmt::Display for SkippedOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Plugin \"typescript-react-query\" does not support GraphQL {kind}s at the moment! Ignoring \"{name}\"...",
            kind = self.kind,
            name = self.name
        )
    }
}

/// Result of visiting one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutput {
    Hook(String),
    Skipped(SkippedOperation),
}

impl OperationOutput {
    #[must_use]
    pub fn hook(&self) -> Option<&str> {
        match self {
            Self::Hook(hook) => Some(hook),
            Self::Skipped(_) => None,
        }
    }

    #[must_use]
    pub const fn skipped(&self) -> Option<&SkippedOperation> {
        match self {
            Self::Hook(_) => None,
            Self::Skipped(skipped) => Some(skipped),
        }
    }
}

/// One operation of the output file: its document constant and its hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOperation {
    pub name: String,
    pub document: Option<String>,
    pub output: OperationOutput,
}

/// Everything generated for one output target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginOutput {
    pub imports: Vec<String>,
    pub fetcher: String,
    pub fragments: Vec<String>,
    pub operations: Vec<RenderedOperation>,
}

impl PluginOutput {
    /// Rendered hooks in document order.
    pub fn hooks(&self) -> impl Iterator<Item = &str> + '_ {
        self.operations.iter().filter_map(|op| op.output.hook())
    }

    /// Operations that produced no hook.
    pub fn skipped(&self) -> impl Iterator<Item = &SkippedOperation> + '_ {
        self.operations.iter().filter_map(|op| op.output.skipped())
    }

    /// The output file contents.
    ///
    /// Imports come first, followed by the fetcher implementation, fragment
    /// documents, then each operation's document and hook.
    #[must_use]
    pub fn render(&self) -> String {
        let imports = self.imports.join("\n");
        let mut sections: Vec<&str> = Vec::new();
        if !imports.is_empty() {
            sections.push(&imports);
        }
        if !self.fetcher.is_empty() {
            sections.push(&self.fetcher);
        }
        sections.extend(self.fragments.iter().map(String::as_str));
        for op in &self.operations {
            if let Some(document) = &op.document {
                sections.push(document);
            }
            if let Some(hook) = op.output.hook() {
                sections.push(hook);
            }
        }

        if sections.is_empty() {
            return String::new();
        }
        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }
}
