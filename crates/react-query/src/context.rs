use indexmap::IndexSet;

/// What the generated code of one run references.
///
/// Both sets only grow and keep insertion order, so the import list comes out
/// in the order identifiers were first used.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    identifiers: IndexSet<&'static str>,
    imports: IndexSet<String>,
}

impl GenerationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `react-query` export used by a hook.
    pub fn use_identifier(&mut self, identifier: &'static str) {
        self.identifiers.insert(identifier);
    }

    /// Record a whole import statement the output needs.
    pub fn add_import(&mut self, statement: impl Into<String>) {
        self.imports.insert(statement.into());
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.identifiers.iter().copied()
    }

    pub fn imports(&self) -> impl Iterator<Item = &str> + '_ {
        self.imports.iter().map(String::as_str)
    }

    #[must_use]
    pub fn has_identifiers(&self) -> bool {
        !self.identifiers.is_empty()
    }
}
