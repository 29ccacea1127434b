use crate::{NamingOptions, OperationDescriptor, OperationKind, Parse, ParseError};
use apollo_compiler::{ast, Node};
use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

/// Reasons a set of documents cannot be used for generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Syntax error in {path}: {error}")]
    Syntax { path: String, error: ParseError },

    #[error("Anonymous operations are not supported ({path})")]
    AnonymousOperation { path: String },

    #[error("Operation \"{name}\" is defined more than once")]
    DuplicateOperation { name: String },

    #[error("Fragment \"{name}\" is defined more than once")]
    DuplicateFragment { name: String },

    #[error("Unknown fragment \"{name}\" spread in \"{used_in}\"")]
    UnknownFragment { name: String, used_in: String },

    #[error("Fragment \"{name}\" spreads itself through a cycle")]
    FragmentCycle { name: String },
}

/// Operations and fragments collected from one or more documents.
///
/// Operations keep the order they were added in; that order is the order of
/// the generated output.
#[derive(Debug, Clone)]
pub struct DocumentSet {
    naming: NamingOptions,
    operations: IndexMap<String, Node<ast::OperationDefinition>>,
    fragments: IndexMap<String, Node<ast::FragmentDefinition>>,
}

impl DocumentSet {
    #[must_use]
    pub fn new(naming: NamingOptions) -> Self {
        Self {
            naming,
            operations: IndexMap::new(),
            fragments: IndexMap::new(),
        }
    }

    /// Parse and collect a batch of `(path, source)` pairs, then check that
    /// every spread fragment is defined somewhere in the batch.
    pub fn from_sources<'a>(
        naming: NamingOptions,
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, DocumentError> {
        let mut set = Self::new(naming);
        for (path, source) in sources {
            set.add(&crate::parse(source, path))?;
        }
        set.check_fragments()?;
        Ok(set)
    }

    /// Add the executable definitions of a parsed document.
    pub fn add(&mut self, parse: &Parse) -> Result<(), DocumentError> {
        if let Some(error) = parse.errors().first() {
            return Err(DocumentError::Syntax {
                path: parse.path().to_string(),
                error: error.clone(),
            });
        }

        for definition in &parse.document().definitions {
            match definition {
                ast::Definition::OperationDefinition(op) => {
                    let Some(name) = op.name.as_ref() else {
                        return Err(DocumentError::AnonymousOperation {
                            path: parse.path().to_string(),
                        });
                    };
                    if self.operations.contains_key(name.as_str()) {
                        return Err(DocumentError::DuplicateOperation {
                            name: name.to_string(),
                        });
                    }
                    self.operations.insert(name.to_string(), op.clone());
                }
                ast::Definition::FragmentDefinition(frag) => {
                    if self.fragments.contains_key(frag.name.as_str()) {
                        return Err(DocumentError::DuplicateFragment {
                            name: frag.name.to_string(),
                        });
                    }
                    self.fragments.insert(frag.name.to_string(), frag.clone());
                }
                // Type system definitions are not part of generated documents
                _ => {}
            }
        }

        tracing::debug!(
            path = parse.path(),
            operations = self.operations.len(),
            fragments = self.fragments.len(),
            "Collected document"
        );
        Ok(())
    }

    /// Verify every fragment spread refers to a collected fragment and that
    /// no fragment spreads itself.
    pub fn check_fragments(&self) -> Result<(), DocumentError> {
        let operations = self
            .operations
            .iter()
            .map(|(name, op)| (name, &op.selection_set));
        let fragments = self
            .fragments
            .iter()
            .map(|(name, frag)| (name, &frag.selection_set));

        for (used_in, selection_set) in operations.chain(fragments) {
            for spread in direct_spreads(selection_set) {
                if !self.fragments.contains_key(&spread) {
                    return Err(DocumentError::UnknownFragment {
                        name: spread,
                        used_in: used_in.clone(),
                    });
                }
            }
        }

        let mut done = IndexSet::new();
        for name in self.fragments.keys() {
            let mut in_progress = IndexSet::new();
            if let Some(name) = self.find_cycle(name, &mut in_progress, &mut done) {
                return Err(DocumentError::FragmentCycle { name });
            }
        }
        Ok(())
    }

    /// Depth-first walk of fragment spreads. Returns the first fragment that
    /// is reached again while still being visited.
    fn find_cycle<'a>(
        &'a self,
        name: &'a str,
        in_progress: &mut IndexSet<&'a str>,
        done: &mut IndexSet<&'a str>,
    ) -> Option<String> {
        if done.contains(name) {
            return None;
        }
        if !in_progress.insert(name) {
            return Some(name.to_string());
        }

        if let Some(frag) = self.fragments.get(name) {
            for dependency in direct_spreads(&frag.selection_set) {
                let Some((dep_key, _)) = self.fragments.get_key_value(&dependency) else {
                    continue;
                };
                if let Some(cycle) = self.find_cycle(dep_key, in_progress, done) {
                    return Some(cycle);
                }
            }
        }

        in_progress.swap_remove(name);
        done.insert(name);
        None
    }

    #[must_use]
    pub const fn naming(&self) -> &NamingOptions {
        &self.naming
    }

    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Descriptors for every operation, in document order.
    #[must_use]
    pub fn operations(&self) -> Vec<OperationDescriptor> {
        self.operations
            .iter()
            .map(|(name, op)| {
                self.naming.describe(
                    OperationKind::from(op.operation_type),
                    name,
                    has_required_variables(op),
                )
            })
            .collect()
    }

    /// The exported document constant for an operation.
    #[must_use]
    pub fn operation_document(&self, operation: &OperationDescriptor) -> Option<String> {
        let op = self.operations.get(&operation.name)?;
        Some(self.document_constant(
            &operation.document_variable_name,
            &op.to_string(),
            &op.selection_set,
        ))
    }

    /// Document constants for every fragment, dependencies first.
    #[must_use]
    pub fn fragment_documents(&self) -> Vec<String> {
        let mut ordered = IndexSet::new();
        let mut visiting = IndexSet::new();
        for name in self.fragments.keys() {
            self.visit_fragment(name, &mut ordered, &mut visiting);
        }

        ordered
            .into_iter()
            .filter_map(|name| self.fragments.get(name))
            .map(|frag| {
                self.document_constant(
                    &self.naming.fragment_variable_name(&frag.name),
                    &frag.to_string(),
                    &frag.selection_set,
                )
            })
            .collect()
    }

    /// Post-order walk. `visiting` stops the recursion on cyclic spreads,
    /// which `check_fragments` reports.
    fn visit_fragment<'a>(
        &'a self,
        name: &'a str,
        ordered: &mut IndexSet<&'a str>,
        visiting: &mut IndexSet<&'a str>,
    ) {
        let Some((key, frag)) = self.fragments.get_key_value(name) else {
            return;
        };
        if ordered.contains(key.as_str()) || !visiting.insert(key.as_str()) {
            return;
        }
        for dependency in direct_spreads(&frag.selection_set) {
            if let Some((dep_key, _)) = self.fragments.get_key_value(&dependency) {
                self.visit_fragment(dep_key, ordered, visiting);
            }
        }
        visiting.swap_remove(key.as_str());
        ordered.insert(key.as_str());
    }

    fn document_constant(
        &self,
        variable_name: &str,
        printed: &str,
        selection_set: &[ast::Selection],
    ) -> String {
        let mut body = escape_template_literal(printed.trim_end());
        for spread in direct_spreads(selection_set) {
            body.push_str("\n${");
            body.push_str(&self.naming.fragment_variable_name(&spread));
            body.push('}');
        }
        format!("export const {variable_name} = `\n{body}\n`;")
    }
}

/// Any variable is non-null and has no default value.
fn has_required_variables(op: &ast::OperationDefinition) -> bool {
    op.variables
        .iter()
        .any(|var| var.ty.is_non_null() && var.default_value.is_none())
}

/// Fragment names spread in a selection set, not following into the
/// fragments themselves. Deduplicated, in first-seen order.
fn direct_spreads(selection_set: &[ast::Selection]) -> Vec<String> {
    fn walk(selections: &[ast::Selection], found: &mut IndexSet<String>) {
        for selection in selections {
            match selection {
                ast::Selection::Field(field) => walk(&field.selection_set, found),
                ast::Selection::FragmentSpread(spread) => {
                    found.insert(spread.fragment_name.to_string());
                }
                ast::Selection::InlineFragment(inline) => walk(&inline.selection_set, found),
            }
        }
    }

    let mut found = IndexSet::new();
    walk(selection_set, &mut found);
    found.into_iter().collect()
}

fn escape_template_literal(source: &str) -> String {
    source
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
