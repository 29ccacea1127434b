//! # GraphQL Syntax for Code Generation
//!
//! This crate is the document layer the hook generator builds on. It parses
//! GraphQL documents, collects their operations and fragments into a
//! [`DocumentSet`], and derives the per-operation metadata
//! ([`OperationDescriptor`]) that generators consume.
//!
//! ```rust,ignore
//! let parse = graphql_codegen_syntax::parse(source, "queries.graphql");
//! let mut set = DocumentSet::new(NamingOptions::default());
//! set.add(&parse)?;
//! for op in set.operations() {
//!     println!("{} -> {}", op.name, op.document_variable_name);
//! }
//! ```

mod document_set;
mod operation;

pub use document_set::{DocumentError, DocumentSet};
pub use operation::{NamingOptions, OperationDescriptor, OperationKind};

use apollo_compiler::ast;

/// A parse error with position information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Byte offset where the error occurred
    pub offset: usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at offset {})", self.message, self.offset)
    }
}

/// Result of parsing a single GraphQL file
#[derive(Debug, Clone)]
pub struct Parse {
    /// Path the source was read from, used in diagnostics
    path: String,
    /// The parsed AST (partial when there are errors)
    document: ast::Document,
    /// Parse errors (syntax errors only, not validation)
    errors: Vec<ParseError>,
}

impl Parse {
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn document(&self) -> &ast::Document {
        &self.document
    }

    /// Returns the parse errors.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Returns true if there were any parse errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse GraphQL source into an AST, collecting syntax errors with offsets.
#[tracing::instrument(skip(source), fields(size = source.len()))]
pub fn parse(source: &str, path: &str) -> Parse {
    let tree = apollo_parser::Parser::new(source).parse();

    let mut errors: Vec<ParseError> = tree
        .errors()
        .map(|e| ParseError {
            message: e.message().to_string(),
            offset: e.index(),
        })
        .collect();

    let document = match ast::Document::parse(source, path) {
        Ok(doc) => doc,
        Err(with_errors) => {
            // apollo-compiler reports the same syntax errors without offsets;
            // only fall back to them when the parser found nothing
            if errors.is_empty() {
                errors.extend(with_errors.errors.iter().map(|e| ParseError {
                    message: e.to_string(),
                    offset: 0,
                }));
            }
            with_errors.partial
        }
    };

    if !errors.is_empty() {
        tracing::debug!(path, count = errors.len(), "Document has syntax errors");
    }

    Parse {
        path: path.to_string(),
        document,
        errors,
    }
}
