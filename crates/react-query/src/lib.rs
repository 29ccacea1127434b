//! # React Query Hooks for GraphQL Operations
//!
//! Renders one `react-query` hook per query and mutation of a document set.
//! How the hooks reach the server is decided by the `fetcher` option, which
//! selects one of the [`FetcherStrategy`] variants.
//!
//! ```rust,ignore
//! let documents = DocumentSet::from_sources(naming, sources)?;
//! let output = graphql_react_query::generate(&documents, &config);
//! for skipped in output.skipped() {
//!     eprintln!("{skipped}");
//! }
//! std::fs::write("hooks.ts", output.render())?;
//! ```
//!
//! Subscriptions are not supported. They keep their document constant but
//! get no hook, and are reported through [`PluginOutput::skipped`].

mod context;
mod fetcher;
mod output;
mod source;
mod visitor;

pub use context::GenerationContext;
pub use fetcher::{
    select_strategy, CustomMapperFetcher, FetchFetcher, FetcherRenderer, FetcherStrategy,
    GraphQLRequestClientFetcher, HardcodedFetchFetcher, ParsedMapper, Transport,
};
pub use output::{OperationOutput, PluginOutput, RenderedOperation, SkippedOperation};
pub use source::OperationSource;
pub use visitor::ReactQueryVisitor;

use graphql_codegen_config::PluginConfig;

/// Generate the hooks file for one output target.
///
/// Every call is an independent run with its own identifier registry.
#[must_use]
pub fn generate<S: OperationSource + ?Sized>(source: &S, config: &PluginConfig) -> PluginOutput {
    let mut visitor = ReactQueryVisitor::new(source, config);
    let operations = visitor.visit();
    let fetcher = visitor.fetcher_implementation();
    let imports = visitor.imports();

    tracing::debug!(
        operations = operations.len(),
        imports = imports.len(),
        "Generated react-query hooks"
    );

    PluginOutput {
        imports,
        fetcher,
        fragments: source.fragment_documents(),
        operations,
    }
}
