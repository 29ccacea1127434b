//! Fetcher strategies.
//!
//! A strategy decides how generated hooks reach the server. Exactly one is
//! selected per run from the `fetcher` option:
//!
//! | `fetcher` value               | Strategy                        |
//! |-------------------------------|---------------------------------|
//! | `"fetch"`                     | [`FetchFetcher`]                |
//! | `{ endpoint: "...", ... }`    | [`HardcodedFetchFetcher`]       |
//! | `"graphql-request"`           | [`GraphQLRequestClientFetcher`] |
//! | anything else                 | [`CustomMapperFetcher`]         |

mod custom_mapper;
mod fetch;
mod graphql_request;
mod hardcoded;
mod hook;

pub use custom_mapper::{CustomMapperFetcher, ParsedMapper};
pub use fetch::FetchFetcher;
pub use graphql_request::GraphQLRequestClientFetcher;
pub use hardcoded::HardcodedFetchFetcher;
pub use hook::Transport;

use crate::GenerationContext;
use graphql_codegen_syntax::OperationDescriptor;

/// Code emission for one transport.
///
/// Implementors provide the shared fetcher and the [`Transport`] hooks embed.
/// The hook declarations themselves come from the provided methods and should
/// not be overridden, so every strategy renders the same hook shape.
pub trait FetcherRenderer {
    /// The fetcher emitted once per output file. May be empty.
    fn render_fetcher_implementation(&self, ctx: &mut GenerationContext) -> String;

    /// Transport parameter and request expression for one operation.
    fn transport(&self, op: &OperationDescriptor, ctx: &mut GenerationContext) -> Transport;

    fn render_query_hook(&self, op: &OperationDescriptor, ctx: &mut GenerationContext) -> String {
        let transport = self.transport(op, ctx);
        hook::query_hook(op, &transport, ctx)
    }

    fn render_mutation_hook(&self, op: &OperationDescriptor, ctx: &mut GenerationContext) -> String {
        let transport = self.transport(op, ctx);
        hook::mutation_hook(op, &transport, ctx)
    }
}

/// The active fetcher strategy of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetcherStrategy {
    Fetch(FetchFetcher),
    HardcodedFetch(HardcodedFetchFetcher),
    GraphQLRequest(GraphQLRequestClientFetcher),
    CustomMapper(CustomMapperFetcher),
}

impl FetcherStrategy {
    /// Select the strategy for a raw `fetcher` value.
    ///
    /// First match wins: `"fetch"`, then an object with a non-empty string
    /// `endpoint`, then `"graphql-request"`. Every other value, including
    /// `null`, numbers and objects without an endpoint, selects the custom
    /// mapper. Strings are used as the mapper verbatim; other values use their
    /// JSON text. Unrecognized shapes are never rejected here.
    #[must_use]
    pub fn select(raw: &serde_json::Value) -> Self {
        if raw.as_str() == Some("fetch") {
            return Self::Fetch(FetchFetcher);
        }

        if let Some(object) = raw.as_object() {
            if let Some(endpoint) = object
                .get("endpoint")
                .and_then(serde_json::Value::as_str)
                .filter(|endpoint| !endpoint.is_empty())
            {
                return Self::HardcodedFetch(HardcodedFetchFetcher::new(
                    endpoint,
                    object.get("fetchParams"),
                ));
            }
        }

        if raw.as_str() == Some("graphql-request") {
            return Self::GraphQLRequest(GraphQLRequestClientFetcher);
        }

        let mapper = raw
            .as_str()
            .map_or_else(|| raw.to_string(), ToString::to_string);
        Self::CustomMapper(CustomMapperFetcher::new(&mapper))
    }

    /// Short name of the strategy, for logs.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::HardcodedFetch(_) => "hardcoded-fetch",
            Self::GraphQLRequest(_) => "graphql-request",
            Self::CustomMapper(_) => "custom-mapper",
        }
    }

    fn renderer(&self) -> &dyn FetcherRenderer {
        match self {
            Self::Fetch(fetcher) => fetcher,
            Self::HardcodedFetch(fetcher) => fetcher,
            Self::GraphQLRequest(fetcher) => fetcher,
            Self::CustomMapper(fetcher) => fetcher,
        }
    }
}

impl FetcherRenderer for FetcherStrategy {
    fn render_fetcher_implementation(&self, ctx: &mut GenerationContext) -> String {
        self.renderer().render_fetcher_implementation(ctx)
    }

    fn transport(&self, op: &OperationDescriptor, ctx: &mut GenerationContext) -> Transport {
        self.renderer().transport(op, ctx)
    }
}

/// Select the fetcher strategy for a raw `fetcher` configuration value.
#[must_use]
pub fn select_strategy(raw: &serde_json::Value) -> FetcherStrategy {
    FetcherStrategy::select(raw)
}
