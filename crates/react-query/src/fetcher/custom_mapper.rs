use super::hook::{typed_fetcher, Transport};
use super::FetcherRenderer;
use crate::GenerationContext;
use graphql_codegen_syntax::OperationDescriptor;

/// Local name bound by `path#default` when no alias is given.
const DEFAULT_IMPORT_NAME: &str = "fetcher";

/// A fetcher reference in `path#identifier` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedMapper {
    /// An identifier already in scope of the generated file
    Internal { identifier: String },
    /// An identifier imported from another module
    External {
        source: String,
        /// Exported name, `None` for the default export
        imported: Option<String>,
        /// Name the hooks call
        local: String,
    },
}

impl ParsedMapper {
    /// Parse a mapper string. Never fails: anything without `#` is taken as a
    /// local identifier.
    ///
    /// - `useFetchData` → local identifier
    /// - `./fetcher#useFetchData` → `import { useFetchData } from './fetcher';`
    /// - `./fetcher#useFetchData as useData` → named import with alias
    /// - `./fetcher#default` / `./fetcher#default as useData` → default import
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let Some((source, target)) = raw.split_once('#') else {
            return Self::Internal {
                identifier: raw.trim().to_string(),
            };
        };

        let (imported, alias) = match target.split_once(" as ") {
            Some((imported, alias)) => (imported.trim(), Some(alias.trim())),
            None => (target.trim(), None),
        };

        let (imported, local) = if imported == "default" {
            (None, alias.unwrap_or(DEFAULT_IMPORT_NAME))
        } else {
            (Some(imported.to_string()), alias.unwrap_or(imported))
        };

        Self::External {
            source: source.trim().to_string(),
            imported,
            local: local.to_string(),
        }
    }

    /// The identifier generated hooks call.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::Internal { identifier } => identifier,
            Self::External { local, .. } => local,
        }
    }

    /// Import statement bringing the fetcher into scope, if it is external.
    #[must_use]
    pub fn import_statement(&self) -> Option<String> {
        let Self::External {
            source,
            imported,
            local,
        } = self
        else {
            return None;
        };

        let statement = match imported {
            None => format!("import {local} from '{source}';"),
            Some(imported) if imported == local => {
                format!("import {{ {imported} }} from '{source}';")
            }
            Some(imported) => format!("import {{ {imported} as {local} }} from '{source}';"),
        };
        Some(statement)
    }
}

/// Hooks call a user-supplied fetcher with `(document, variables)`.
///
/// The fetcher must return a `() => Promise<TData>` thunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomMapperFetcher {
    mapper: ParsedMapper,
}

impl CustomMapperFetcher {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            mapper: ParsedMapper::parse(raw),
        }
    }

    #[must_use]
    pub const fn mapper(&self) -> &ParsedMapper {
        &self.mapper
    }
}

impl FetcherRenderer for CustomMapperFetcher {
    /// The fetcher lives elsewhere: only its import is emitted, if any.
    fn render_fetcher_implementation(&self, _ctx: &mut GenerationContext) -> String {
        self.mapper.import_statement().unwrap_or_default()
    }

    fn transport(&self, op: &OperationDescriptor, _ctx: &mut GenerationContext) -> Transport {
        Transport::new(
            None,
            format!(
                "{}({}, variables)",
                typed_fetcher(self.mapper.identifier(), op),
                op.document_variable_name
            ),
        )
    }
}
