use super::hook::{typed_fetcher, Transport};
use super::FetcherRenderer;
use crate::GenerationContext;
use graphql_codegen_syntax::OperationDescriptor;

/// Hooks take the endpoint and `RequestInit` at call time and use the global `fetch`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchFetcher;

impl FetcherRenderer for FetchFetcher {
    fn render_fetcher_implementation(&self, _ctx: &mut GenerationContext) -> String {
        r"function fetcher<TData, TVariables>(endpoint: string, requestInit: RequestInit, query: string, variables?: TVariables) {
  return async (): Promise<TData> => {
    const res = await fetch(endpoint, {
      method: 'POST',
      ...requestInit,
      body: JSON.stringify({ query, variables }),
    });

    const json = await res.json();

    if (json.errors) {
      const { message } = json.errors[0];

      throw new Error(message);
    }

    return json.data;
  }
}"
        .to_string()
    }

    fn transport(&self, op: &OperationDescriptor, _ctx: &mut GenerationContext) -> Transport {
        Transport::new(
            Some("dataSource: { endpoint: string, fetchParams?: RequestInit }"),
            format!(
                "{}(dataSource.endpoint, dataSource.fetchParams || {{}}, {}, variables)",
                typed_fetcher("fetcher", op),
                op.document_variable_name
            ),
        )
    }
}
