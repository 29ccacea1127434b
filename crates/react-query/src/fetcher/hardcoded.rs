use super::hook::{typed_fetcher, Transport};
use super::FetcherRenderer;
use crate::GenerationContext;
use graphql_codegen_syntax::OperationDescriptor;

/// The endpoint (and optional fetch params) are baked into the fetcher, so
/// hooks need no transport parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedFetchFetcher {
    endpoint: String,
    /// Expression spread into the request init
    fetch_params: Option<String>,
}

impl HardcodedFetchFetcher {
    /// `fetch_params` may be a string holding a JavaScript expression or any
    /// JSON value, which is embedded as an object literal.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, fetch_params: Option<&serde_json::Value>) -> Self {
        let fetch_params = match fetch_params {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(expression)) => Some(expression.clone()),
            Some(value) => Some(value.to_string()),
        };

        Self {
            endpoint: endpoint.into(),
            fetch_params,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_init(&self) -> String {
        match &self.fetch_params {
            Some(params) => format!("      method: 'POST',\n      ...({params}),"),
            None => "      method: 'POST',".to_string(),
        }
    }
}

impl FetcherRenderer for HardcodedFetchFetcher {
    fn render_fetcher_implementation(&self, _ctx: &mut GenerationContext) -> String {
        // JSON string literals are valid JavaScript string literals
        let endpoint = serde_json::Value::String(self.endpoint.clone()).to_string();

        format!(
            "function fetcher<TData, TVariables>(query: string, variables?: TVariables) {{
  return async (): Promise<TData> => {{
    const res = await fetch({endpoint}, {{
{request_init}
      body: JSON.stringify({{ query, variables }}),
    }});

    const json = await res.json();

    if (json.errors) {{
      const {{ message }} = json.errors[0];

      throw new Error(message);
    }}

    return json.data;
  }}
}}",
            request_init = self.request_init(),
        )
    }

    fn transport(&self, op: &OperationDescriptor, _ctx: &mut GenerationContext) -> Transport {
        Transport::new(
            None,
            format!(
                "{}({}, variables)",
                typed_fetcher("fetcher", op),
                op.document_variable_name
            ),
        )
    }
}
