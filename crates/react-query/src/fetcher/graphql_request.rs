use super::hook::{typed_fetcher, Transport};
use super::FetcherRenderer;
use crate::GenerationContext;
use graphql_codegen_syntax::OperationDescriptor;

const CLIENT_IMPORT: &str = "import { GraphQLClient } from 'graphql-request';";

/// Hooks take a `GraphQLClient` from `graphql-request`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphQLRequestClientFetcher;

impl FetcherRenderer for GraphQLRequestClientFetcher {
    fn render_fetcher_implementation(&self, ctx: &mut GenerationContext) -> String {
        ctx.add_import(CLIENT_IMPORT);

        r"function fetcher<TData, TVariables>(client: GraphQLClient, query: string, variables?: TVariables) {
  return async (): Promise<TData> => client.request<TData, TVariables>(query, variables);
}"
        .to_string()
    }

    fn transport(&self, op: &OperationDescriptor, ctx: &mut GenerationContext) -> Transport {
        ctx.add_import(CLIENT_IMPORT);

        Transport::new(
            Some("client: GraphQLClient"),
            format!(
                "{}(client, {}, variables)",
                typed_fetcher("fetcher", op),
                op.document_variable_name
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_codegen_syntax::{NamingOptions, OperationKind};

    #[test]
    fn test_implementation_registers_client_import() {
        let mut ctx = GenerationContext::new();
        let implementation = GraphQLRequestClientFetcher.render_fetcher_implementation(&mut ctx);

        assert!(implementation.contains("client.request<TData, TVariables>(query, variables)"));
        assert_eq!(ctx.imports().collect::<Vec<_>>(), vec![CLIENT_IMPORT]);
    }

    #[test]
    fn test_hooks_take_client() {
        let op = NamingOptions::default().describe(OperationKind::Mutation, "AddTodo", true);
        let mut ctx = GenerationContext::new();
        let hook = GraphQLRequestClientFetcher.render_mutation_hook(&op, &mut ctx);

        assert!(hook.contains("client: GraphQLClient,"));
        assert!(hook.contains(
            "(variables?: AddTodoMutationVariables) => fetcher<AddTodoMutation, AddTodoMutationVariables>(client, AddTodoDocument, variables)(),"
        ));
        assert_eq!(ctx.imports().count(), 1);
    }
}
