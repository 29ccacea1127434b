//! End-to-end generation tests
//!
//! These run documents through graphql-codegen-syntax and render them with
//! every fetcher strategy.

use graphql_codegen_config::PluginConfig;
use graphql_codegen_syntax::{DocumentSet, NamingOptions, OperationDescriptor, OperationKind};
use graphql_react_query::{generate, OperationSource, PluginOutput};
use serde_json::json;

const DOCUMENT: &str = r"
fragment UserFields on User {
  id
  name
}

query GetUser($id: ID!) {
  user(id: $id) {
    ...UserFields
  }
}

subscription OnThing {
  thing {
    id
  }
}

mutation UpdateUser($id: ID!, $name: String) {
  updateUser(id: $id, name: $name) {
    ...UserFields
  }
}
";

fn documents(config: &PluginConfig) -> DocumentSet {
    DocumentSet::from_sources(NamingOptions::from(config), [("operations.graphql", DOCUMENT)])
        .expect("valid documents")
}

fn generate_with(fetcher: serde_json::Value) -> PluginOutput {
    let config = PluginConfig {
        fetcher,
        ..PluginConfig::default()
    };
    generate(&documents(&config), &config)
}

/// Hook lines that do not depend on the transport
fn transport_independent_lines(hook: &str) -> Vec<&str> {
    hook.lines()
        .filter(|line| {
            !(line.contains("fetcher<")
                || line.contains("useFetchData<")
                || line.contains("dataSource:")
                || line.contains("client: GraphQLClient"))
        })
        .collect()
}

/// A fixed operation list, standing in for a document set
struct Operations(Vec<OperationDescriptor>);

impl OperationSource for Operations {
    fn operations(&self) -> Vec<OperationDescriptor> {
        self.0.clone()
    }

    fn operation_document(&self, operation: &OperationDescriptor) -> Option<String> {
        Some(format!(
            "export const {} = `{}`;",
            operation.document_variable_name, operation.name
        ))
    }
}

#[test]
fn test_default_fetcher_renders_file() {
    let output = generate(&documents(&PluginConfig::default()), &PluginConfig::default());
    let rendered = output.render();

    assert_eq!(
        output.imports,
        vec!["import { useQuery, QueryConfig, useMutation, MutationConfig } from 'react-query';"]
    );
    assert!(output.fetcher.starts_with("function fetcher<TData, TVariables>(endpoint: string"));
    assert_eq!(output.fragments.len(), 1);
    assert!(output.fragments[0].starts_with("export const UserFieldsFragmentDoc = `"));

    let imports_at = rendered.find("import {").expect("imports");
    let fetcher_at = rendered.find("function fetcher").expect("fetcher");
    let fragment_at = rendered.find("UserFieldsFragmentDoc = `").expect("fragment");
    let document_at = rendered.find("export const GetUserDocument").expect("document");
    let hook_at = rendered.find("export const useGetUserQuery").expect("hook");
    assert!(imports_at < fetcher_at);
    assert!(fetcher_at < fragment_at);
    assert!(fragment_at < document_at);
    assert!(document_at < hook_at);
    assert!(rendered.contains("${UserFieldsFragmentDoc}"));
}

#[test]
fn test_subscription_is_skipped_and_others_render_in_order() {
    let output = generate_with(json!("fetch"));

    let names: Vec<&str> = output.operations.iter().map(|op| op.name.as_str()).collect();
    assert_eq!(names, vec!["GetUser", "OnThing", "UpdateUser"]);

    let hooks: Vec<&str> = output.hooks().collect();
    assert_eq!(hooks.len(), 2);
    assert!(hooks[0].starts_with("export const useGetUserQuery = <"));
    assert!(hooks[1].starts_with("export const useUpdateUserMutation = <"));

    let skipped: Vec<_> = output.skipped().collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].kind, OperationKind::Subscription);
    assert!(skipped[0].to_string().contains("\"OnThing\""));

    let rendered = output.render();
    assert!(rendered.contains("export const OnThingDocument = `"));
    assert!(!rendered.contains("useOnThing"));
}

#[test]
fn test_generation_is_idempotent() {
    let config = PluginConfig {
        fetcher: json!("graphql-request"),
        ..PluginConfig::default()
    };
    let set = documents(&config);

    let first = generate(&set, &config);
    let second = generate(&set, &config);
    assert_eq!(first, second);
    assert_eq!(first.render(), second.render());
}

#[test]
fn test_import_operation_types_from_prefixes_type_references() {
    let plain = generate(&documents(&PluginConfig::default()), &PluginConfig::default());

    let config = PluginConfig {
        import_operation_types_from: Some("types".to_string()),
        ..PluginConfig::default()
    };
    let prefixed = generate(&documents(&config), &config);

    let query = prefixed.hooks().next().expect("query hook");
    assert!(query.contains("TData = types.GetUserQuery,"));
    assert!(query.contains("variables: types.GetUserQueryVariables,"));
    assert!(query.contains("fetcher<types.GetUserQuery, types.GetUserQueryVariables>"));

    let mutation = prefixed.hooks().nth(1).expect("mutation hook");
    assert!(mutation.contains(
        "MutationConfig<types.UpdateUserMutation, TError, types.UpdateUserMutationVariables, TContext>"
    ));

    // Removing the prefix gives back the unprefixed output
    let stripped: Vec<String> = prefixed.hooks().map(|hook| hook.replace("types.", "")).collect();
    let expected: Vec<&str> = plain.hooks().collect();
    assert_eq!(stripped, expected);
    assert_eq!(prefixed.imports, plain.imports);
    assert_eq!(prefixed.fetcher, plain.fetcher);
}

#[test]
fn test_switching_fetcher_only_changes_transport() {
    let fetchers = [
        json!("fetch"),
        json!({ "endpoint": "http://localhost:4000/graphql" }),
        json!("graphql-request"),
        json!("./fetcher#useFetchData"),
    ];
    let outputs: Vec<PluginOutput> = fetchers.into_iter().map(generate_with).collect();

    let baseline: Vec<Vec<&str>> = outputs[0].hooks().map(transport_independent_lines).collect();
    for output in &outputs[1..] {
        let hooks: Vec<Vec<&str>> = output.hooks().map(transport_independent_lines).collect();
        assert_eq!(hooks, baseline);
        assert_eq!(output.fragments, outputs[0].fragments);
    }

    let implementations: Vec<&str> = outputs.iter().map(|output| output.fetcher.as_str()).collect();
    for (i, implementation) in implementations.iter().enumerate() {
        for other in &implementations[i + 1..] {
            assert_ne!(implementation, other);
        }
    }
}

#[test]
fn test_hardcoded_endpoint_is_baked_in() {
    let output = generate_with(json!({
        "endpoint": "http://localhost:4000/graphql",
        "fetchParams": { "headers": { "Authorization": "Bearer token" } }
    }));

    assert!(output.fetcher.contains("await fetch(\"http://localhost:4000/graphql\", {"));
    assert!(output
        .fetcher
        .contains(r#"...({"headers":{"Authorization":"Bearer token"}}),"#));
    assert!(output.hooks().all(|hook| !hook.contains("dataSource")));
}

#[test]
fn test_graphql_request_imports_client_before_hooks() {
    let output = generate_with(json!("graphql-request"));

    insta::assert_debug_snapshot!(output.imports, @r#"
    [
        "import { GraphQLClient } from 'graphql-request';",
        "import { useQuery, QueryConfig, useMutation, MutationConfig } from 'react-query';",
    ]
    "#);
}

#[test]
fn test_custom_mapper_import_is_the_fetcher() {
    let output = generate_with(json!("./fetcher#useFetchData"));

    assert_eq!(output.fetcher, "import { useFetchData } from './fetcher';");
    assert!(output
        .hooks()
        .all(|hook| hook.contains("useFetchData<")));
}

#[test]
fn test_falsy_fetcher_renders_default_fetch() {
    let expected = generate_with(json!("fetch")).render();

    for raw in [json!(null), json!(""), json!(false), json!(0)] {
        let output = generate_with(raw.clone());
        assert!(
            output
                .fetcher
                .starts_with("function fetcher<TData, TVariables>(endpoint: string"),
            "{raw}"
        );
        assert_eq!(output.render(), expected, "{raw}");
    }
}

#[test]
fn test_unrecognized_fetcher_falls_back_to_custom_mapper() {
    let output = generate_with(json!(42));

    assert!(output.fetcher.is_empty());
    let query = output.hooks().next().expect("query hook");
    assert!(query.contains("42<GetUserQuery, GetUserQueryVariables>(GetUserDocument, variables)"));
}

#[test]
fn test_zero_operations_have_no_hook_import() {
    let source = Operations(Vec::new());
    let output = generate(&source, &PluginConfig::default());

    assert!(output.imports.is_empty());
    assert!(output.operations.is_empty());
    assert!(!output.render().contains("react-query"));
}

#[test]
fn test_only_subscriptions_have_no_hook_import() {
    let naming = NamingOptions::default();
    let source = Operations(vec![naming.describe(OperationKind::Subscription, "OnThing", false)]);
    let output = generate(&source, &PluginConfig::default());

    assert!(output.imports.is_empty());
    assert_eq!(output.skipped().count(), 1);
    assert!(output.render().contains("export const OnThingDocument = `OnThing`;"));
}

#[test]
fn test_optional_variables_are_optional_in_query_hooks() {
    let naming = NamingOptions::default();
    let source = Operations(vec![
        naming.describe(OperationKind::Query, "ListUsers", false),
        naming.describe(OperationKind::Query, "GetUser", true),
    ]);
    let output = generate(&source, &PluginConfig::default());
    let hooks: Vec<&str> = output.hooks().collect();

    assert!(hooks[0].contains("variables?: ListUsersQueryVariables,"));
    assert!(hooks[1].contains("variables: GetUserQueryVariables,"));
}
