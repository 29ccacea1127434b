use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use graphql_codegen_config::PluginConfig;
use graphql_codegen_syntax::{DocumentSet, NamingOptions};
use std::hint::black_box;

const FRAGMENTS: &str = r"
fragment UserFields on User {
  id
  name
  email
}

fragment PostFields on Post {
  id
  title
  author {
    ...UserFields
  }
}
";

/// A document with `count` queries, mutations and subscriptions
fn synthetic_document(count: usize) -> String {
    let mut source = String::from(FRAGMENTS);
    for i in 0..count {
        source.push_str(&format!(
            r"
query GetUser{i}($id: ID!) {{
  user(id: $id) {{
    ...UserFields
    posts {{
      ...PostFields
    }}
  }}
}}

mutation UpdatePost{i}($id: ID!, $title: String) {{
  updatePost(id: $id, title: $title) {{
    ...PostFields
  }}
}}

subscription OnPost{i} {{
  postAdded {{
    id
  }}
}}
"
        ));
    }
    source
}

fn document_set(source: &str) -> DocumentSet {
    DocumentSet::from_sources(NamingOptions::default(), [("operations.graphql", source)])
        .unwrap_or_else(|e| panic!("invalid benchmark document: {e}"))
}

fn bench_parse_documents(c: &mut Criterion) {
    let source = synthetic_document(100);
    c.bench_function("parse_documents_100", |b| {
        b.iter(|| black_box(document_set(&source)));
    });
}

fn bench_generate(c: &mut Criterion) {
    let documents = document_set(&synthetic_document(100));
    let config = PluginConfig::default();

    c.bench_function("generate_fetch_100", |b| {
        b.iter(|| black_box(graphql_react_query::generate(&documents, &config).render()));
    });
}

fn bench_generate_per_fetcher(c: &mut Criterion) {
    let documents = document_set(&synthetic_document(25));
    let fetchers = [
        ("fetch", serde_json::json!("fetch")),
        (
            "hardcoded",
            serde_json::json!({ "endpoint": "http://localhost:4000/graphql" }),
        ),
        ("graphql_request", serde_json::json!("graphql-request")),
        ("custom_mapper", serde_json::json!("./fetcher#useFetchData")),
    ];

    let mut group = c.benchmark_group("generate_per_fetcher");
    for (name, fetcher) in fetchers {
        let config = PluginConfig {
            fetcher,
            ..PluginConfig::default()
        };
        group.bench_function(name, |b| {
            b.iter_batched(
                || config.clone(),
                |config| black_box(graphql_react_query::generate(&documents, &config)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse_documents,
    bench_generate,
    bench_generate_per_fetcher
);
criterion_main!(benches);
