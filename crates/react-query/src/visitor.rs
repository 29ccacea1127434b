use crate::fetcher::{FetchFetcher, FetcherRenderer, FetcherStrategy};
use crate::output::{OperationOutput, RenderedOperation, SkippedOperation};
use crate::source::OperationSource;
use crate::GenerationContext;
use graphql_codegen_config::PluginConfig;
use graphql_codegen_syntax::{OperationDescriptor, OperationKind};

/// Falsy `fetcher` values (`null`, `false`, `0`, `""`) mean the default
/// fetch strategy. Everything else goes through [`FetcherStrategy::select`].
fn resolve_fetcher(raw: &serde_json::Value) -> FetcherStrategy {
    let falsy = match raw {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(flag) => !flag,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON),
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => false,
    };
    if falsy {
        FetcherStrategy::Fetch(FetchFetcher)
    } else {
        FetcherStrategy::select(raw)
    }
}

/// Walks the operations of a source and renders a hook for each one through
/// the selected fetcher.
///
/// A visitor is one generation run. The identifiers it registers are never
/// shared with another visitor.
pub struct ReactQueryVisitor<'a, S: OperationSource + ?Sized> {
    source: &'a S,
    fetcher: FetcherStrategy,
    import_prefix: String,
    context: GenerationContext,
    collected: usize,
}

impl<'a, S: OperationSource + ?Sized> ReactQueryVisitor<'a, S> {
    #[must_use]
    pub fn new(source: &'a S, config: &PluginConfig) -> Self {
        let fetcher = resolve_fetcher(&config.fetcher);
        tracing::debug!(fetcher = fetcher.kind_name(), "Selected fetcher");

        Self {
            source,
            fetcher,
            import_prefix: config.import_prefix(),
            context: GenerationContext::new(),
            collected: 0,
        }
    }

    #[must_use]
    pub const fn fetcher(&self) -> &FetcherStrategy {
        &self.fetcher
    }

    #[must_use]
    pub const fn context(&self) -> &GenerationContext {
        &self.context
    }

    /// Render one operation. Subscriptions are skipped, not rejected.
    pub fn build_operation(&mut self, op: &OperationDescriptor) -> OperationOutput {
        let op = op.with_type_prefix(&self.import_prefix);

        let hook = match op.kind {
            OperationKind::Query => self.fetcher.render_query_hook(&op, &mut self.context),
            OperationKind::Mutation => self.fetcher.render_mutation_hook(&op, &mut self.context),
            OperationKind::Subscription => {
                let skipped = SkippedOperation {
                    name: op.name,
                    kind: op.kind,
                };
                tracing::warn!("{skipped}");
                return OperationOutput::Skipped(skipped);
            }
        };

        self.collected += 1;
        OperationOutput::Hook(hook)
    }

    /// Render every operation of the source, in source order.
    pub fn visit(&mut self) -> Vec<RenderedOperation> {
        let source = self.source;
        source
            .operations()
            .iter()
            .map(|op| RenderedOperation {
                name: op.name.clone(),
                document: source.operation_document(op),
                output: self.build_operation(op),
            })
            .collect()
    }

    /// Import statements for everything rendered so far.
    ///
    /// The `react-query` import is added only once a hook was rendered.
    #[must_use]
    pub fn imports(&self) -> Vec<String> {
        let mut imports: Vec<String> = self.context.imports().map(ToString::to_string).collect();

        if self.collected > 0 && self.context.has_identifiers() {
            let identifiers: Vec<&str> = self.context.identifiers().collect();
            imports.push(format!(
                "import {{ {} }} from 'react-query';",
                identifiers.join(", ")
            ));
        }

        imports
    }

    /// The shared fetcher of the selected strategy.
    pub fn fetcher_implementation(&mut self) -> String {
        self.fetcher.render_fetcher_implementation(&mut self.context)
    }
}
