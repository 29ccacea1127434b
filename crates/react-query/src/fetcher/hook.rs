//! Hook declarations shared by every fetcher.
//!
//! Only the [`Transport`] differs between fetchers; names, generics and
//! variables handling are rendered here so all fetchers stay interchangeable.

use crate::GenerationContext;
use graphql_codegen_syntax::OperationDescriptor;

/// How a hook reaches the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transport {
    /// Leading hook parameter carrying the transport, if the fetcher needs one
    pub param: Option<&'static str>,
    /// Expression returning the request thunk, e.g. `fetcher<R, V>(GetUserDocument, variables)`
    pub call: String,
}

impl Transport {
    pub(crate) fn new(param: Option<&'static str>, call: String) -> Self {
        Self { param, call }
    }

    fn param_line(&self) -> String {
        self.param
            .map(|param| format!("\n      {param},"))
            .unwrap_or_default()
    }
}

/// `variables: V` when the operation has required variables, `variables?: V` otherwise.
fn variables_param(op: &OperationDescriptor) -> String {
    let optional = if op.has_required_variables { "" } else { "?" };
    format!("variables{optional}: {}", op.variables_type)
}

pub(crate) fn query_hook(
    op: &OperationDescriptor,
    transport: &Transport,
    ctx: &mut GenerationContext,
) -> String {
    ctx.use_identifier("useQuery");
    ctx.use_identifier("QueryConfig");

    format!(
        "export const use{type_name} = <
      TData = {result},
      TError = unknown
    >({param}
      {variables},
      options?: QueryConfig<TData, TError>
    ) =>
    useQuery<TData, TError>(
      ['{name}', variables],
      {call},
      options
    );",
        type_name = op.type_name,
        result = op.result_type,
        param = transport.param_line(),
        variables = variables_param(op),
        name = op.name,
        call = transport.call,
    )
}

pub(crate) fn mutation_hook(
    op: &OperationDescriptor,
    transport: &Transport,
    ctx: &mut GenerationContext,
) -> String {
    ctx.use_identifier("useMutation");
    ctx.use_identifier("MutationConfig");

    format!(
        "export const use{type_name} = <
      TError = unknown,
      TContext = unknown
    >({param}
      options?: MutationConfig<{result}, TError, {vars}, TContext>
    ) =>
    useMutation<{result}, TError, {vars}, TContext>(
      (variables?: {vars}) => {call}(),
      options
    );",
        type_name = op.type_name,
        result = op.result_type,
        vars = op.variables_type,
        param = transport.param_line(),
        call = transport.call,
    )
}

/// `fetcher<Result, Variables>` with the operation's type references.
pub(crate) fn typed_fetcher(name: &str, op: &OperationDescriptor) -> String {
    format!("{name}<{}, {}>", op.result_type, op.variables_type)
}
