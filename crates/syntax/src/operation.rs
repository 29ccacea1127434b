use graphql_codegen_config::PluginConfig;
use heck::ToPascalCase;

/// The kind of GraphQL operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Suffix appended to operation type names
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

impl From<apollo_compiler::ast::OperationType> for OperationKind {
    fn from(operation_type: apollo_compiler::ast::OperationType) -> Self {
        match operation_type {
            apollo_compiler::ast::OperationType::Query => Self::Query,
            apollo_compiler::ast::OperationType::Mutation => Self::Mutation,
            apollo_compiler::ast::OperationType::Subscription => Self::Subscription,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Everything a generator needs to know about one operation.
///
/// Produced fresh for every operation; generators only read it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationDescriptor {
    pub kind: OperationKind,
    /// Operation name as written in the document (`getUser`)
    pub name: String,
    /// Derived type name (`GetUserQuery`), also the base of the hook name
    pub type_name: String,
    /// Name of the exported document constant (`GetUserDocument`)
    pub document_variable_name: String,
    pub result_type: String,
    pub variables_type: String,
    /// At least one variable is non-null without a default value
    pub has_required_variables: bool,
}

impl OperationDescriptor {
    /// Copy of this descriptor with `prefix` prepended to the result and
    /// variables type references.
    #[must_use]
    pub fn with_type_prefix(&self, prefix: &str) -> Self {
        Self {
            result_type: format!("{prefix}{}", self.result_type),
            variables_type: format!("{prefix}{}", self.variables_type),
            ..self.clone()
        }
    }
}

/// Naming rules for derived identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingOptions {
    pub omit_operation_suffix: bool,
    pub dedupe_operation_suffix: bool,
    pub document_variable_prefix: String,
    pub document_variable_suffix: String,
    pub fragment_variable_suffix: String,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self::from(&PluginConfig::default())
    }
}

impl From<&PluginConfig> for NamingOptions {
    fn from(config: &PluginConfig) -> Self {
        Self {
            omit_operation_suffix: config.omit_operation_suffix,
            dedupe_operation_suffix: config.dedupe_operation_suffix,
            document_variable_prefix: config.document_variable_prefix.clone(),
            document_variable_suffix: config.document_variable_suffix.clone(),
            fragment_variable_suffix: config.fragment_variable_suffix.clone(),
        }
    }
}

impl NamingOptions {
    /// `getUser` as a query becomes `GetUserQuery`.
    #[must_use]
    pub fn operation_type_name(&self, name: &str, kind: OperationKind) -> String {
        let base = name.to_pascal_case();
        let suffix = kind.suffix();

        if self.omit_operation_suffix || (self.dedupe_operation_suffix && base.ends_with(suffix)) {
            base
        } else {
            format!("{base}{suffix}")
        }
    }

    #[must_use]
    pub fn document_variable_name(&self, name: &str) -> String {
        format!(
            "{}{}{}",
            self.document_variable_prefix,
            name.to_pascal_case(),
            self.document_variable_suffix
        )
    }

    #[must_use]
    pub fn fragment_variable_name(&self, name: &str) -> String {
        format!("{}{}", name.to_pascal_case(), self.fragment_variable_suffix)
    }

    /// Build the descriptor for a named operation.
    #[must_use]
    pub fn describe(
        &self,
        kind: OperationKind,
        name: &str,
        has_required_variables: bool,
    ) -> OperationDescriptor {
        let type_name = self.operation_type_name(name, kind);
        OperationDescriptor {
            kind,
            name: name.to_string(),
            document_variable_name: self.document_variable_name(name),
            result_type: type_name.clone(),
            variables_type: format!("{type_name}Variables"),
            type_name,
            has_required_variables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_query() {
        let op = NamingOptions::default().describe(OperationKind::Query, "getUser", true);
        assert_eq!(op.type_name, "GetUserQuery");
        assert_eq!(op.document_variable_name, "GetUserDocument");
        assert_eq!(op.result_type, "GetUserQuery");
        assert_eq!(op.variables_type, "GetUserQueryVariables");
        assert!(op.has_required_variables);
    }

    #[test]
    fn test_omit_operation_suffix() {
        let naming = NamingOptions {
            omit_operation_suffix: true,
            ..NamingOptions::default()
        };
        let op = naming.describe(OperationKind::Mutation, "UpdateUser", false);
        assert_eq!(op.type_name, "UpdateUser");
        assert_eq!(op.variables_type, "UpdateUserVariables");
    }

    #[test]
    fn test_dedupe_operation_suffix() {
        let naming = NamingOptions {
            dedupe_operation_suffix: true,
            ..NamingOptions::default()
        };
        assert_eq!(
            naming.operation_type_name("UserQuery", OperationKind::Query),
            "UserQuery"
        );
        assert_eq!(
            naming.operation_type_name("UserQuery", OperationKind::Mutation),
            "UserQueryMutation"
        );

        let plain = NamingOptions::default();
        assert_eq!(
            plain.operation_type_name("UserQuery", OperationKind::Query),
            "UserQueryQuery"
        );
    }

    #[test]
    fn test_document_variable_affixes() {
        let naming = NamingOptions {
            document_variable_prefix: "Gql".to_string(),
            document_variable_suffix: "Doc".to_string(),
            ..NamingOptions::default()
        };
        assert_eq!(naming.document_variable_name("get_user"), "GqlGetUserDoc");
        assert_eq!(naming.fragment_variable_name("userFields"), "UserFieldsFragmentDoc");
    }

    #[test]
    fn test_with_type_prefix_only_touches_types() {
        let op = NamingOptions::default().describe(OperationKind::Query, "GetUser", false);
        let prefixed = op.with_type_prefix("Types.");
        assert_eq!(prefixed.result_type, "Types.GetUserQuery");
        assert_eq!(prefixed.variables_type, "Types.GetUserQueryVariables");
        assert_eq!(prefixed.type_name, op.type_name);
        assert_eq!(prefixed.document_variable_name, op.document_variable_name);
    }
}
