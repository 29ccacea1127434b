use graphql_codegen_syntax::{DocumentSet, OperationDescriptor};

/// Where the visitor reads operations from.
///
/// [`DocumentSet`] is the usual source; tests substitute fixed lists.
pub trait OperationSource {
    /// Operations in output order.
    fn operations(&self) -> Vec<OperationDescriptor>;

    /// The exported document constant for `operation`, if the source has one.
    fn operation_document(&self, operation: &OperationDescriptor) -> Option<String>;

    /// Fragment document constants, dependencies first.
    fn fragment_documents(&self) -> Vec<String> {
        Vec::new()
    }
}

impl OperationSource for DocumentSet {
    fn operations(&self) -> Vec<OperationDescriptor> {
        DocumentSet::operations(self)
    }

    fn operation_document(&self, operation: &OperationDescriptor) -> Option<String> {
        DocumentSet::operation_document(self, operation)
    }

    fn fragment_documents(&self) -> Vec<String> {
        DocumentSet::fragment_documents(self)
    }
}

impl OperationSource for [OperationDescriptor] {
    fn operations(&self) -> Vec<OperationDescriptor> {
        self.to_vec()
    }

    fn operation_document(&self, _operation: &OperationDescriptor) -> Option<String> {
        None
    }
}
