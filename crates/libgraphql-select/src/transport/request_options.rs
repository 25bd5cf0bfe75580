/// Serialization settings applied when a [`HttpClient`](crate::transport::HttpClient)
/// turns a builder into a request.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub drop_null_input_values: bool,
    pub operation_name: Option<String>,
    pub use_variables: bool,
}
impl RequestOptions {
    pub fn new() -> Self {
        Self {
            drop_null_input_values: false,
            operation_name: None,
            use_variables: true,
        }
    }

    pub fn with_drop_null_input_values(mut self, drop_null_input_values: bool) -> Self {
        self.drop_null_input_values = drop_null_input_values;
        self
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_use_variables(mut self, use_variables: bool) -> Self {
        self.use_variables = use_variables;
        self
    }
}
impl std::default::Default for RequestOptions {
    fn default() -> Self {
        Self::new()
    }
}
