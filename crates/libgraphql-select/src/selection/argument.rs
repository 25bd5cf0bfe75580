use crate::encoding::ArgEncoder;
use crate::Value;

/// A single argument passed to a field or directive.
///
/// `type_name` is the GraphQL input type (e.g. `"ID!"` or `"[String]"`) used to
/// declare the variable when the argument value gets hoisted out of the
/// document.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub(crate) name: String,
    pub(crate) type_name: String,
    pub(crate) value: Value,
}
impl Argument {
    /// Encode `value` with its [`ArgEncoder`] and wrap it as an argument.
    pub fn new(
        name: impl Into<String>,
        value: impl ArgEncoder,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            value: value.encode(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
