use crate::selection::Argument;

/// A directive annotation (e.g. `@include(if: $cond)`) attached to a field.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) arguments: Vec<Argument>,
    pub(crate) name: String,
}
impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: vec![],
            name: name.into(),
        }
    }

    /// Add an [`Argument`] after any previously added `Argument`s.
    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
