use crate::selection::Argument;
use crate::selection::Directive;
use crate::selection::Selection;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) identity: u64,
    pub(crate) name: String,
    pub(crate) selection_set: Vec<Selection>,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    pub fn directives(&self) -> &[Directive] {
        self.directives.as_slice()
    }

    /// Tag of the builder node this selection was produced from. Only used to
    /// mint a unique alias when sibling selections share an effective name.
    pub fn identity(&self) -> u64 {
        self.identity
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /**
     * If an alias was specified for this selection, return the alias.
     * Otherwise return the name of the field.
     */
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or(self.name.as_str())
    }

    /// Empty iff the selected field is a leaf.
    pub fn selection_set(&self) -> &[Selection] {
        self.selection_set.as_slice()
    }
}
