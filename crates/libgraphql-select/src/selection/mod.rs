mod argument;
mod directive;
mod field_selection;
mod inline_fragment;
#[allow(clippy::module_inception)]
mod selection;

pub use argument::Argument;
pub use directive::Directive;
pub use field_selection::FieldSelection;
pub use inline_fragment::InlineFragment;
pub use selection::Selection;
