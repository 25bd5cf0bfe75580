//! The selection builder algebra.
//!
//! A [`SelectionBuilder<Origin, A>`] describes a set of fields to select on the
//! GraphQL type represented by the marker type `Origin`, together with how to
//! decode the selected data into an `A`. Builders are small, immutable values
//! that compose with [`SelectionBuilder::zip`], [`SelectionBuilder::map`] and
//! friends.

mod choice_of;
mod composite_node;
mod field;
mod field_builder;
mod list_of;
mod mapping;
mod null_field;
mod obj;
mod option_of;
mod pure;
mod scalar;
mod selection_builder;
mod zip;

pub use choice_of::ChoiceOf;
pub use field::Field;
pub use field_builder::FieldBuilder;
pub use list_of::ListOf;
pub use mapping::Mapping;
pub use null_field::NullField;
pub use obj::Obj;
pub use option_of::OptionOf;
pub use pure::Pure;
pub use scalar::Scalar;
pub use selection_builder::SelectionBuilder;
pub use zip::Zip;
