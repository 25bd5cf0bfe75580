use crate::builder::FieldBuilder;
use crate::decoding::DecodingError;
use crate::selection::Argument;
use crate::selection::Directive;
use crate::selection::FieldSelection;
use crate::selection::Selection;
use crate::Value;
use std::marker::PhantomData;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Every constructed [`Field`] (including those derived via `with_alias` /
/// `with_directive`) gets a new identity. Identities only need to differ
/// between sibling selections of one operation, so a process-wide counter is
/// sufficient.
fn next_identity() -> u64 {
    NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed)
}

/// A single selected field on `Origin`, plus the [`FieldBuilder`] that decodes
/// the value found at that field.
pub struct Field<Origin, A> {
    pub(super) alias: Option<String>,
    pub(super) arguments: Vec<Argument>,
    pub(super) builder: Arc<dyn FieldBuilder<A>>,
    pub(super) directives: Vec<Directive>,
    pub(super) identity: u64,
    pub(super) name: String,
    _origin: PhantomData<fn() -> Origin>,
}
impl<Origin, A> Field<Origin, A> {
    pub(super) fn new(
        name: String,
        builder: Arc<dyn FieldBuilder<A>>,
        arguments: Vec<Argument>,
    ) -> Self {
        Self {
            alias: None,
            arguments,
            builder,
            directives: vec![],
            identity: next_identity(),
            name,
            _origin: PhantomData,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    pub fn directives(&self) -> &[Directive] {
        self.directives.as_slice()
    }

    pub fn identity(&self) -> u64 {
        self.identity
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The alias if one is set, otherwise the field name.
    pub fn effective_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    /// The alias this field is emitted under when a sibling selection shares
    /// its effective name.
    pub fn disambiguated_alias(&self) -> String {
        format!("{}{}", self.effective_name(), self.identity)
    }

    pub(super) fn with_alias(&self, alias: &str) -> Self {
        Self {
            alias: Some(alias.to_string()),
            identity: next_identity(),
            ..self.to_owned()
        }
    }

    pub(super) fn with_directive(&self, directive: &Directive) -> Self {
        let mut directives = Vec::with_capacity(self.directives.len() + 1);
        directives.push(directive.to_owned());
        directives.extend(self.directives.iter().cloned());
        Self {
            directives,
            identity: next_identity(),
            ..self.to_owned()
        }
    }

    pub(super) fn from_graphql(&self, value: &Value) -> Result<A, DecodingError> {
        let Value::Object(entries) = value else {
            return Err(DecodingError::new(format!(
                "Invalid field type {}",
                self.name,
            )));
        };

        let disambiguated_alias = self.disambiguated_alias();
        let found = entries.iter().find(|(key, _)| {
            *key == disambiguated_alias
                || self.alias.as_deref() == Some(key.as_str())
                || *key == self.name
        });

        match found {
            Some((_, field_value)) => self.builder.from_graphql(field_value),
            None => Err(DecodingError::new(format!(
                "Missing field {}",
                self.name,
            ))),
        }
    }

    pub(super) fn to_selection(&self) -> Selection {
        Selection::Field(FieldSelection {
            alias: self.alias.to_owned(),
            arguments: self.arguments.to_owned(),
            directives: self.directives.to_owned(),
            identity: self.identity,
            name: self.name.to_owned(),
            selection_set: self.builder.to_selection_set(),
        })
    }
}
impl<Origin, A> std::clone::Clone for Field<Origin, A> {
    fn clone(&self) -> Self {
        Self {
            alias: self.alias.to_owned(),
            arguments: self.arguments.to_owned(),
            builder: Arc::clone(&self.builder),
            directives: self.directives.to_owned(),
            identity: self.identity,
            name: self.name.to_owned(),
            _origin: PhantomData,
        }
    }
}
impl<Origin, A> std::fmt::Debug for Field<Origin, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("alias", &self.alias)
            .field("arguments", &self.arguments)
            .field("directives", &self.directives)
            .field("identity", &self.identity)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
