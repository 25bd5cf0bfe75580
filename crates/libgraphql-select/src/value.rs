use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// A JSON-like value.
///
/// `Value` represents both the data decoded out of a GraphQL response and the
/// literal values passed as field/directive arguments (before they are either
/// inlined into the document or hoisted into variables).
///
/// Equality is structural. [`Value::Object`] preserves the order of its
/// entries, but lookups via [`Value::get`] are by name.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    /// An integer above `i64::MAX`. Smaller integers are always [`Value::Int`].
    UInt(u64),
    Float(f64),
    String(String),
    Enum(String),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Look up the first entry named `name` if this is an [`Value::Object`].
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Object(entries) =>
                entries.iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Render this value using GraphQL input-literal syntax.
    ///
    /// Strings are quoted and escaped, enum values are emitted bare, and
    /// object keys are emitted unquoted (e.g. `{name:"x",kind:ADMIN}`).
    pub fn to_graphql_literal(&self) -> String {
        let mut sink = String::new();
        self.append_graphql_literal(&mut sink);
        sink
    }

    pub(crate) fn append_graphql_literal(&self, sink: &mut String) {
        match self {
            Self::Null => sink.push_str("null"),
            Self::Bool(b) => sink.push_str(if *b { "true" } else { "false" }),
            Self::Int(i) => sink.push_str(&i.to_string()),
            Self::UInt(u) => sink.push_str(&u.to_string()),
            Self::Float(f) => sink.push_str(&format_float(*f)),
            Self::String(s) => sink.push_str(&quote_string(s)),
            Self::Enum(name) => sink.push_str(name),
            Self::List(items) => {
                sink.push('[');
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        sink.push(',');
                    }
                    item.append_graphql_literal(sink);
                }
                sink.push(']');
            },
            Self::Object(entries) => {
                sink.push('{');
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        sink.push(',');
                    }
                    sink.push_str(key);
                    sink.push(':');
                    value.append_graphql_literal(sink);
                }
                sink.push('}');
            },
        }
    }

    /// Produce a copy of this value with every `Null`-valued object entry
    /// removed, recursing through nested objects and lists.
    ///
    /// A top-level `Null` (or a `Null` list item) is left untouched: only
    /// object *fields* are dropped.
    pub fn without_null_fields(&self) -> Value {
        match self {
            Self::Object(entries) => Self::Object(
                entries.iter()
                    .filter(|(_, value)| !value.is_null())
                    .map(|(key, value)| (key.to_owned(), value.without_null_fields()))
                    .collect(),
            ),
            Self::List(items) => Self::List(
                items.iter()
                    .map(|item| item.without_null_fields())
                    .collect(),
            ),
            other => other.to_owned(),
        }
    }

    /// Short, human-readable rendering used in error messages.
    pub(crate) fn describe(&self) -> String {
        self.to_graphql_literal()
    }
}

impl std::convert::From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::UInt(value),
        }
    }
}

impl std::convert::From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(num) => {
                if let Some(i) = num.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = num.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(num.as_f64().unwrap_or(f64::NAN))
                }
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) =>
                Value::List(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(entries) =>
                Value::Object(
                    entries.into_iter()
                        .map(|(key, value)| (key, Value::from(value)))
                        .collect(),
                ),
        }
    }
}

impl std::convert::From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::Number(i.into()),
            Value::UInt(u) => serde_json::Value::Number(u.into()),
            Value::Float(f) =>
                serde_json::Number::from_f64(f)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            Value::String(s) | Value::Enum(s) => serde_json::Value::String(s),
            Value::List(items) =>
                serde_json::Value::Array(
                    items.into_iter().map(serde_json::Value::from).collect(),
                ),
            Value::Object(entries) =>
                serde_json::Value::Object(
                    entries.into_iter()
                        .map(|(key, value)| (key, serde_json::Value::from(value)))
                        .collect(),
                ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::Value::from(self.to_owned()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

fn format_float(f: f64) -> String {
    match serde_json::Number::from_f64(f) {
        Some(num) => num.to_string(),
        None => "null".to_string(),
    }
}

fn quote_string(s: &str) -> String {
    // JSON string escapes are a strict subset of GraphQL's.
    serde_json::Value::String(s.to_string()).to_string()
}
