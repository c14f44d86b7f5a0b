use indexmap::IndexMap;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;
use serde_json::Value;

use super::VisitPath;
use crate::schema::BuiltinScalar;
use crate::schema::Field;
use crate::schema::TypeGraph;
use crate::schema::TypeKind;

/// A synthesized example of a field's value.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleValue {
    String(String),
    Boolean(bool),
    Int(i64),
    Float(f64),
    /// An enum value's literal, as declared.
    Literal(Value),
    Object(IndexMap<String, ExampleValue>),
    /// Lists are always shown with exactly one element.
    List(Box<ExampleValue>),
    /// Nothing to show: the field closes a cycle. Dropped from objects when
    /// serialized.
    Empty,
}

impl ExampleValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, ExampleValue::Empty)
    }

    fn wrap_if(self, list: bool) -> Self {
        if list && !self.is_empty() {
            ExampleValue::List(Box::new(self))
        } else {
            self
        }
    }
}

impl Serialize for ExampleValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ExampleValue::String(value) => serializer.serialize_str(value),
            ExampleValue::Boolean(value) => serializer.serialize_bool(*value),
            ExampleValue::Int(value) => serializer.serialize_i64(*value),
            ExampleValue::Float(value) => serializer.serialize_f64(*value),
            ExampleValue::Literal(value) => value.serialize(serializer),
            ExampleValue::Object(fields) => {
                let present = fields.values().filter(|value| !value.is_empty()).count();
                let mut map = serializer.serialize_map(Some(present))?;
                for (name, value) in fields {
                    if !value.is_empty() {
                        map.serialize_entry(name, value)?;
                    }
                }
                map.end()
            }
            ExampleValue::List(item) => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(item)?;
                seq.end()
            }
            ExampleValue::Empty => serializer.serialize_unit(),
        }
    }
}

/// Builds an example value for `field`.
///
/// The cycle guard runs before anything else, so a field whose type is
/// already on `path` yields [`ExampleValue::Empty`] even when it is a list.
/// Custom scalars and unresolved types become empty objects.
pub fn synthesize<F: Field + ?Sized>(graph: &TypeGraph, field: &F, path: &VisitPath) -> ExampleValue {
    let resolved = field.resolved_type();
    if path.contains(&resolved.name) {
        tracing::trace!(field = field.name(), ty = %resolved.name, "type already visited, no example");
        return ExampleValue::Empty;
    }
    let path = path.with(&resolved.name);

    let value = match graph.classify(&resolved.name) {
        TypeKind::Builtin(BuiltinScalar::String) => ExampleValue::String(
            field
                .description()
                .filter(|description| !description.is_empty())
                .unwrap_or("String")
                .to_owned(),
        ),
        TypeKind::Builtin(BuiltinScalar::Boolean) => ExampleValue::Boolean(false),
        TypeKind::Builtin(BuiltinScalar::Int) => ExampleValue::Int(1),
        TypeKind::Builtin(BuiltinScalar::Float) => ExampleValue::Float(1.1),
        TypeKind::Enum(enum_type) => match enum_type.values.first() {
            Some(first) => ExampleValue::Literal(first.value.clone()),
            None => ExampleValue::Empty,
        },
        TypeKind::Object(object) => ExampleValue::Object(
            object
                .fields
                .values()
                .map(|child| (child.name.clone(), synthesize(graph, child, &path)))
                .collect(),
        ),
        TypeKind::CustomScalar => ExampleValue::Object(IndexMap::new()),
        TypeKind::Unresolved => {
            tracing::debug!(ty = %resolved.name, "unresolved type, using an empty object");
            ExampleValue::Object(IndexMap::new())
        }
    };
    value.wrap_if(resolved.list)
}
