//! The type graph the walkers read from.
//!
//! Everything here is an owned, read-only view. It is usually built from an
//! apollo-compiler [`Schema`] but can be assembled by hand as well.

use std::collections::BTreeSet;
use std::collections::HashSet;

use apollo_compiler::Schema;
use apollo_compiler::ast::OperationType;
use apollo_compiler::schema::Component;
use apollo_compiler::schema::ExtendedType;
use indexmap::IndexMap;
use serde_json::Value;

mod field_type;

pub use field_type::BuiltinScalar;
pub use field_type::FieldType;
pub use field_type::ResolvedType;

/// Anything that can be walked like a field: object fields, input fields and
/// operation arguments.
pub trait Field {
    fn name(&self) -> &str;
    fn type_expression(&self) -> &str;
    fn description(&self) -> Option<&str>;

    fn resolved_type(&self) -> ResolvedType {
        ResolvedType::resolve(self.type_expression())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: String,
    pub description: Option<String>,
    pub arguments: Vec<Argument>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: None,
            arguments: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }
}

impl Field for FieldDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_expression(&self) -> &str {
        &self.ty
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub ty: String,
    pub description: Option<String>,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: None,
        }
    }
}

impl Field for Argument {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_expression(&self) -> &str {
        &self.ty
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    /// The literal that goes on the wire. For SDL enums this is the name itself.
    pub value: Value,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumType {
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectType {
    pub fields: IndexMap<String, FieldDefinition>,
}

impl ObjectType {
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefinition {
    /// A scalar declared by the schema that is not one of the built-ins.
    Scalar,
    Enum(EnumType),
    Object(ObjectType),
}

/// How a base type name resolves against the graph.
#[derive(Debug, Clone, Copy)]
pub(crate) enum TypeKind<'a> {
    Builtin(BuiltinScalar),
    Enum(&'a EnumType),
    Object(&'a ObjectType),
    CustomScalar,
    Unresolved,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeGraph {
    pub types: IndexMap<String, TypeDefinition>,
}

impl TypeGraph {
    pub fn with_type(mut self, name: impl Into<String>, definition: TypeDefinition) -> Self {
        self.types.insert(name.into(), definition);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub(crate) fn classify(&self, name: &str) -> TypeKind<'_> {
        if let Some(builtin) = BuiltinScalar::from_name(name) {
            return TypeKind::Builtin(builtin);
        }
        match self.types.get(name) {
            Some(TypeDefinition::Enum(enum_type)) => TypeKind::Enum(enum_type),
            Some(TypeDefinition::Object(object)) => TypeKind::Object(object),
            Some(TypeDefinition::Scalar) => TypeKind::CustomScalar,
            None => TypeKind::Unresolved,
        }
    }

    /// Lowers an apollo-compiler schema.
    ///
    /// Interfaces and input objects become objects, unions become objects
    /// without fields.
    pub fn from_schema(schema: &Schema) -> Self {
        let types = schema
            .types
            .iter()
            .map(|(name, ty)| {
                let definition = match ty {
                    ExtendedType::Scalar(_) => TypeDefinition::Scalar,
                    ExtendedType::Enum(enum_type) => TypeDefinition::Enum(EnumType {
                        values: enum_type
                            .values
                            .values()
                            .map(|value| EnumValue {
                                value: Value::String(value.value.to_string()),
                                name: value.value.to_string(),
                                description: value.description.as_deref().map(str::to_owned),
                            })
                            .collect(),
                    }),
                    ExtendedType::Object(object) => TypeDefinition::Object(ObjectType {
                        fields: lower_fields(object.fields.values()),
                    }),
                    ExtendedType::Interface(interface) => TypeDefinition::Object(ObjectType {
                        fields: lower_fields(interface.fields.values()),
                    }),
                    ExtendedType::InputObject(input) => TypeDefinition::Object(ObjectType {
                        fields: input
                            .fields
                            .values()
                            .map(|field| {
                                let field = FieldDefinition {
                                    name: field.name.to_string(),
                                    ty: (*field.ty).to_string(),
                                    description: field.description.as_deref().map(str::to_owned),
                                    arguments: Vec::new(),
                                };
                                (field.name.clone(), field)
                            })
                            .collect(),
                    }),
                    ExtendedType::Union(_) => TypeDefinition::Object(ObjectType::default()),
                };
                (name.to_string(), definition)
            })
            .collect();
        Self { types }
    }

    /// Base type names reachable from `queries` that are neither built-in
    /// scalars nor defined in the graph.
    ///
    /// Reachability starts at each operation's type and argument types and
    /// follows object fields. Types no operation reaches are never checked.
    pub fn unresolved_references(&self, queries: &Queries) -> BTreeSet<String> {
        let mut unresolved = BTreeSet::new();
        let mut visited = HashSet::new();
        let mut pending = queries
            .operations
            .values()
            .flat_map(|operation| {
                std::iter::once(operation.ty.as_str())
                    .chain(operation.arguments.iter().map(|argument| argument.ty.as_str()))
            })
            .map(|raw| ResolvedType::resolve(raw).name)
            .collect::<Vec<_>>();
        while let Some(name) = pending.pop() {
            if !visited.insert(name.clone()) {
                continue;
            }
            match self.classify(&name) {
                TypeKind::Unresolved => {
                    unresolved.insert(name);
                }
                TypeKind::Object(object) => pending.extend(
                    object
                        .fields
                        .values()
                        .map(|field| ResolvedType::resolve(&field.ty).name),
                ),
                TypeKind::Builtin(_) | TypeKind::Enum(_) | TypeKind::CustomScalar => {}
            }
        }
        unresolved
    }
}

fn lower_fields<'a>(
    fields: impl Iterator<Item = &'a Component<apollo_compiler::schema::FieldDefinition>>,
) -> IndexMap<String, FieldDefinition> {
    fields
        .map(|field| {
            let lowered = FieldDefinition {
                name: field.name.to_string(),
                ty: field.ty.to_string(),
                description: field.description.as_deref().map(str::to_owned),
                arguments: field
                    .arguments
                    .iter()
                    .map(|argument| Argument {
                        name: argument.name.to_string(),
                        ty: (*argument.ty).to_string(),
                        description: argument.description.as_deref().map(str::to_owned),
                    })
                    .collect(),
            };
            (lowered.name.clone(), lowered)
        })
        .collect()
}

/// The fields of the query root, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Queries {
    pub operations: IndexMap<String, FieldDefinition>,
}

impl Queries {
    pub fn with_operation(mut self, operation: FieldDefinition) -> Self {
        self.operations.insert(operation.name.clone(), operation);
        self
    }

    /// Returns `None` when the schema has no query root.
    pub fn from_schema(schema: &Schema) -> Option<Self> {
        let query_type = schema.root_operation(OperationType::Query)?;
        let object = schema.get_object(query_type)?;
        Some(Self {
            operations: lower_fields(object.fields.values()),
        })
    }
}

const _: () = {
    const fn assert_thread_safe<T: Sync + Send>() {}

    assert_thread_safe::<TypeGraph>();
    assert_thread_safe::<Queries>();
};
