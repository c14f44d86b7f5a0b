use std::fmt;

/// Built-in scalars that get fixed example values and never need a sub-selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinScalar {
    String,
    /// `Int` and `Long` share a representation
    Int,
    Boolean,
    Float,
}

impl BuiltinScalar {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(Self::String),
            "Int" | "Long" => Some(Self::Int),
            "Boolean" => Some(Self::Boolean),
            "Float" => Some(Self::Float),
            _ => None,
        }
    }
}

/// A declared type expression such as `[User!]!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Named(String),
    List(Box<FieldType>),
    NonNull(Box<FieldType>),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Named(ty) => write!(f, "{ty}"),
            FieldType::List(ty) => write!(f, "[{ty}]"),
            FieldType::NonNull(ty) => write!(f, "{ty}!"),
        }
    }
}

impl FieldType {
    /// Parses a type expression. Never fails: unbalanced brackets or stray
    /// markers are dropped from the named type.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(inner) = raw.strip_suffix('!') {
            Self::NonNull(Box::new(Self::parse(inner)))
        } else if let Some(inner) = raw.strip_prefix('[') {
            let inner = inner.strip_suffix(']').unwrap_or(inner);
            Self::List(Box::new(Self::parse(inner)))
        } else {
            Self::Named(
                raw.trim_matches(|c| matches!(c, '[' | ']' | '!'))
                    .trim()
                    .to_owned(),
            )
        }
    }

    /// return the name of the type on which selections happen
    ///
    /// Example if we get the field `list: [User!]!`, it will return "User"
    pub fn inner_type_name(&self) -> &str {
        match self {
            FieldType::Named(name) => name.as_str(),
            FieldType::List(inner) | FieldType::NonNull(inner) => inner.inner_type_name(),
        }
    }

    /// Whether the outermost wrapper, ignoring non-null, is a list.
    pub fn is_list(&self) -> bool {
        match self {
            FieldType::List(_) => true,
            FieldType::NonNull(inner) => inner.is_list(),
            FieldType::Named(_) => false,
        }
    }

    /// Whether a non-null marker appears anywhere in the expression.
    pub fn has_non_null(&self) -> bool {
        match self {
            FieldType::NonNull(_) => true,
            FieldType::List(inner) => inner.has_non_null(),
            FieldType::Named(_) => false,
        }
    }

    pub fn resolve(&self) -> ResolvedType {
        ResolvedType {
            name: self.inner_type_name().to_owned(),
            required: self.has_non_null(),
            list: self.is_list(),
        }
    }
}

/// The flattened view of a type expression every walker works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Base type name with every wrapper stripped.
    pub name: String,
    pub required: bool,
    pub list: bool,
}

impl ResolvedType {
    pub fn resolve(raw: &str) -> Self {
        FieldType::parse(raw).resolve()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Int", "Int", false, false)]
    #[case("Int!", "Int", true, false)]
    #[case("[String]", "String", false, true)]
    #[case("[String!]!", "String", true, true)]
    #[case("[User]!", "User", true, true)]
    #[case("[[Float!]]", "Float", true, true)]
    #[case(" Long ", "Long", false, false)]
    fn resolves_wrappers(
        #[case] raw: &str,
        #[case] name: &str,
        #[case] required: bool,
        #[case] list: bool,
    ) {
        assert_eq!(
            ResolvedType::resolve(raw),
            ResolvedType {
                name: name.to_owned(),
                required,
                list,
            }
        );
    }

    #[test]
    fn malformed_expressions_degrade() {
        assert_eq!(ResolvedType::resolve("[User").name, "User");
        assert_eq!(ResolvedType::resolve("User]").name, "User");
        assert!(ResolvedType::resolve("[User").list);
        assert_eq!(ResolvedType::resolve("").name, "");
    }

    #[test]
    fn display_round_trips_well_formed_expressions() {
        for raw in ["Int", "[Int]", "[Int!]!", "[[User]!]"] {
            assert_eq!(FieldType::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn long_is_an_int() {
        assert_eq!(BuiltinScalar::from_name("Long"), Some(BuiltinScalar::Int));
        assert_eq!(BuiltinScalar::from_name("ID"), None);
    }
}
