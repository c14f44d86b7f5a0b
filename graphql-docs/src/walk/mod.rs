//! Recursive walkers over the type graph.
//!
//! All three walkers share the same cycle guard: a branch stops as soon as it
//! reaches a base type that is already on its [`VisitPath`]. What each walker
//! leaves behind for the truncated field differs and is documented on the
//! walker itself.

pub mod example_value;
pub mod field_table;
pub mod response_shape;

pub use example_value::ExampleValue;
pub use example_value::synthesize;
pub use field_table::FieldRow;
pub use field_table::render;
pub use response_shape::shape;

/// Base type names visited from the root down to the current field.
///
/// Descending never mutates a path: [`VisitPath::with`] hands out an extended
/// copy, so sibling branches never see each other's visits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitPath(Vec<String>);

impl VisitPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|visited| visited == name)
    }

    pub fn with(&self, name: &str) -> Self {
        let mut visited = self.0.clone();
        visited.push(name.to_owned());
        Self(visited)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the path holds only the type of the field being walked, i.e.
    /// the walk was started on this field.
    pub(crate) fn is_root(&self) -> bool {
        self.0.len() == 1
    }
}
