use super::VisitPath;
use crate::schema::Field;
use crate::schema::TypeGraph;
use crate::schema::TypeKind;

/// Builds the selection needed to fetch every leaf below `field`.
///
/// An empty string means the field contributes nothing: it closes a cycle,
/// it is an enum, or its type is unknown. When `field` is the root of the
/// walk its own name is left out and a selection, if any, is only wrapped in
/// braces.
pub fn shape<F: Field + ?Sized>(graph: &TypeGraph, field: &F, path: &VisitPath) -> String {
    let name = field.resolved_type().name;
    if path.contains(&name) {
        tracing::trace!(field = field.name(), ty = %name, "type already visited, dropping selection");
        return String::new();
    }
    let path = path.with(&name);
    let is_root = path.is_root();

    match graph.classify(&name) {
        TypeKind::Builtin(_) | TypeKind::CustomScalar => {
            if is_root {
                String::new()
            } else {
                field.name().to_owned()
            }
        }
        TypeKind::Enum(_) | TypeKind::Unresolved => String::new(),
        TypeKind::Object(object) => {
            let selections = object
                .fields
                .values()
                .map(|child| shape(graph, child, &path))
                .filter(|selection| !selection.is_empty())
                .collect::<Vec<_>>();
            match (is_root, selections.is_empty()) {
                (true, true) => String::new(),
                (true, false) => format!("{{ {} }}", selections.join(" ")),
                (false, true) => field.name().to_owned(),
                (false, false) => format!("{} {{ {} }}", field.name(), selections.join(" ")),
            }
        }
    }
}
