use super::VisitPath;
use crate::display_helpers::DisplayLiteral;
use crate::schema::EnumType;
use crate::schema::Field;
use crate::schema::TypeGraph;
use crate::schema::TypeKind;

/// One line of a field table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub depth: usize,
    pub name: String,
    /// `Array<T>` for list fields, the bare base type otherwise.
    pub type_label: String,
    /// Always false for list fields, whatever their nullability.
    pub required: bool,
    pub description: String,
}

/// Appends the row for `field` and, unless the field closes a cycle, the rows
/// of everything nested below it.
///
/// Enum values are folded into the description of the field's own row. A
/// field whose type is already on `path` still gets its row but nothing
/// below it.
pub fn render<F: Field + ?Sized>(
    graph: &TypeGraph,
    depth: usize,
    field: &F,
    path: &VisitPath,
    rows: &mut Vec<FieldRow>,
) {
    let resolved = field.resolved_type();
    rows.push(FieldRow {
        depth,
        name: field.name().to_owned(),
        type_label: if resolved.list {
            format!("Array<{}>", resolved.name)
        } else {
            resolved.name.clone()
        },
        required: resolved.required && !resolved.list,
        description: field.description().unwrap_or_default().to_owned(),
    });

    if path.contains(&resolved.name) {
        tracing::trace!(field = field.name(), ty = %resolved.name, "type already visited, not expanding");
        return;
    }
    let path = path.with(&resolved.name);

    match graph.classify(&resolved.name) {
        TypeKind::Enum(enum_type) => {
            let summary = enum_summary(enum_type);
            if let Some(row) = rows.last_mut() {
                row.description = if row.description.is_empty() {
                    summary
                } else {
                    format!("{} {summary}", row.description)
                };
            }
        }
        TypeKind::Object(object) => {
            for child in object.fields.values() {
                render(graph, depth + 1, child, &path, rows);
            }
        }
        TypeKind::Unresolved => {
            tracing::debug!(ty = %resolved.name, "unresolved type, rendering as a leaf");
        }
        TypeKind::Builtin(_) | TypeKind::CustomScalar => {}
    }
}

/// `value: name description` for every value, joined with `;`.
fn enum_summary(enum_type: &EnumType) -> String {
    enum_type
        .values
        .iter()
        .map(|value| {
            let literal = DisplayLiteral(&value.value);
            match value.description.as_deref() {
                Some(description) if !description.is_empty() => {
                    format!("{literal}: {} {description}", value.name)
                }
                _ => format!("{literal}: {}", value.name),
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}
