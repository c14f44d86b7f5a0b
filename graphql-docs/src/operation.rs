//! Per-operation documentation blocks and the document that strings them
//! together.

use indexmap::IndexMap;
use serde::Serialize;

use crate::configuration::Configuration;
use crate::display_helpers::DisplaySeparated;
use crate::display_helpers::MarkdownCell;
use crate::error::DocsError;
use crate::schema::FieldDefinition;
use crate::schema::Queries;
use crate::schema::TypeGraph;
use crate::walk::ExampleValue;
use crate::walk::FieldRow;
use crate::walk::VisitPath;
use crate::walk::render;
use crate::walk::shape;
use crate::walk::synthesize;

const TABLE_RULE: &str = "|----|----|-----|-----|";

/// Body of an example request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleRequest {
    pub query: String,
    pub variables: ExampleValue,
}

/// Body of an example response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleResponse {
    pub data: ExampleValue,
}

/// Everything generated for one query operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDoc {
    pub name: String,
    pub title: String,
    /// Argument rows, starting at depth 1.
    pub arguments: Vec<FieldRow>,
    /// Rows of the operation itself, starting at depth 0.
    pub response: Vec<FieldRow>,
    pub request: ExampleRequest,
    pub example_response: ExampleResponse,
}

impl OperationDoc {
    pub fn build(graph: &TypeGraph, operation: &FieldDefinition, operation_name: &str) -> Self {
        let mut arguments = Vec::new();
        for argument in &operation.arguments {
            render(graph, 1, argument, &VisitPath::new(), &mut arguments);
        }
        let mut response = Vec::new();
        render(graph, 0, operation, &VisitPath::new(), &mut response);

        let variables = operation
            .arguments
            .iter()
            .map(|argument| {
                (
                    argument.name.clone(),
                    synthesize(graph, argument, &VisitPath::new()),
                )
            })
            .collect::<IndexMap<_, _>>();

        Self {
            name: operation.name.clone(),
            title: operation
                .description
                .as_deref()
                .filter(|description| !description.trim().is_empty())
                .unwrap_or(&operation.name)
                .to_owned(),
            arguments,
            response,
            request: ExampleRequest {
                query: query_text(graph, operation, operation_name),
                variables: ExampleValue::Object(variables),
            },
            example_response: ExampleResponse {
                data: synthesize(graph, operation, &VisitPath::new()),
            },
        }
    }

    /// Appends the Markdown block of this operation to `lines`.
    pub fn write_markdown(
        &self,
        configuration: &Configuration,
        lines: &mut Vec<String>,
    ) -> Result<(), DocsError> {
        let marker = configuration.depth_marker;
        lines.push(String::new());
        lines.push(format!("### {}", MarkdownCell(&self.title)));
        lines.push(format!("#### Endpoint {}", configuration.endpoint));
        lines.push(format!("#### Method {}", configuration.method));
        lines.push(format!("#### Operation \\<{}\\>", self.name));
        lines.push("|Parameter|Type|Required|Description|".to_owned());
        lines.push(TABLE_RULE.to_owned());
        lines.push("|query|String|Yes|GraphQL query document|".to_owned());
        lines.push("|variables|Object|Yes|Query variables|".to_owned());
        lines.extend(self.arguments.iter().map(|row| markdown_row(row, marker)));

        lines.push(String::new());
        lines.push("#### Response type".to_owned());
        lines.push("|Field|Type|Required|Description|".to_owned());
        lines.push(TABLE_RULE.to_owned());
        lines.extend(self.response.iter().map(|row| markdown_row(row, marker)));

        lines.push(String::new());
        lines.push("#### Example request".to_owned());
        lines.push("```json".to_owned());
        lines.push(to_pretty_json(&self.request, configuration.json_indent)?);
        lines.push("```".to_owned());
        lines.push("#### Example response".to_owned());
        lines.push("```json".to_owned());
        lines.push(to_pretty_json(
            &self.example_response,
            configuration.json_indent,
        )?);
        lines.push("```".to_owned());
        Ok(())
    }
}

/// The example query document for `operation`.
///
/// ```text
/// query search($id: Int!) {
///   data: getUser(id: $id) { id name }
/// }
/// ```
pub fn query_text(graph: &TypeGraph, operation: &FieldDefinition, operation_name: &str) -> String {
    let selection = shape(graph, operation, &VisitPath::new());
    let declarations = operation
        .arguments
        .iter()
        .map(|argument| format!("${}: {}", argument.name, argument.ty))
        .collect::<Vec<_>>();
    let bindings = operation
        .arguments
        .iter()
        .map(|argument| format!("{0}: ${0}", argument.name))
        .collect::<Vec<_>>();

    let mut header = format!("query {operation_name}");
    let mut call = format!("data: {}", operation.name);
    if !declarations.is_empty() {
        header = format!("{header}({})", DisplaySeparated(&declarations, ", "));
        call = format!("{call}({})", DisplaySeparated(&bindings, ", "));
    }
    if !selection.is_empty() {
        call = format!("{call} {selection}");
    }
    format!("{header} {{\n  {call}\n}}")
}

fn markdown_row(row: &FieldRow, marker: char) -> String {
    let indent = marker.to_string().repeat(row.depth);
    format!(
        "|{indent}{}|{}|{}|{}|",
        row.name,
        MarkdownCell(&row.type_label),
        if row.required { "Yes" } else { "No" },
        MarkdownCell(&row.description)
    )
}

fn to_pretty_json<T: Serialize>(value: &T, indent: usize) -> Result<String, DocsError> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Generates the reference document for every query operation.
pub struct DocGenerator<'a> {
    graph: &'a TypeGraph,
    queries: &'a Queries,
    configuration: &'a Configuration,
}

impl<'a> DocGenerator<'a> {
    pub fn new(
        graph: &'a TypeGraph,
        queries: &'a Queries,
        configuration: &'a Configuration,
    ) -> Self {
        Self {
            graph,
            queries,
            configuration,
        }
    }

    /// One [`OperationDoc`] per query operation, in declaration order.
    pub fn operations(&self) -> Vec<OperationDoc> {
        self.queries
            .operations
            .values()
            .map(|operation| {
                tracing::debug!(operation = %operation.name, "documenting operation");
                OperationDoc::build(self.graph, operation, &self.configuration.operation_name)
            })
            .collect()
    }

    pub fn generate(&self) -> Result<String, DocsError> {
        self.configuration.validate()?;
        if self.configuration.strict {
            let unresolved = self.graph.unresolved_references(self.queries);
            if !unresolved.is_empty() {
                tracing::warn!(?unresolved, "schema references undefined types");
                return Err(DocsError::UnresolvedTypes(unresolved.into_iter().collect()));
            }
        }

        let mut lines = Vec::new();
        if self.configuration.preamble {
            self.write_preamble(&mut lines);
        }
        for operation in self.operations() {
            operation.write_markdown(self.configuration, &mut lines)?;
        }
        tracing::info!(
            operations = self.queries.operations.len(),
            "generated reference documentation"
        );

        let mut document = lines.join("\n");
        document.push('\n');
        Ok(document)
    }

    fn write_preamble(&self, lines: &mut Vec<String>) {
        let configuration = self.configuration;
        lines.push("## Calling convention".to_owned());
        lines.push("### Endpoint".to_owned());
        lines.push(format!(
            "<code>{} {}</code>",
            configuration.method, configuration.endpoint
        ));
        if let Some(authentication) = &configuration.authentication {
            lines.push("### Authentication".to_owned());
            lines.push(authentication.trim().to_owned());
        }
        lines.push("### Parameters".to_owned());
        lines.push("Build the request body following the GraphQL query syntax.".to_owned());
    }
}
