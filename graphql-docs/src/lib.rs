//! ## Usage
//!
//! Generates Markdown reference documentation for the query operations of a
//! GraphQL schema: a field table for the arguments and for the response, an
//! example request with a query selecting every leaf of the response, and an
//! example response.
//!
//! ```no_run
//! let sdl = std::fs::read_to_string("schema.graphql").unwrap();
//! let markdown = graphql_docs::generate_docs(&sdl, &Default::default()).unwrap();
//! println!("{markdown}");
//! ```
//!
//! The walkers in [`walk`] can also be driven directly over a hand-built
//! [`TypeGraph`].

#![warn(
    rustdoc::broken_intra_doc_links,
    unreachable_pub,
    unreachable_patterns,
    unused,
    unused_qualifications,
    dead_code,
    while_true,
    unconditional_panic,
    clippy::all
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

pub mod configuration;
mod display_helpers;
pub mod error;
pub mod operation;
pub mod schema;
pub mod walk;

use apollo_compiler::Schema;

pub use crate::configuration::Configuration;
pub use crate::error::DocsError;
pub use crate::operation::DocGenerator;
pub use crate::operation::OperationDoc;
pub use crate::schema::Queries;
pub use crate::schema::TypeGraph;

/// Parses and validates `sdl`, then documents every field of its query root.
pub fn generate_docs(sdl: &str, configuration: &Configuration) -> Result<String, DocsError> {
    let schema = Schema::parse_and_validate(sdl, "schema.graphql")
        .map_err(|invalid| DocsError::InvalidSchema(invalid.errors.to_string()))?;
    let graph = TypeGraph::from_schema(&schema);
    let queries = Queries::from_schema(&schema).ok_or(DocsError::MissingQueryType)?;
    DocGenerator::new(&graph, &queries, configuration).generate()
}
