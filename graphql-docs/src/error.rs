//! Errors raised around the walkers.
//!
//! The walkers themselves never fail; these cover schema intake, configuration
//! and output.

use displaydoc::Display;
use thiserror::Error;

pub use crate::configuration::ConfigurationError;

#[derive(Debug, Error, Display)]
#[non_exhaustive]
pub enum DocsError {
    /// invalid schema: {0}
    InvalidSchema(String),
    /// the schema does not define a query root type
    MissingQueryType,
    /// schema references undefined types: {0:?}
    UnresolvedTypes(Vec<String>),
    /// {0}
    Configuration(#[from] ConfigurationError),
    /// could not serialize example: {0}
    Serialization(#[from] serde_json::Error),
}
