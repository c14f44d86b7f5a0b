//! Options for the generated document.

use std::str::FromStr;

use displaydoc::Display;
use schemars::JsonSchema;
use schemars::schema::RootSchema;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error, Display)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// {message}: {error}
    InvalidConfiguration {
        message: &'static str,
        error: String,
    },
}

/// The configuration for document generation.
///
/// Can be created through `serde::Deserialize` from various formats, or
/// parsed from YAML with [`str::parse`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields, default)]
pub struct Configuration {
    /// URL of the GraphQL endpoint shown to readers.
    pub endpoint: String,

    /// HTTP method used to call the endpoint.
    pub method: String,

    /// Name of the operation in example request bodies.
    pub operation_name: String,

    /// Character repeated once per nesting level in front of field names.
    pub depth_marker: char,

    /// Emit the calling convention section before the operations.
    pub preamble: bool,

    /// How callers authenticate. The section is left out when unset.
    pub authentication: Option<String>,

    /// Spaces per indentation level of the example JSON bodies.
    pub json_indent: usize,

    /// Fail instead of degrading when a type reference cannot be resolved.
    pub strict: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            endpoint: "http://host:port/graphql".to_owned(),
            method: "POST".to_owned(),
            operation_name: "search".to_owned(),
            depth_marker: '-',
            preamble: true,
            authentication: None,
            json_indent: 4,
            strict: false,
        }
    }
}

impl Configuration {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !is_graphql_name(&self.operation_name) {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "operation_name must be a GraphQL name",
                error: self.operation_name.clone(),
            });
        }
        if self.depth_marker.is_whitespace() || self.depth_marker == '|' {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "depth_marker must be visible and must not be a table separator",
                error: format!("{:?}", self.depth_marker),
            });
        }
        Ok(())
    }
}

impl FromStr for Configuration {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let configuration: Configuration =
            serde_yaml::from_str(s).map_err(|e| ConfigurationError::InvalidConfiguration {
                message: "failed to parse yaml",
                error: e.to_string(),
            })?;
        configuration.validate()?;
        Ok(configuration)
    }
}

/// JSON schema of [`Configuration`], for editor support.
pub fn generate_config_schema() -> RootSchema {
    schemars::schema_for!(Configuration)
}

fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
