//! Errors raised while loading a dialect definition.

use thiserror::Error;

/// A dialect document could not be turned into an `ArpDialect`.
#[derive(Debug, Error)]
pub enum DialectLoadError {
    #[error("unable to parse dialect definition: {0}")]
    ParseError(#[from] serde_yaml::Error),
    #[error("dialect definition is missing a metadata name")]
    EmptyName,
    #[error("dialect definition is missing a metadata apiname")]
    EmptyApiName,
    #[error("dialect definition is missing an identifier quote")]
    EmptyIdentifierQuote,
    #[error("data type mapping {index} has an empty {side} type name")]
    EmptyTypeName { index: usize, side: &'static str },
    #[error("source type '{name}' is mapped more than once")]
    DuplicateTypeMapping { name: String },
}
