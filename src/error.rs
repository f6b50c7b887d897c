use serde_json::Value;
use thiserror::Error;

/// Errors that abort an enum description pass.
///
/// A type name missing from the registry is not an error: the affected
/// description is left as it was.
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric enum value has no member with that code in the resolved type.
    #[error("enum `{type_name}` has no member with code {code}")]
    NumericValueUnmapped { type_name: String, code: i64 },

    /// An enum value list holds something other than an integer or a string.
    #[error("schema `{schema}` lists enum value {value}, expected an integer or a string")]
    UnsupportedEnumValue { schema: String, value: Value },

    #[error("invalid enum description configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
