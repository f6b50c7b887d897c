use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How a parameter is matched with the enum schema it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterMatching {
    /// The parameter name equals a component schema name. The parameter's
    /// declared type is not checked, so a parameter named like an unrelated
    /// enum schema receives that schema's values.
    #[default]
    Name,
    /// The parameter schema references the component schema through `$ref`.
    Reference,
}

/// Knobs of the enum description pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumDescriptionOptions {
    /// Inserted between the existing description and each rendered value
    pub separator: String,
    /// Annotate enumerated component schemas
    pub schemas: bool,
    /// Annotate properties composed from an enumerated schema
    pub properties: bool,
    /// Annotate operation and path parameters
    pub parameters: bool,
    pub parameter_matching: ParameterMatching,
}

impl Default for EnumDescriptionOptions {
    fn default() -> Self {
        Self {
            separator: "<br />".to_owned(),
            schemas: true,
            properties: true,
            parameters: true,
            parameter_matching: ParameterMatching::default(),
        }
    }
}

impl EnumDescriptionOptions {
    /// Parse options from YAML or JSON; missing keys keep their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
