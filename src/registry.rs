use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// One variant of a described enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Name as it appears in the serialized document
    pub name: String,
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, code: i64) -> Self {
        Self {
            name: name.into(),
            code,
            description: None,
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Member table of one enum type, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumTypeMetadata {
    /// Simple type name, matched against schema names
    pub name: String,
    /// Module path of the declaration, e.g. `basket_api::model`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

impl EnumTypeMetadata {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    /// First member declared with `code`
    pub fn by_code(&self, code: i64) -> Option<&EnumMember> {
        self.members.iter().find(|member| member.code == code)
    }

    pub fn by_name(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|member| member.name == name)
    }

    pub fn description_of(&self, name: &str) -> Option<&str> {
        self.by_name(name)?.description.as_deref()
    }
}

/// Enums that carry their own member table.
///
/// Usually implemented with `#[derive(DescribedEnum)]`.
pub trait DescribedEnum {
    fn enum_metadata() -> EnumTypeMetadata;
}

/// Explicit catalog of the application's described enums, built once at
/// startup and queried by type name.
///
/// Only types declared inside the registry's namespace are visible to
/// [`EnumRegistry::lookup`], so an application enum never collides with a
/// same-named type of another crate.
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    namespace: String,
    types: Vec<EnumTypeMetadata>,
}

impl EnumRegistry {
    /// Create a registry for the application rooted at `namespace`,
    /// typically `env!("CARGO_CRATE_NAME")`. An empty namespace admits every type.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            types: Vec::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn register<T: DescribedEnum>(&mut self) -> &mut Self {
        self.insert(T::enum_metadata())
    }

    pub fn with<T: DescribedEnum>(mut self) -> Self {
        self.register::<T>();
        self
    }

    pub fn insert(&mut self, metadata: EnumTypeMetadata) -> &mut Self {
        self.types.push(metadata);
        self
    }

    /// Load a YAML (or JSON) list of enum tables.
    ///
    /// Entries without a namespace belong to the registry's own namespace.
    ///
    /// ```yaml
    /// - name: BasketStatus
    ///   members:
    ///     - { name: Basket, code: 0, description: Still a basket }
    /// ```
    pub fn extend_from_yaml_str(&mut self, text: &str) -> Result<&mut Self> {
        let tables: Vec<EnumTypeMetadata> = serde_yaml::from_str(text)?;
        for mut table in tables {
            if table.namespace.is_empty() {
                table.namespace.clone_from(&self.namespace);
            }
            self.insert(table);
        }
        Ok(self)
    }

    /// Resolve an enum by simple name among the application's types.
    ///
    /// When several types share the name the first registered wins.
    pub fn lookup(&self, name: &str) -> Option<&EnumTypeMetadata> {
        let mut matches = self
            .types
            .iter()
            .filter(|metadata| metadata.name == name && self.owns(&metadata.namespace));

        let first = matches.next()?;
        if matches.next().is_some() {
            warn!(
                type_name = name,
                namespace = %first.namespace,
                "several enum types share this name, using the first registered"
            );
        }
        Some(first)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnumTypeMetadata> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn owns(&self, namespace: &str) -> bool {
        if self.namespace.is_empty() || namespace == self.namespace {
            return true;
        }
        namespace
            .strip_prefix(self.namespace.as_str())
            .is_some_and(|rest| rest.starts_with("::"))
    }
}
