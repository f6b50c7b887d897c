//! Reading enum lists, composition references and descriptions out of
//! JSON schema objects.

use std::collections::HashMap;

use aide::openapi::SchemaObject;
use serde_json::{Map, Value};

use crate::describe::EnumValue;
use crate::error::{Error, Result};

const COMPONENT_SCHEMA_PREFIX: &str = "#/components/schemas/";

/// Raw enum values of a schema, in declaration order.
///
/// Read from `enum`, or from a `oneOf` made only of `const` entries (the
/// shape schemars emits for enums with documented variants). `null` entries
/// are skipped. Empty when the schema is not enumerated.
pub fn enum_values(schema_name: &str, schema: &Map<String, Value>) -> Result<Vec<EnumValue>> {
    if let Some(Value::Array(items)) = schema.get("enum") {
        return parse_values(schema_name, items.iter());
    }

    if let Some(Value::Array(variants)) = schema.get("oneOf") {
        let consts: Option<Vec<&Value>> = variants.iter().map(|v| v.get("const")).collect();
        if let Some(consts) = consts.filter(|consts| !consts.is_empty()) {
            return parse_values(schema_name, consts.into_iter());
        }
    }

    Ok(Vec::new())
}

fn parse_values<'a>(
    schema_name: &str,
    items: impl Iterator<Item = &'a Value>,
) -> Result<Vec<EnumValue>> {
    items
        .filter(|item| !item.is_null())
        .map(|item| {
            EnumValue::from_json(item).ok_or_else(|| Error::UnsupportedEnumValue {
                schema: schema_name.to_owned(),
                value: item.clone(),
            })
        })
        .collect()
}

/// Name of the single component schema this schema is composed from.
///
/// Accepts a direct `$ref`, an `allOf` holding exactly one `$ref`, and an
/// `anyOf`/`oneOf` whose only non-null entry is a `$ref`.
pub fn referenced_schema(schema: &Map<String, Value>) -> Option<&str> {
    if let Some(reference) = schema.get("$ref") {
        return component_name(reference);
    }

    if let Some(Value::Array(parts)) = schema.get("allOf") {
        return match parts.as_slice() {
            [single] => single.get("$ref").and_then(component_name),
            _ => None,
        };
    }

    ["anyOf", "oneOf"].into_iter().find_map(|keyword| {
        let Some(Value::Array(parts)) = schema.get(keyword) else {
            return None;
        };
        let mut non_null = parts.iter().filter(|part| !is_null_schema(part));
        match (non_null.next(), non_null.next()) {
            (Some(single), None) => single.get("$ref").and_then(component_name),
            _ => None,
        }
    })
}

fn component_name(reference: &Value) -> Option<&str> {
    reference
        .as_str()?
        .strip_prefix(COMPONENT_SCHEMA_PREFIX)
        .filter(|name| !name.is_empty())
}

fn is_null_schema(schema: &Value) -> bool {
    schema.get("type").and_then(Value::as_str) == Some("null")
}

/// Compute the description that results from appending `text`.
///
/// Returns `None` when nothing changes: `text` is empty or the existing
/// description already ends with it. The separator is only inserted after
/// non-empty existing text.
pub fn appended_description(existing: Option<&str>, text: &str, separator: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    match existing {
        None | Some("") => Some(text.to_owned()),
        Some(existing) if existing.ends_with(text) => None,
        Some(existing) => Some(format!("{existing}{separator}{text}")),
    }
}

/// Append `text` to the `description` of a schema object, returning whether it changed.
pub fn append_schema_description(
    schema: &mut Map<String, Value>,
    text: &str,
    separator: &str,
) -> bool {
    let existing = schema.get("description").and_then(Value::as_str);
    match appended_description(existing, text, separator) {
        Some(updated) => {
            schema.insert("description".to_owned(), Value::String(updated));
            true
        }
        None => false,
    }
}

/// Enum value lists of every enumerated component schema, captured before
/// the document is mutated.
#[derive(Debug, Clone, Default)]
pub struct EnumSchemaIndex {
    values: HashMap<String, Vec<EnumValue>>,
}

impl EnumSchemaIndex {
    pub fn from_schemas<'a>(
        schemas: impl IntoIterator<Item = (&'a String, &'a SchemaObject)>,
    ) -> Result<Self> {
        let mut values = HashMap::new();
        for (name, schema) in schemas {
            let Some(object) = schema.json_schema.as_object() else {
                continue;
            };
            let list = enum_values(name, object)?;
            if !list.is_empty() {
                values.insert(name.clone(), list);
            }
        }
        Ok(Self { values })
    }

    /// The schema's own name and its non-empty enum list
    pub fn get(&self, name: &str) -> Option<(&str, &[EnumValue])> {
        self.values
            .get_key_value(name)
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
