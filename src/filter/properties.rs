use aide::openapi::OpenApi;
use serde_json::Value;
use tracing::debug;

use crate::describe::EnumValueDescriber;
use crate::error::Result;
use crate::schema::{append_schema_description, referenced_schema, EnumSchemaIndex};

/// Append enum value descriptions to properties that are composed from a
/// single enumerated component schema.
///
/// The text is written to the property, not to the referenced schema, and
/// is resolved under the referenced schema's name. Properties carrying their
/// own `enum` list are left alone.
pub fn annotate_properties(
    api: &mut OpenApi,
    index: &EnumSchemaIndex,
    describer: &EnumValueDescriber<'_>,
) -> Result<usize> {
    let Some(components) = api.components.as_mut() else {
        return Ok(0);
    };

    let mut annotated = 0;
    for (schema_name, schema) in components.schemas.iter_mut() {
        let Some(properties) = schema
            .json_schema
            .as_object_mut()
            .and_then(|object| object.get_mut("properties"))
            .and_then(Value::as_object_mut)
        else {
            continue;
        };

        for (property_name, property) in properties.iter_mut() {
            let Some(property) = property.as_object_mut() else {
                continue;
            };
            if property.contains_key("enum") {
                continue;
            }
            let Some((type_name, values)) =
                referenced_schema(property).and_then(|name| index.get(name))
            else {
                continue;
            };
            let Some(text) = describer.describe(type_name, values)? else {
                continue;
            };

            if append_schema_description(property, &text, describer.separator()) {
                debug!(
                    schema = %schema_name,
                    property = %property_name,
                    type_name,
                    "appended enum description to property"
                );
                annotated += 1;
            }
        }
    }

    Ok(annotated)
}
