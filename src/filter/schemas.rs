use aide::openapi::OpenApi;
use tracing::debug;

use crate::describe::EnumValueDescriber;
use crate::error::Result;
use crate::schema::{append_schema_description, EnumSchemaIndex};

/// Append the value descriptions of every enumerated component schema to
/// that schema's own description.
pub fn annotate_schemas(
    api: &mut OpenApi,
    index: &EnumSchemaIndex,
    describer: &EnumValueDescriber<'_>,
) -> Result<usize> {
    let Some(components) = api.components.as_mut() else {
        return Ok(0);
    };

    let mut annotated = 0;
    for (name, schema) in components.schemas.iter_mut() {
        let Some((type_name, values)) = index.get(name) else {
            continue;
        };
        let Some(text) = describer.describe(type_name, values)? else {
            continue;
        };
        let Some(object) = schema.json_schema.as_object_mut() else {
            continue;
        };

        if append_schema_description(object, &text, describer.separator()) {
            debug!(schema = %name, "appended enum description to schema");
            annotated += 1;
        }
    }

    Ok(annotated)
}
