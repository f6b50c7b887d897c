use aide::openapi::{
    OpenApi, Operation, Parameter, ParameterData, ParameterSchemaOrContent, PathItem, ReferenceOr,
};
use tracing::debug;

use crate::describe::{EnumValue, EnumValueDescriber};
use crate::error::Result;
use crate::options::ParameterMatching;
use crate::schema::{appended_description, referenced_schema, EnumSchemaIndex};

/// Append enum value descriptions to operation and path-level parameters.
///
/// With [`ParameterMatching::Name`] a parameter matches the component schema
/// of the same name whatever its declared type. With
/// [`ParameterMatching::Reference`] the parameter schema must `$ref` the
/// enumerated component schema.
pub fn annotate_parameters(
    api: &mut OpenApi,
    index: &EnumSchemaIndex,
    describer: &EnumValueDescriber<'_>,
    matching: ParameterMatching,
) -> Result<usize> {
    let Some(paths) = api.paths.as_mut() else {
        return Ok(0);
    };

    let mut annotated = 0;
    for (path, item) in paths.paths.iter_mut() {
        let ReferenceOr::Item(item) = item else {
            continue;
        };

        annotated += annotate_list(path, &mut item.parameters, index, describer, matching)?;
        for operation in operations_mut(item) {
            annotated +=
                annotate_list(path, &mut operation.parameters, index, describer, matching)?;
        }
    }

    Ok(annotated)
}

fn operations_mut(item: &mut PathItem) -> impl Iterator<Item = &mut Operation> {
    [
        &mut item.get,
        &mut item.put,
        &mut item.post,
        &mut item.delete,
        &mut item.options,
        &mut item.head,
        &mut item.patch,
        &mut item.trace,
    ]
    .into_iter()
    .flatten()
}

fn annotate_list(
    path: &str,
    parameters: &mut [ReferenceOr<Parameter>],
    index: &EnumSchemaIndex,
    describer: &EnumValueDescriber<'_>,
    matching: ParameterMatching,
) -> Result<usize> {
    let mut annotated = 0;
    for parameter in parameters.iter_mut() {
        let ReferenceOr::Item(parameter) = parameter else {
            continue;
        };
        let data = parameter_data_mut(parameter);

        let Some((type_name, values)) = matching_schema(data, index, matching) else {
            continue;
        };
        let Some(text) = describer.describe(type_name, values)? else {
            continue;
        };

        if let Some(updated) =
            appended_description(data.description.as_deref(), &text, describer.separator())
        {
            debug!(
                path,
                parameter = %data.name,
                type_name,
                "appended enum description to parameter"
            );
            data.description = Some(updated);
            annotated += 1;
        }
    }
    Ok(annotated)
}

fn matching_schema<'i>(
    data: &ParameterData,
    index: &'i EnumSchemaIndex,
    matching: ParameterMatching,
) -> Option<(&'i str, &'i [EnumValue])> {
    match matching {
        ParameterMatching::Name => index.get(&data.name),
        ParameterMatching::Reference => match &data.format {
            ParameterSchemaOrContent::Schema(schema) => schema
                .json_schema
                .as_object()
                .and_then(referenced_schema)
                .and_then(|name| index.get(name)),
            ParameterSchemaOrContent::Content(_) => None,
        },
    }
}

fn parameter_data_mut(parameter: &mut Parameter) -> &mut ParameterData {
    match parameter {
        Parameter::Query { parameter_data, .. }
        | Parameter::Header { parameter_data, .. }
        | Parameter::Path { parameter_data, .. }
        | Parameter::Cookie { parameter_data, .. } => parameter_data,
    }
}
