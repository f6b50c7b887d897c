mod common;

use common::{as_json, document, parameter_description, registry};
use enumdoc::{
    EnumDescriptionOptions, EnumDescriptions, EnumMember, EnumTypeMetadata, ParameterMatching,
};
use serde_json::json;

fn components() -> serde_json::Value {
    json!({
        "schemas": {
            "BasketStatus": { "type": "integer", "enum": [0, 1] },
            "Status": { "type": "string", "enum": ["Active", "Retired"] }
        }
    })
}

fn with_status_enum(mut registry: enumdoc::EnumRegistry) -> enumdoc::EnumRegistry {
    registry.insert(
        EnumTypeMetadata::new("Status", env!("CARGO_CRATE_NAME"))
            .with_member(EnumMember::new("Active", 0).described("In service"))
            .with_member(EnumMember::new("Retired", 1).described("Out of service")),
    );
    registry
}

fn reference_matching() -> EnumDescriptionOptions {
    EnumDescriptionOptions {
        parameter_matching: ParameterMatching::Reference,
        ..Default::default()
    }
}

#[test]
fn test_parameter_named_like_enum_schema_gets_description() {
    let mut api = document(
        components(),
        json!({
            "/api/demo": {
                "get": {
                    "parameters": [{
                        "in": "query",
                        "name": "BasketStatus",
                        "required": false,
                        "description": "Filter by status",
                        "schema": { "$ref": "#/components/schemas/BasketStatus" }
                    }],
                    "responses": {}
                }
            }
        }),
    );

    let summary = EnumDescriptions::new(registry()).apply(&mut api).unwrap();

    assert_eq!(summary.parameters, 1);
    assert_eq!(
        parameter_description(&api, "/api/demo", "get", 0).unwrap(),
        "Filter by status<br />0 = Basket (Still a basket)<br />1 = Order (Order has been placed)"
    );
}

#[test]
fn test_name_match_ignores_the_declared_type() {
    // `Status` here is a free-text string, unrelated to the `Status` enum schema
    let mut api = document(
        components(),
        json!({
            "/api/tickets": {
                "get": {
                    "parameters": [{
                        "in": "query",
                        "name": "Status",
                        "required": false,
                        "schema": { "type": "string" }
                    }],
                    "responses": {}
                }
            }
        }),
    );

    EnumDescriptions::new(with_status_enum(registry()))
        .apply(&mut api)
        .unwrap();

    assert_eq!(
        parameter_description(&api, "/api/tickets", "get", 0).unwrap(),
        "Active = In service<br />Retired = Out of service"
    );
}

#[test]
fn test_reference_matching_skips_name_coincidence() {
    let mut api = document(
        components(),
        json!({
            "/api/tickets": {
                "get": {
                    "parameters": [
                        {
                            "in": "query",
                            "name": "Status",
                            "required": false,
                            "description": "Free text",
                            "schema": { "type": "string" }
                        },
                        {
                            "in": "query",
                            "name": "state",
                            "required": false,
                            "schema": { "$ref": "#/components/schemas/BasketStatus" }
                        }
                    ],
                    "responses": {}
                }
            }
        }),
    );

    EnumDescriptions::new(with_status_enum(registry()))
        .with_options(reference_matching())
        .apply(&mut api)
        .unwrap();

    assert_eq!(
        parameter_description(&api, "/api/tickets", "get", 0).as_deref(),
        Some("Free text")
    );
    assert_eq!(
        parameter_description(&api, "/api/tickets", "get", 1).unwrap(),
        "0 = Basket (Still a basket)<br />1 = Order (Order has been placed)"
    );
}

#[test]
fn test_every_operation_and_path_level_parameters() {
    let parameter = json!({
        "in": "header",
        "name": "BasketStatus",
        "required": true,
        "schema": { "type": "integer" }
    });
    let mut api = document(
        components(),
        json!({
            "/api/demo/{id}": {
                "parameters": [parameter.clone()],
                "get": { "parameters": [parameter.clone()], "responses": {} },
                "delete": { "parameters": [parameter], "responses": {} }
            }
        }),
    );

    let summary = EnumDescriptions::new(registry()).apply(&mut api).unwrap();

    assert_eq!(summary.parameters, 3);
    let json = as_json(&api);
    let expected = "0 = Basket (Still a basket)<br />1 = Order (Order has been placed)";
    assert_eq!(json["paths"]["/api/demo/{id}"]["parameters"][0]["description"], expected);
    assert_eq!(
        parameter_description(&api, "/api/demo/{id}", "get", 0).as_deref(),
        Some(expected)
    );
    assert_eq!(
        parameter_description(&api, "/api/demo/{id}", "delete", 0).as_deref(),
        Some(expected)
    );
}

#[test]
fn test_parameter_without_matching_schema_is_untouched() {
    let mut api = document(
        components(),
        json!({
            "/api/demo": {
                "get": {
                    "parameters": [{
                        "in": "query",
                        "name": "input",
                        "required": false,
                        "description": "Echoed back",
                        "schema": { "type": "string" }
                    }],
                    "responses": {}
                }
            }
        }),
    );

    let summary = EnumDescriptions::new(registry()).apply(&mut api).unwrap();

    assert_eq!(summary.parameters, 0);
    assert_eq!(
        parameter_description(&api, "/api/demo", "get", 0).as_deref(),
        Some("Echoed back")
    );
}

#[test]
fn test_parameters_are_annotated_once() {
    let filter = EnumDescriptions::new(registry());
    let api = document(
        components(),
        json!({
            "/api/demo": {
                "get": {
                    "parameters": [{
                        "in": "query",
                        "name": "BasketStatus",
                        "required": false,
                        "schema": { "type": "integer" }
                    }],
                    "responses": {}
                }
            }
        }),
    );

    let once = filter.annotate(api).unwrap();
    let twice = filter.annotate(once.clone()).unwrap();

    assert_eq!(
        parameter_description(&twice, "/api/demo", "get", 0),
        parameter_description(&once, "/api/demo", "get", 0)
    );
}

#[test]
fn test_unmapped_numeric_value_on_parameter_path_is_fatal() {
    let api = document(
        json!({
            "schemas": {
                "BasketStatus": { "type": "integer", "enum": [0, 12] }
            }
        }),
        json!({
            "/api/demo": {
                "get": {
                    "parameters": [{
                        "in": "query",
                        "name": "BasketStatus",
                        "required": false,
                        "schema": { "type": "integer" }
                    }],
                    "responses": {}
                }
            }
        }),
    );
    let options = EnumDescriptionOptions {
        schemas: false,
        ..Default::default()
    };

    let result = EnumDescriptions::new(registry())
        .with_options(options)
        .annotate(api);

    assert!(matches!(
        result,
        Err(enumdoc::Error::NumericValueUnmapped { code: 12, .. })
    ));
}
