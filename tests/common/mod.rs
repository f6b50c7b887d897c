#![allow(dead_code)]

use enumdoc::aide::openapi::OpenApi;
use enumdoc::{DescribedEnum, EnumRegistry};
use serde_json::Value;

pub const BASKET_STATUS_LINES: [&str; 5] = [
    "0 = Basket (Still a basket)",
    "1 = Order (Order has been placed)",
    "2 = Invoiced (Order has been invoiced)",
    "3 = Cancelled (The order has been cancelled)",
    "4 = Gone (The order is gone. This means.. well, we cannot find it)",
];

#[derive(DescribedEnum)]
pub enum BasketStatus {
    #[description = "Still a basket"]
    Basket = 0,
    #[description = "Order has been placed"]
    Order = 1,
    #[description = "Order has been invoiced"]
    Invoiced = 2,
    #[description = "The order has been cancelled"]
    Cancelled = 3,
    #[description = "The order is gone. This means.. well, we cannot find it"]
    Gone = 4,
}

pub fn registry() -> EnumRegistry {
    EnumRegistry::new(env!("CARGO_CRATE_NAME")).with::<BasketStatus>()
}

/// Build a document from JSON `components` and `paths` objects
pub fn document(components: Value, paths: Value) -> OpenApi {
    let mut api = OpenApi::default();
    api.info.title = "Test API".to_string();
    api.components = Some(serde_json::from_value(components).expect("valid components"));
    api.paths = Some(serde_json::from_value(paths).expect("valid paths"));
    api
}

pub fn as_json(api: &OpenApi) -> Value {
    serde_json::to_value(api).expect("document serializes")
}

pub fn schema_description(api: &OpenApi, schema: &str) -> Option<String> {
    as_json(api)["components"]["schemas"][schema]["description"]
        .as_str()
        .map(str::to_owned)
}

pub fn property_description(api: &OpenApi, schema: &str, property: &str) -> Option<String> {
    as_json(api)["components"]["schemas"][schema]["properties"][property]["description"]
        .as_str()
        .map(str::to_owned)
}

pub fn parameter_description(
    api: &OpenApi,
    path: &str,
    method: &str,
    index: usize,
) -> Option<String> {
    as_json(api)["paths"][path][method]["parameters"][index]["description"]
        .as_str()
        .map(str::to_owned)
}
