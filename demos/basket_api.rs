use aide::{
    axum::{routing::get, ApiRouter},
    openapi::OpenApi,
};
use axum::{extract::Query, response::Json, Extension};
use enumdoc::{DescribedEnum, EnumDescriptionOptions, EnumDescriptions, EnumRegistry};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Lifecycle of a basket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, DescribedEnum)]
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

/// Represents a basket
#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct Basket {
    /// The identifier of the basket
    pub id: u32,
    /// The owner of the basket
    pub owner: String,
    /// The current status of the basket
    pub status: BasketStatus,
}

#[derive(Deserialize, JsonSchema)]
pub struct BasketFilter {
    /// Only list baskets in this state
    pub status: Option<BasketStatus>,
}

async fn next_basket() -> Json<Basket> {
    Json(Basket {
        id: 1,
        owner: "John Dow".into(),
        status: BasketStatus::Basket,
    })
}

async fn list_baskets(Query(filter): Query<BasketFilter>) -> Json<Vec<Basket>> {
    let baskets = [
        Basket {
            id: 1,
            owner: "John Dow".into(),
            status: BasketStatus::Basket,
        },
        Basket {
            id: 2,
            owner: "Jane Dow".into(),
            status: BasketStatus::Invoiced,
        },
    ];

    Json(
        baskets
            .into_iter()
            .filter(|basket| {
                filter
                    .status
                    .map_or(true, |status| status == basket.status)
            })
            .collect(),
    )
}

async fn serve_api(Extension(api): Extension<OpenApi>) -> Json<OpenApi> {
    Json(api)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,basket_api=debug,enumdoc=debug".into()),
        )
        .init();

    let registry = EnumRegistry::new(env!("CARGO_CRATE_NAME")).with::<BasketStatus>();
    let options = match std::env::var("ENUMDOC_OPTIONS") {
        Ok(path) => EnumDescriptionOptions::from_yaml_str(&std::fs::read_to_string(path)?)?,
        Err(_) => EnumDescriptionOptions::default(),
    };
    let enum_descriptions = EnumDescriptions::new(registry).with_options(options);

    let mut api = OpenApi::default();
    api.info.title = "Basket API".to_string();
    api.info.description = Some("Enum descriptions example using enumdoc".to_string());

    let router = ApiRouter::new()
        .api_route("/api/demo", get(list_baskets))
        .api_route("/api/demo/next", get(next_basket))
        .route("/api.json", axum::routing::get(serve_api));

    #[cfg(feature = "swagger")]
    let router = router.route("/docs", aide::swagger::Swagger::new("/api.json").axum_route());

    let app = router.finish_api(&mut api);
    let api = enum_descriptions.annotate(api)?;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;

    info!("Server started successfully");
    info!("Address: http://127.0.0.1:3000");
    info!("OpenAPI spec: http://127.0.0.1:3000/api.json");
    #[cfg(feature = "swagger")]
    info!("Documentation: http://127.0.0.1:3000/docs");

    axum::serve(listener, app.layer(Extension(api))).await?;
    Ok(())
}
