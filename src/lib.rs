//! Human-readable enum value descriptions for aide-generated OpenAPI documents.
//!
//! Enum schemas only list raw values (`0, 1, 2` or `"Basket", "Order"`), which
//! documentation UIs show without explanation. [`EnumDescriptions`] appends a
//! line per value to the description of every enumerated component schema,
//! of every property composed from one, and of every parameter that matches
//! one:
//!
//! ```text
//! The current status of the basket<br />0 = Basket (Still a basket)<br />1 = Order (Order has been placed)
//! ```
//!
//! The per-value text comes from an explicit [`EnumRegistry`], filled with
//! enums that derive [`DescribedEnum`] or with tables loaded from YAML.
//!
//! # Example
//! ```ignore
//! use enumdoc::{DescribedEnum, EnumDescriptions, EnumRegistry};
//!
//! #[derive(Serialize, JsonSchema, DescribedEnum)]
//! enum BasketStatus {
//!     #[description = "Still a basket"]
//!     Basket = 0,
//!     #[description = "Order has been placed"]
//!     Order = 1,
//! }
//!
//! let registry = EnumRegistry::new(env!("CARGO_CRATE_NAME")).with::<BasketStatus>();
//! let app = router.finish_api(&mut api);
//! let api = EnumDescriptions::new(registry).annotate(api)?;
//! ```

extern crate self as enumdoc;

pub use enumdoc_macros::DescribedEnum;

// Re-export aide and schemars for convenience
pub use aide;
pub use schemars;

pub mod describe;
mod error;
pub mod filter;
mod options;
mod registry;
pub mod schema;

pub use describe::{EnumValue, EnumValueDescriber};
pub use error::{Error, Result};
pub use filter::{AnnotationSummary, EnumDescriptions};
pub use options::{EnumDescriptionOptions, ParameterMatching};
pub use registry::{DescribedEnum, EnumMember, EnumRegistry, EnumTypeMetadata};
