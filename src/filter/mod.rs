//! The enum description pass over an OpenAPI document.

mod parameters;
mod properties;
mod schemas;

pub use parameters::annotate_parameters;
pub use properties::annotate_properties;
pub use schemas::annotate_schemas;

use aide::openapi::OpenApi;
use tracing::{debug, error};

use crate::describe::EnumValueDescriber;
use crate::error::Result;
use crate::options::EnumDescriptionOptions;
use crate::registry::EnumRegistry;
use crate::schema::EnumSchemaIndex;

/// Document filter appending enum value descriptions to schemas, composed
/// properties and parameters.
///
/// # Example
/// ```ignore
/// use enumdoc::{DescribedEnum, EnumDescriptions, EnumRegistry};
///
/// #[derive(DescribedEnum)]
/// enum BasketStatus {
///     #[description = "Still a basket"]
///     Basket = 0,
/// }
///
/// let registry = EnumRegistry::new(env!("CARGO_CRATE_NAME")).with::<BasketStatus>();
/// let filter = EnumDescriptions::new(registry);
///
/// let app = api_router.finish_api(&mut api);
/// filter.apply(&mut api)?;
/// ```
#[derive(Debug, Clone)]
pub struct EnumDescriptions {
    registry: EnumRegistry,
    options: EnumDescriptionOptions,
}

/// Number of descriptions changed by each pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub schemas: usize,
    pub properties: usize,
    pub parameters: usize,
}

impl AnnotationSummary {
    pub fn total(&self) -> usize {
        self.schemas + self.properties + self.parameters
    }
}

impl EnumDescriptions {
    pub fn new(registry: EnumRegistry) -> Self {
        Self {
            registry,
            options: EnumDescriptionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EnumDescriptionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &EnumRegistry {
        &self.registry
    }

    pub fn options(&self) -> &EnumDescriptionOptions {
        &self.options
    }

    /// Annotate `api` in place.
    ///
    /// The work is staged on a copy: on error `api` is left exactly as it was.
    #[tracing::instrument(name = "enum_descriptions", skip_all)]
    pub fn apply(&self, api: &mut OpenApi) -> Result<AnnotationSummary> {
        let mut staged = api.clone();
        let summary = self.run(&mut staged)?;
        *api = staged;
        Ok(summary)
    }

    /// Annotate an owned document, returning it only when every pass succeeded.
    #[tracing::instrument(name = "enum_descriptions", skip_all)]
    pub fn annotate(&self, mut api: OpenApi) -> Result<OpenApi> {
        self.run(&mut api)?;
        Ok(api)
    }

    fn run(&self, api: &mut OpenApi) -> Result<AnnotationSummary> {
        let result = self.run_passes(api);
        match &result {
            Ok(summary) => debug!(
                schemas = summary.schemas,
                properties = summary.properties,
                parameters = summary.parameters,
                "enum descriptions appended"
            ),
            Err(err) => error!(error = %err, "enum description pass aborted"),
        }
        result
    }

    fn run_passes(&self, api: &mut OpenApi) -> Result<AnnotationSummary> {
        let index = match &api.components {
            Some(components) => EnumSchemaIndex::from_schemas(&components.schemas)?,
            None => EnumSchemaIndex::default(),
        };
        let describer = EnumValueDescriber::new(&self.registry, &self.options.separator);

        let mut summary = AnnotationSummary::default();
        if self.options.schemas {
            summary.schemas = annotate_schemas(api, &index, &describer)?;
        }
        if self.options.properties {
            summary.properties = annotate_properties(api, &index, &describer)?;
        }
        if self.options.parameters {
            summary.parameters = annotate_parameters(
                api,
                &index,
                &describer,
                self.options.parameter_matching,
            )?;
        }
        Ok(summary)
    }
}
