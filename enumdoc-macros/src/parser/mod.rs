mod attributes;
mod case;
mod error;
mod types;

pub use error::ParseError;
pub use types::EnumInfo;

use types::VariantInfo;

use proc_macro2::TokenStream;
use syn::{Data, DeriveInput, Fields};

/// Parse an item annotated with `#[derive(DescribedEnum)]`
pub fn parse_described_enum(input: TokenStream) -> Result<EnumInfo, ParseError> {
    let input: DeriveInput = syn::parse2(input)?;

    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(_) | Data::Union(_) => {
            return Err(ParseError::with_span(
                format!(
                    "DescribedEnum can only be derived for enums\n\
                     note: '{}' is not an enum",
                    input.ident
                ),
                input.ident.span(),
            ));
        }
    };

    attributes::check_repr(&input.attrs)?;
    let rename_all = attributes::parse_rename_all(&input.attrs)?;

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(ParseError::with_span(
                format!(
                    "Variant '{}' carries fields\n\
                     help: DescribedEnum needs a fieldless enum so that every variant has a numeric code",
                    variant.ident
                ),
                variant.ident.span(),
            ));
        }

        variants.push(VariantInfo {
            ident: variant.ident.clone(),
            name: attributes::parse_serde_rename(&variant.attrs).unwrap_or_else(|| {
                let ident = variant.ident.to_string();
                match rename_all {
                    Some(rule) => rule.apply(&ident),
                    None => ident,
                }
            }),
            description: attributes::parse_description(&variant.attrs)?,
        });
    }

    Ok(EnumInfo {
        ident: input.ident,
        generics: input.generics,
        variants,
    })
}
