use super::case::RenameRule;
use super::error::ParseError;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta, Token};

/// Parse the `#[description = "..."]` attribute of a variant
pub fn parse_description(attrs: &[Attribute]) -> Result<Option<String>, ParseError> {
    let mut description = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("description")) {
        let Meta::NameValue(name_value) = &attr.meta else {
            return Err(ParseError::with_span(
                "Invalid #[description] attribute\n\
                 help: expected '#[description = \"...\"]'\n\
                 note: example '#[description = \"Order has been placed\"]'",
                attr.span(),
            ));
        };

        let Expr::Lit(ExprLit {
            lit: Lit::Str(text),
            ..
        }) = &name_value.value
        else {
            return Err(ParseError::with_span(
                "Invalid #[description] value\n\
                 help: the description must be a string literal",
                name_value.value.span(),
            ));
        };

        if description.is_some() {
            return Err(ParseError::with_span(
                "Duplicate #[description] attribute\n\
                 help: each variant takes at most one description",
                attr.span(),
            ));
        }

        description = Some(text.value());
    }

    Ok(description)
}

/// Find `rename = "..."` inside `#[serde(...)]`, the name serde writes for the variant
pub fn parse_serde_rename(attrs: &[Attribute]) -> Option<String> {
    serde_string(attrs, "rename").map(|text| text.value())
}

/// Read the container-level `#[serde(rename_all = "...")]` rule
pub fn parse_rename_all(attrs: &[Attribute]) -> Result<Option<RenameRule>, ParseError> {
    let Some(text) = serde_string(attrs, "rename_all") else {
        return Ok(None);
    };

    match RenameRule::from_name(&text.value()) {
        Some(rule) => Ok(Some(rule)),
        None => Err(ParseError::with_span(
            format!(
                "Unknown serde rename_all rule '{}'\n\
                 help: expected one of {}",
                text.value(),
                RenameRule::NAMES.join(", ")
            ),
            text.span(),
        )),
    }
}

/// Reject `#[repr(..)]` integer types whose discriminants may not fit an `i64` code
pub fn check_repr(attrs: &[Attribute]) -> Result<(), ParseError> {
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        let mut wide = None;
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if WIDE_REPRS.contains(&ident.to_string().as_str()) {
                    wide = Some(ident.clone());
                }
            }
            if meta.input.peek(syn::token::Paren) {
                let _content;
                syn::parenthesized!(_content in meta.input);
            }
            Ok(())
        })?;

        if let Some(ident) = wide {
            return Err(ParseError::with_span(
                format!(
                    "DescribedEnum does not support #[repr({ident})]\n\
                     note: member codes are i64, so discriminants above i64::MAX would wrap\n\
                     help: use a repr of i64 or narrower"
                ),
                ident.span(),
            ));
        }
    }
    Ok(())
}

const WIDE_REPRS: &[&str] = &["u64", "usize", "u128", "i128"];

fn serde_string(attrs: &[Attribute], key: &str) -> Option<LitStr> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .find_map(|meta| match meta {
            Meta::NameValue(name_value) if name_value.path.is_ident(key) => {
                match name_value.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(text),
                        ..
                    }) => Some(text),
                    _ => None,
                }
            }
            _ => None,
        })
}
