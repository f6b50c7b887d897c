use proc_macro::TokenStream;
use quote::quote;

mod parser;
use parser::{parse_described_enum, EnumInfo};

/// Derive `enumdoc::DescribedEnum` for a fieldless enum.
///
/// Each variant becomes a member of the generated metadata table: its name is
/// the name serde writes (`#[serde(rename = "...")]`, else the ident under the
/// enum's `#[serde(rename_all = "...")]`), its code the variant's discriminant,
/// and its description the optional `#[description = "..."]` attribute.
///
/// Codes are `i64`, so reprs wider than that (`u64`, `usize`, `u128`, `i128`)
/// are rejected.
///
/// # Example
///
/// ```ignore
/// #[derive(DescribedEnum)]
/// enum BasketStatus {
///     #[description = "Still a basket"]
///     Basket = 0,
///     #[description = "Order has been placed"]
///     Order = 1,
/// }
/// ```
#[proc_macro_derive(DescribedEnum, attributes(description))]
pub fn described_enum(item: TokenStream) -> TokenStream {
    match parse_described_enum(item.into()) {
        Ok(info) => expand(&info).into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(info: &EnumInfo) -> proc_macro2::TokenStream {
    let ident = &info.ident;
    let type_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = info.generics.split_for_impl();

    let members = info.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let name = &variant.name;
        let description = match &variant.description {
            Some(text) => quote! {
                ::core::option::Option::Some(::std::string::String::from(#text))
            },
            None => quote! { ::core::option::Option::None },
        };

        quote! {
            ::enumdoc::EnumMember {
                name: ::std::string::String::from(#name),
                code: Self::#variant_ident as i64,
                description: #description,
            }
        }
    });

    quote! {
        impl #impl_generics ::enumdoc::DescribedEnum for #ident #ty_generics #where_clause {
            fn enum_metadata() -> ::enumdoc::EnumTypeMetadata {
                ::enumdoc::EnumTypeMetadata {
                    name: ::std::string::String::from(#type_name),
                    namespace: ::std::string::String::from(::core::module_path!()),
                    members: ::std::vec![#(#members),*],
                }
            }
        }
    }
}
