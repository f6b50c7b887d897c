use proc_macro2::Ident;
use syn::Generics;

/// A fieldless enum accepted by `#[derive(DescribedEnum)]`
#[derive(Debug, Clone)]
pub struct EnumInfo {
    pub ident: Ident,
    pub generics: Generics,
    pub variants: Vec<VariantInfo>,
}

#[derive(Debug, Clone)]
pub struct VariantInfo {
    pub ident: Ident,
    /// Serialized member name: `#[serde(rename)]`, else the ident under `rename_all`
    pub name: String,
    pub description: Option<String>,
}
