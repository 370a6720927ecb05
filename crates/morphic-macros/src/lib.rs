//! Procedural macros for morphic.
//!
//! Generated code names the facade crate as `::morphic`; use these macros
//! through it rather than depending on this crate directly.

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, ItemTrait, parse_macro_input};

mod attrs;
mod contract;
mod source;
mod target;

/// Derive `Source`: one accessor per named field, in declaration order.
///
/// Accessors clone the field. Container attribute:
/// `#[morph(rename_all = "camelCase" | "PascalCase" | "snake_case")]`.
/// Field attributes: `#[morph(rename = "...")]`, `#[morph(skip)]`.
#[proc_macro_derive(Source, attributes(morph))]
pub fn derive_source(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    source::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implement `Target` from the associated functions of an inherent impl.
///
/// Every function without a receiver that returns `Self` becomes a
/// constructor, in declaration order. `#[primary]` marks the primary
/// constructor (the first one by default); `#[morph(skip)]` leaves a
/// function out. Parameter names are published as written, adjusted by
/// `#[constructors(rename_all = "...")]` or a parameter's
/// `#[morph(rename = "...")]`.
///
/// ```ignore
/// #[morphic::constructors(rename_all = "camelCase")]
/// impl Person {
///     #[primary]
///     fn new(id: Uuid, first_name: String, sur_name: String) -> Self { .. }
///     fn anonymous(sur_name: String) -> Self { .. }
/// }
/// ```
#[proc_macro_attribute]
pub fn constructors(args: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as ItemImpl);
    target::expand(args.into(), item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Turn a trait into a mapping contract and generate `<Trait>Impl`, which
/// implements the trait by dispatching every method to a `Mapper`.
///
/// ```ignore
/// #[morphic::contract]
/// trait PersonMapper {
///     #[constructor(mappings = ["id", "surName"])]
///     fn with_default_name(&self, person: Person) -> morphic::Result<Contact>;
///
///     #[mapping(from = "surName", to = "firstName")]
///     #[mapping(from = "firstname", to = "surname", case_sensitive = false)]
///     fn swapped(&self, person: Person) -> morphic::Result<Contact>;
/// }
///
/// let mapper = PersonMapperImpl::new()?;
/// ```
#[proc_macro_attribute]
pub fn contract(args: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as ItemTrait);
    contract::expand(args.into(), item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
