//! `#[morphic::contract]`: a mapping contract declared as a trait.
//!
//! Every method without a default body must look like
//! `fn name(&self, input: In) -> R<Out, ..>`; it becomes the signature
//! `name: In -> Out`. `#[constructor(...)]` and `#[mapping(...)]` on the
//! method become its configuration.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Expr, ExprArray, FnArg, GenericArgument, ItemTrait, Lit, LitBool, LitStr, PathArguments,
    ReturnType, Signature, TraitItem, TraitItemFn, Type,
};

use crate::attrs;

struct Selector {
    names: Vec<LitStr>,
    case_sensitive: bool,
}

struct Override {
    from: LitStr,
    to: LitStr,
    case_sensitive: bool,
}

struct Method {
    ident: syn::Ident,
    /// Signature for the generated impl, input renamed to `__morphic_input`.
    sig: Signature,
    input: Type,
    output: Type,
    selector: Option<Selector>,
    overrides: Vec<Override>,
}

pub(crate) fn expand(args: TokenStream, mut item: ItemTrait) -> syn::Result<TokenStream> {
    if !args.is_empty() {
        return Err(syn::Error::new_spanned(args, "`contract` takes no arguments"));
    }
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "mapping contracts cannot be generic",
        ));
    }

    let mut methods = Vec::new();
    for trait_item in &mut item.items {
        let TraitItem::Fn(function) = trait_item else { continue };
        if let Some(method) = mapping_method(function)? {
            methods.push(method);
        }
    }

    let vis = &item.vis;
    let trait_ident = &item.ident;
    let contract_name = trait_ident.to_string();
    let impl_ident = format_ident!("{}Impl", trait_ident);

    let signatures = methods.iter().map(|method| {
        let name = method.ident.to_string();
        let input = &method.input;
        let output = &method.output;
        let selector = method.selector.as_ref().map(|selector| {
            let names = &selector.names;
            let count = names.len();
            let case_sensitive = selector.case_sensitive;
            quote! {
                .with_selector(
                    ::morphic::ConstructorSelector::new::<[&'static str; #count], &'static str>([#(#names),*])
                        .case_sensitive(#case_sensitive)
                )
            }
        });
        let overrides = method.overrides.iter().map(|field| {
            let Override { from, to, case_sensitive } = field;
            quote! {
                .with_override(::morphic::FieldOverride::new(#from, #to).case_sensitive(#case_sensitive))
            }
        });
        quote! {
            .signature_with::<#input, #output>(
                #name,
                ::morphic::MethodConfig::new() #selector #(#overrides)*,
            )
        }
    });

    let impls = methods.iter().map(|method| {
        let name = method.ident.to_string();
        let sig = &method.sig;
        let input = &method.input;
        let output = &method.output;
        quote! {
            #sig {
                self.mapper
                    .map::<#input, #output>(#name, __morphic_input)
                    .map_err(::std::convert::Into::into)
            }
        }
    });

    let doc = format!("Mapper implementing [`{contract_name}`] through the morphic engine.");

    Ok(quote! {
        #item

        #[doc = #doc]
        #[derive(Debug)]
        #vis struct #impl_ident {
            mapper: ::morphic::Mapper,
        }

        impl #impl_ident {
            /// Builder holding every declared signature and its configuration.
            pub fn builder() -> ::morphic::ContractBuilder {
                ::morphic::MappingContract::builder(#contract_name)
                    #(#signatures)*
            }

            pub fn contract() -> ::std::result::Result<::morphic::MappingContract, ::morphic::ConfigError> {
                Self::builder().build()
            }

            pub fn new() -> ::std::result::Result<Self, ::morphic::ConfigError> {
                Self::with_options(::morphic::EngineOptions::default())
            }

            pub fn with_options(
                options: ::morphic::EngineOptions,
            ) -> ::std::result::Result<Self, ::morphic::ConfigError> {
                ::std::result::Result::Ok(Self::from_contract(Self::contract()?, options))
            }

            /// Use a contract built elsewhere, e.g. from
            /// [`builder`](Self::builder) with JSON configuration layered on.
            pub fn from_contract(contract: ::morphic::MappingContract, options: ::morphic::EngineOptions) -> Self {
                Self {
                    mapper: ::morphic::Mapper::with_options(contract, options),
                }
            }

            pub fn mapper(&self) -> &::morphic::Mapper {
                &self.mapper
            }
        }

        impl #trait_ident for #impl_ident {
            #(#impls)*
        }
    })
}

/// Validate one trait method and read its configuration attributes.
fn mapping_method(function: &mut TraitItemFn) -> syn::Result<Option<Method>> {
    let selector = parse_selector(function)?;
    let overrides = parse_overrides(function)?;
    attrs::strip(&mut function.attrs, &["constructor", "mapping"]);

    if function.default.is_some() {
        return Ok(None);
    }

    let mut sig = function.sig.clone();
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "mapping methods cannot be generic",
        ));
    }
    let receiver_ok = sig
        .receiver()
        .is_some_and(|receiver| receiver.reference.is_some() && receiver.mutability.is_none());
    if !receiver_ok || sig.inputs.len() != 2 {
        return Err(syn::Error::new_spanned(
            &sig.ident,
            "mapping methods take `&self` and exactly one input",
        ));
    }

    let Some(FnArg::Typed(typed)) = sig.inputs.iter_mut().nth(1) else {
        return Err(syn::Error::new_spanned(&function.sig.ident, "missing mapping input"));
    };
    let input = (*typed.ty).clone();
    *typed.pat = syn::parse_quote!(__morphic_input);
    typed.attrs.clear();

    let output = output_type(&sig.output).ok_or_else(|| {
        syn::Error::new_spanned(
            &sig.output,
            "mapping methods return a result type such as `morphic::Result<Target>`",
        )
    })?;

    Ok(Some(Method {
        ident: sig.ident.clone(),
        sig,
        input,
        output,
        selector,
        overrides,
    }))
}

fn parse_selector(function: &TraitItemFn) -> syn::Result<Option<Selector>> {
    let mut selector = None;
    for attr in function.attrs.iter().filter(|attr| attr.path().is_ident("constructor")) {
        if selector.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "only one `#[constructor]` is allowed per mapping method",
            ));
        }
        let mut names = None;
        let mut case_sensitive = true;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("mappings") {
                let array: ExprArray = meta.value()?.parse()?;
                names = Some(string_elements(&array)?);
                return Ok(());
            }
            if meta.path.is_ident("case_sensitive") {
                case_sensitive = meta.value()?.parse::<LitBool>()?.value;
                return Ok(());
            }
            Err(meta.error("unsupported argument, expected `mappings` or `case_sensitive`"))
        })?;
        let names = names.ok_or_else(|| syn::Error::new_spanned(attr, "missing `mappings = [...]`"))?;
        selector = Some(Selector {
            names,
            case_sensitive,
        });
    }
    Ok(selector)
}

fn parse_overrides(function: &TraitItemFn) -> syn::Result<Vec<Override>> {
    let mut overrides = Vec::new();
    for attr in function.attrs.iter().filter(|attr| attr.path().is_ident("mapping")) {
        let mut from = None;
        let mut to = None;
        let mut case_sensitive = true;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("from") {
                from = Some(meta.value()?.parse::<LitStr>()?);
                return Ok(());
            }
            if meta.path.is_ident("to") {
                to = Some(meta.value()?.parse::<LitStr>()?);
                return Ok(());
            }
            if meta.path.is_ident("case_sensitive") {
                case_sensitive = meta.value()?.parse::<LitBool>()?.value;
                return Ok(());
            }
            Err(meta.error("unsupported argument, expected `from`, `to` or `case_sensitive`"))
        })?;
        let (Some(from), Some(to)) = (from, to) else {
            return Err(syn::Error::new_spanned(attr, "`#[mapping]` needs both `from` and `to`"));
        };
        overrides.push(Override {
            from,
            to,
            case_sensitive,
        });
    }
    Ok(overrides)
}

fn string_elements(array: &ExprArray) -> syn::Result<Vec<LitStr>> {
    array
        .elems
        .iter()
        .map(|elem| match elem {
            Expr::Lit(lit) => match &lit.lit {
                Lit::Str(s) => Ok(s.clone()),
                other => Err(syn::Error::new_spanned(other, "expected a string literal")),
            },
            other => Err(syn::Error::new_spanned(other, "expected a string literal")),
        })
        .collect()
}

/// First generic argument of the return type: `Out` in `Result<Out, E>`.
fn output_type(output: &ReturnType) -> Option<Type> {
    let ReturnType::Type(_, ty) = output else {
        return None;
    };
    let Type::Path(path) = &**ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty.clone()),
        _ => None,
    })
}
