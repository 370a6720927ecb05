use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, WherePredicate, parse_quote};

use crate::attrs::{ContainerAttrs, MemberAttrs};

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let container = ContainerAttrs::parse(&input.attrs)?;

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`Source` can only be derived for structs",
        ));
    };
    let fields: Vec<_> = match &data.fields {
        Fields::Named(named) => named.named.iter().collect(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`Source` needs named fields: accessors are matched by name",
            ));
        }
    };

    let mut names: Vec<String> = Vec::with_capacity(fields.len());
    let mut accessors = Vec::with_capacity(fields.len());
    let mut bounds: Vec<WherePredicate> = Vec::with_capacity(fields.len());

    for field in fields {
        let attrs = MemberAttrs::parse(&field.attrs)?;
        let Some(ident) = &field.ident else { continue };
        if attrs.skip {
            continue;
        }
        let name = attrs.published_name(ident, container.rename_all);
        if names.contains(&name) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("accessor name `{name}` is used by more than one field"),
            ));
        }

        let ty = &field.ty;
        accessors.push(quote! {
            ::morphic::AccessorDescriptor::new(#name, move || ::std::clone::Clone::clone(&self.#ident))
        });
        bounds.push(parse_quote!(#ty: ::std::clone::Clone + ::std::marker::Send + 'static));
        names.push(name);
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let mut where_clause = where_clause.cloned().unwrap_or_else(|| parse_quote!(where));
    where_clause.predicates.extend(bounds);

    Ok(quote! {
        impl #impl_generics ::morphic::Source for #ident #ty_generics #where_clause {
            fn describe_accessors(&self) -> ::std::vec::Vec<::morphic::AccessorDescriptor<'_>> {
                ::std::vec![#(#accessors),*]
            }
        }
    })
}
