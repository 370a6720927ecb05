use morphic_core::utils::RenameRule;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, Pat, ReturnType, Type};

use crate::attrs::{self, MemberAttrs};

struct ConstructorFn {
    ident: syn::Ident,
    primary: bool,
    parameters: Vec<Parameter>,
}

struct Parameter {
    name: Option<String>,
    ty: Type,
}

pub(crate) fn expand(args: TokenStream, mut item: ItemImpl) -> syn::Result<TokenStream> {
    let mut rename_all = RenameRule::None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("rename_all") {
            rename_all = attrs::rename_rule(&meta)?;
            return Ok(());
        }
        Err(meta.error("unsupported argument, expected `rename_all`"))
    });
    syn::parse::Parser::parse2(parser, args)?;

    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "`constructors` goes on an inherent impl block",
        ));
    }

    let self_ty = item.self_ty.clone();
    let mut constructors = Vec::new();
    for impl_item in &mut item.items {
        let ImplItem::Fn(function) = impl_item else { continue };
        if let Some(constructor) = constructor_fn(function, &self_ty, rename_all)? {
            constructors.push(constructor);
        }
    }

    match constructors.iter().filter(|c| c.primary).count() {
        0 => {
            if let Some(first) = constructors.first_mut() {
                first.primary = true;
            }
        }
        1 => {}
        _ => {
            return Err(syn::Error::new_spanned(
                &self_ty,
                "only one constructor can be marked `#[primary]`",
            ));
        }
    }

    let descriptors = constructors.iter().map(|constructor| {
        let ident = &constructor.ident;
        let label = ident.to_string();
        let parameters = constructor.parameters.iter().map(|parameter| {
            let ty = &parameter.ty;
            match &parameter.name {
                Some(name) => quote! {
                    ::morphic::ParameterDescriptor::named(#name, ::morphic::TypeTag::of::<#ty>())
                },
                None => quote! {
                    ::morphic::ParameterDescriptor::unnamed(::morphic::TypeTag::of::<#ty>())
                },
            }
        });
        let takes = constructor.parameters.iter().map(|parameter| {
            let ty = &parameter.ty;
            quote!(__morphic_args.take::<#ty>()?)
        });
        let primary = constructor.primary.then(|| quote!(.primary()));
        quote! {
            ::morphic::ConstructorDescriptor::new(
                #label,
                ::std::vec![#(#parameters),*],
                |__morphic_args| ::std::result::Result::Ok(Self::#ident(#(#takes),*)),
            )
            #primary
        }
    });

    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    Ok(quote! {
        #item

        impl #impl_generics ::morphic::Target for #self_ty #where_clause {
            fn describe_constructors() -> ::std::vec::Vec<::morphic::ConstructorDescriptor<Self>> {
                ::std::vec![#(#descriptors),*]
            }
        }
    })
}

/// Collect `function` as a constructor if it is an associated function
/// returning `Self`, stripping the helper attributes it carries.
fn constructor_fn(
    function: &mut ImplItemFn,
    self_ty: &Type,
    rename_all: RenameRule,
) -> syn::Result<Option<ConstructorFn>> {
    let primary = function.attrs.iter().any(|attr| attr.path().is_ident("primary"));
    let skip = MemberAttrs::parse(&function.attrs)?.skip;
    attrs::strip(&mut function.attrs, &["primary", "morph"]);

    let sig = &mut function.sig;
    let is_constructor = sig.receiver().is_none() && returns_self(&sig.output, self_ty);
    if !is_constructor || skip {
        if primary {
            return Err(syn::Error::new_spanned(
                &sig.ident,
                "`#[primary]` marks an associated function returning `Self`",
            ));
        }
        for input in &mut sig.inputs {
            if let FnArg::Typed(typed) = input {
                attrs::strip(&mut typed.attrs, &["morph"]);
            }
        }
        return Ok(None);
    }

    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "constructors cannot be generic",
        ));
    }
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(asyncness, "constructors cannot be async"));
    }

    let mut parameters = Vec::with_capacity(sig.inputs.len());
    for input in &mut sig.inputs {
        let FnArg::Typed(typed) = input else { continue };
        let attrs = MemberAttrs::parse(&typed.attrs)?;
        attrs::strip(&mut typed.attrs, &["morph"]);
        if attrs.skip {
            return Err(syn::Error::new_spanned(
                &typed.pat,
                "constructor parameters cannot be skipped",
            ));
        }
        if matches!(&*typed.ty, Type::Reference(_) | Type::ImplTrait(_)) {
            return Err(syn::Error::new_spanned(
                &typed.ty,
                "constructor parameters must be owned, concrete types",
            ));
        }
        let name = match &*typed.pat {
            Pat::Ident(pat) => Some(attrs.published_name(&pat.ident, rename_all)),
            _ => attrs.rename,
        };
        parameters.push(Parameter {
            name,
            ty: (*typed.ty).clone(),
        });
    }

    Ok(Some(ConstructorFn {
        ident: sig.ident.clone(),
        primary,
        parameters,
    }))
}

fn returns_self(output: &ReturnType, self_ty: &Type) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    if let Type::Path(path) = &**ty {
        if path.qself.is_none() && path.path.is_ident("Self") {
            return true;
        }
    }
    ty.to_token_stream().to_string() == self_ty.to_token_stream().to_string()
}
