//! `#[morph(...)]` helper attribute parsing shared by the macros.

use morphic_core::utils::RenameRule;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Ident, LitStr};

/// Parse `rename_all = "..."`.
pub(crate) fn rename_rule(meta: &ParseNestedMeta<'_>) -> syn::Result<RenameRule> {
    let lit: LitStr = meta.value()?.parse()?;
    RenameRule::from_attr(&lit.value()).ok_or_else(|| {
        syn::Error::new(
            lit.span(),
            "unknown rename rule, expected \"camelCase\", \"PascalCase\" or \"snake_case\"",
        )
    })
}

/// Member name as published to the engine, before renaming.
pub(crate) fn member_name(ident: &Ident) -> String {
    ident.unraw().to_string()
}

/// Container-level `#[morph(rename_all = "...")]`.
#[derive(Default)]
pub(crate) struct ContainerAttrs {
    pub rename_all: RenameRule,
}

impl ContainerAttrs {
    pub(crate) fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("morph")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    parsed.rename_all = rename_rule(&meta)?;
                    return Ok(());
                }
                Err(meta.error("unsupported container attribute, expected `rename_all`"))
            })?;
        }
        Ok(parsed)
    }
}

/// Member-level `#[morph(rename = "...")]` and `#[morph(skip)]`.
#[derive(Default)]
pub(crate) struct MemberAttrs {
    pub rename: Option<String>,
    pub skip: bool,
}

impl MemberAttrs {
    pub(crate) fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("morph")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parsed.rename = Some(lit.value());
                    return Ok(());
                }
                if meta.path.is_ident("skip") {
                    parsed.skip = true;
                    return Ok(());
                }
                Err(meta.error("unsupported attribute, expected `rename` or `skip`"))
            })?;
        }
        Ok(parsed)
    }

    /// Published name of `ident` under `rule`, unless renamed explicitly.
    pub(crate) fn published_name(&self, ident: &Ident, rule: RenameRule) -> String {
        self.rename
            .clone()
            .unwrap_or_else(|| rule.apply(&member_name(ident)))
    }
}

/// Strip `#[morph(...)]` and `#[<marker>]` attributes an attribute macro
/// consumed, so they do not reach the compiler.
pub(crate) fn strip(attrs: &mut Vec<Attribute>, names: &[&str]) {
    attrs.retain(|attr| !names.iter().any(|name| attr.path().is_ident(name)));
}
