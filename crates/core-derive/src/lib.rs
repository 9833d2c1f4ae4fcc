//! Proc-macros for hostbridge-core
//!
//! Provides two derives:
//!
//! ## `#[derive(HostRecord)]` - record conversion
//!
//! For flat records crossing the host boundary. Generates `FromValue`,
//! `ToValue`, and a per-field `can_convert` so the record marshals exactly
//! like a hand-written bridge: decode reads each declared property by its
//! host name (missing reads as `undefined`), encode writes every property
//! in declaration order, unknown incoming keys are ignored.
//!
//! ```ignore
//! #[derive(Debug, PartialEq, HostRecord)]
//! struct PaymentFlowType {
//!     pay_with_card: Option<bool>,
//!     pay_with_apple_g_pay: Option<bool>,
//!     #[host(rename = "withoutCVV")]
//!     without_cvv: Option<bool>,
//! }
//! ```
//!
//! Host names default to camelCase of the field name; `#[host(rename_all =
//! "...")]` on the struct or `#[host(rename = "...")]` on a field override.
//!
//! ## `#[derive(HostEnum)]` - string-valued enum conversion
//!
//! For fieldless enums whose host representation is a string. Decode
//! matches the exact wire string, encode emits it.
//!
//! ```ignore
//! #[derive(Debug, PartialEq, HostEnum)]
//! #[host(rename_all = "UPPERCASE")]
//! enum Currency {
//!     Uah,
//!     Usd,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta, NestedMeta};

// =============================================================================
// Host name resolution (rename_all / rename attributes)
// =============================================================================

/// Case convention applied to Rust identifiers to produce host names
#[derive(Debug, Clone, Copy, PartialEq)]
enum RenameRule {
    /// `pay_with_card` → `payWithCard` (the default)
    CamelCase,
    /// `MobilePayment` → `mobile_payment`
    SnakeCase,
    /// `Uah` → `UAH`
    Uppercase,
    /// `Ukrainian` → `ukrainian`
    Lowercase,
    /// `pay_with_card` → `PayWithCard`
    PascalCase,
    /// `pay_with_card` → `PAY_WITH_CARD`
    ScreamingSnakeCase,
}

impl RenameRule {
    fn parse(value: &str, span: &dyn quote::ToTokens) -> Result<Self, syn::Error> {
        match value {
            "camelCase" => Ok(RenameRule::CamelCase),
            "snake_case" => Ok(RenameRule::SnakeCase),
            "UPPERCASE" => Ok(RenameRule::Uppercase),
            "lowercase" => Ok(RenameRule::Lowercase),
            "PascalCase" => Ok(RenameRule::PascalCase),
            "SCREAMING_SNAKE_CASE" => Ok(RenameRule::ScreamingSnakeCase),
            other => Err(syn::Error::new_spanned(
                span,
                format!(
                    "unknown rename_all value: {}. Expected: camelCase, snake_case, \
                     UPPERCASE, lowercase, PascalCase, SCREAMING_SNAKE_CASE",
                    other
                ),
            )),
        }
    }

    /// Applies the rule to a Rust identifier (snake_case field or
    /// PascalCase variant).
    fn apply(self, ident: &str) -> String {
        let parts = name_parts(ident);
        match self {
            RenameRule::CamelCase => parts
                .iter()
                .enumerate()
                .map(|(i, p)| if i == 0 { p.clone() } else { capitalize(p) })
                .collect(),
            RenameRule::SnakeCase => parts.join("_"),
            RenameRule::Uppercase => parts.concat().to_uppercase(),
            RenameRule::Lowercase => parts.concat(),
            RenameRule::PascalCase => parts.iter().map(|p| capitalize(p)).collect(),
            RenameRule::ScreamingSnakeCase => parts.join("_").to_uppercase(),
        }
    }
}

/// Splits an identifier into lowercase words: underscores separate words
/// in snake_case, uppercase letters start words in PascalCase.
fn name_parts(ident: &str) -> Vec<String> {
    let mut parts = Vec::new();
    for chunk in ident.split('_') {
        let mut current = String::new();
        for ch in chunk.chars() {
            if ch.is_uppercase() && !current.is_empty() {
                parts.push(current);
                current = String::new();
            }
            current.extend(ch.to_lowercase());
        }
        if !current.is_empty() {
            parts.push(current);
        }
    }
    parts
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Strips the raw-identifier prefix so `r#type` names the property `type`.
fn unraw(ident: &syn::Ident) -> String {
    ident.to_string().trim_start_matches("r#").to_string()
}

/// Parse `#[host(rename_all = "...")]` on the container
fn parse_container_rule(attrs: &[syn::Attribute]) -> Result<RenameRule, syn::Error> {
    for attr in attrs {
        if !attr.path.is_ident("host") {
            continue;
        }
        let meta = attr.parse_meta()?;
        if let Meta::List(list) = meta {
            for nested in &list.nested {
                if let NestedMeta::Meta(Meta::NameValue(nv)) = nested {
                    if nv.path.is_ident("rename_all") {
                        if let Lit::Str(s) = &nv.lit {
                            return RenameRule::parse(&s.value(), &nv.lit);
                        }
                        return Err(syn::Error::new_spanned(
                            &nv.lit,
                            "rename_all expects a string literal",
                        ));
                    }
                    return Err(syn::Error::new_spanned(
                        &nv.path,
                        "unknown attribute: expected rename_all on the container",
                    ));
                }
            }
        }
    }
    Ok(RenameRule::CamelCase)
}

/// Parse `#[host(rename = "...")]` on a field or variant
fn parse_rename(attrs: &[syn::Attribute]) -> Result<Option<String>, syn::Error> {
    for attr in attrs {
        if !attr.path.is_ident("host") {
            continue;
        }
        let meta = attr.parse_meta()?;
        if let Meta::List(list) = meta {
            for nested in &list.nested {
                if let NestedMeta::Meta(Meta::NameValue(nv)) = nested {
                    if nv.path.is_ident("rename") {
                        if let Lit::Str(s) = &nv.lit {
                            return Ok(Some(s.value()));
                        }
                        return Err(syn::Error::new_spanned(
                            &nv.lit,
                            "rename expects a string literal",
                        ));
                    }
                    return Err(syn::Error::new_spanned(
                        &nv.path,
                        "unknown attribute: expected rename on a field or variant",
                    ));
                }
            }
        }
    }
    Ok(None)
}

// =============================================================================
// #[derive(HostRecord)] - record conversion
// =============================================================================

/// A record field with its resolved host-facing property name
struct RecordField {
    ident: syn::Ident,
    ty: syn::Type,
    host_name: String,
}

/// Collect the named fields of the record and resolve their host names
fn collect_record_fields(input: &DeriveInput) -> Result<Vec<RecordField>, syn::Error> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other_fields => {
                return Err(syn::Error::new_spanned(
                    input,
                    format!(
                        "HostRecord requires named fields, found a {} struct",
                        match other_fields {
                            Fields::Unnamed(_) => "tuple",
                            _ => "unit",
                        }
                    ),
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "HostRecord can only be derived for structs",
            ))
        }
    };

    let rule = parse_container_rule(&input.attrs)?;
    let mut collected = Vec::with_capacity(fields.len());
    for field in fields {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let host_name = match parse_rename(&field.attrs)? {
            Some(explicit) => explicit,
            None => rule.apply(&unraw(&ident)),
        };
        collected.push(RecordField {
            ident,
            ty: field.ty.clone(),
            host_name,
        });
    }
    Ok(collected)
}

fn expand_host_record(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "HostRecord does not support generic types",
        ));
    }

    let fields = collect_record_fields(input)?;
    let name = &input.ident;
    let field_count = fields.len();

    let decode_fields: Vec<_> = fields
        .iter()
        .map(|f| {
            let ident = &f.ident;
            let host_name = &f.host_name;
            quote! {
                #ident: hostbridge_core::FromValue::from_value(obj.property(#host_name))
                    .map_err(|e| e.at(#host_name))?
            }
        })
        .collect();

    let check_fields: Vec<_> = fields
        .iter()
        .map(|f| {
            let ty = &f.ty;
            let host_name = &f.host_name;
            quote! {
                <#ty as hostbridge_core::FromValue>::can_convert(obj.property(#host_name))
            }
        })
        .collect();

    let encode_fields: Vec<_> = fields
        .iter()
        .map(|f| {
            let ident = &f.ident;
            let host_name = &f.host_name;
            quote! {
                obj.insert(#host_name, hostbridge_core::ToValue::to_value(&self.#ident));
            }
        })
        .collect();

    // A zero-field record never reads `obj` when decoding and never
    // mutates it when encoding.
    let (obj_pat, obj_decl) = if fields.is_empty() {
        (quote! { _obj }, quote! { obj })
    } else {
        (quote! { obj }, quote! { mut obj })
    };

    Ok(quote! {
        impl hostbridge_core::FromValue for #name {
            fn from_value(value: &hostbridge_core::Value) -> hostbridge_core::Result<Self> {
                let #obj_pat = value
                    .as_object()
                    .ok_or_else(|| hostbridge_core::Error::type_mismatch("object", value))?;
                Ok(#name {
                    #(#decode_fields,)*
                })
            }

            fn can_convert(value: &hostbridge_core::Value) -> bool {
                match value.as_object() {
                    Some(#obj_pat) => true #(&& #check_fields)*,
                    None => false,
                }
            }
        }

        impl hostbridge_core::ToValue for #name {
            fn to_value(&self) -> hostbridge_core::Value {
                let #obj_decl = hostbridge_core::Object::with_capacity(#field_count);
                #(#encode_fields)*
                hostbridge_core::Value::Object(obj)
            }
        }
    })
}

/// Derives `FromValue`/`ToValue` for a flat record. See the crate docs.
#[proc_macro_derive(HostRecord, attributes(host))]
pub fn derive_host_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_host_record(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.into_compile_error().into(),
    }
}

// =============================================================================
// #[derive(HostEnum)] - string-valued enum conversion
// =============================================================================

/// An enum variant with its resolved wire string
struct EnumVariant {
    ident: syn::Ident,
    wire: String,
}

fn collect_enum_variants(input: &DeriveInput) -> Result<Vec<EnumVariant>, syn::Error> {
    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "HostEnum can only be derived for enums",
            ))
        }
    };
    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "HostEnum requires at least one variant",
        ));
    }

    let rule = parse_container_rule(&input.attrs)?;
    let mut collected = Vec::with_capacity(variants.len());
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                format!(
                    "HostEnum variant '{}' must be fieldless; the host representation is a bare string",
                    variant.ident
                ),
            ));
        }
        let wire = match parse_rename(&variant.attrs)? {
            Some(explicit) => explicit,
            None => rule.apply(&unraw(&variant.ident)),
        };
        collected.push(EnumVariant {
            ident: variant.ident.clone(),
            wire,
        });
    }
    Ok(collected)
}

fn expand_host_enum(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "HostEnum does not support generic types",
        ));
    }

    let variants = collect_enum_variants(input)?;
    let name = &input.ident;

    // "one of \"UAH\", \"USD\"" - the expected label for error messages
    let expected = format!(
        "one of {}",
        variants
            .iter()
            .map(|v| format!("{:?}", v.wire))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let decode_arms: Vec<_> = variants
        .iter()
        .map(|v| {
            let ident = &v.ident;
            let wire = &v.wire;
            quote! { #wire => Ok(#name::#ident) }
        })
        .collect();

    let encode_arms: Vec<_> = variants
        .iter()
        .map(|v| {
            let ident = &v.ident;
            let wire = &v.wire;
            quote! { #name::#ident => hostbridge_core::Value::String(#wire.to_string()) }
        })
        .collect();

    let wires: Vec<_> = variants.iter().map(|v| v.wire.as_str()).collect();

    Ok(quote! {
        impl hostbridge_core::FromValue for #name {
            fn from_value(value: &hostbridge_core::Value) -> hostbridge_core::Result<Self> {
                let s = value
                    .as_str()
                    .ok_or_else(|| hostbridge_core::Error::type_mismatch(#expected, value))?;
                match s {
                    #(#decode_arms,)*
                    other => Err(hostbridge_core::Error::TypeMismatch {
                        expected: #expected,
                        found: format!("string {:?}", other),
                        path: "$".to_string(),
                    }),
                }
            }

            fn can_convert(value: &hostbridge_core::Value) -> bool {
                matches!(value.as_str(), Some(#(#wires)|*))
            }
        }

        impl hostbridge_core::ToValue for #name {
            fn to_value(&self) -> hostbridge_core::Value {
                match self {
                    #(#encode_arms,)*
                }
            }
        }
    })
}

/// Derives string-valued `FromValue`/`ToValue` for a fieldless enum. See
/// the crate docs.
#[proc_macro_derive(HostEnum, attributes(host))]
pub fn derive_host_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_host_enum(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.into_compile_error().into(),
    }
}
