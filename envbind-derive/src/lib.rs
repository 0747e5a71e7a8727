//! Derive macro for the envbind environment binding library
//!
//! This crate provides `#[derive(BindTarget)]` for automatically generating
//! a record's binding table from field attributes.
//!
//! # Usage
//!
//! ```text
//! use envbind::DeriveBindTarget as BindTarget;
//!
//! #[derive(Default, BindTarget)]
//! struct Settings {
//!     #[bind("env:HOSTS,sep:',',transform:hosts_no_ports,required")]
//!     hosts: Vec<String>,
//!
//!     #[bind("env:PORT,default:9042")]
//!     port: i64,
//!
//!     #[bind(environment)]
//!     env: String,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse_macro_input, Data, DeriveInput, Fields, GenericArgument, Ident, LitStr, PathArguments,
    Type,
};

/// How a field's Rust type maps onto the engine's typed slots.
enum SlotKind {
    Text,
    Int,
    Flag,
    TextList,
    /// A `Vec` whose element type is not `String`; binding it reports an
    /// unsupported-list error at runtime, matching engine semantics.
    UnsupportedList,
    /// Any other type; binding it reports an unsupported-type error.
    Unsupported,
}

/// What the field's `#[bind]` attribute declared.
enum BindAttr {
    Tag(String),
    Environment,
}

/// Derive macro for generating `BindTarget` implementations.
///
/// # Attributes
///
/// ## Field attributes (`#[bind(...)]`)
/// - `#[bind("env:KEY,default:VALUE,...")]` - the binding tag for this field
/// - `#[bind(environment)]` - receive the resolved environment name
///   (field type must be `String` or `envbind::Environment`)
///
/// Fields without a `#[bind]` attribute are not part of the binding table
/// and are left untouched by the engine.
#[proc_macro_derive(BindTarget, attributes(bind))]
pub fn derive_bind_target(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "BindTarget can only be derived for structs with named fields.\n\nExample:\n  #[derive(BindTarget)]\n  struct MySettings {\n      #[bind(\"env:KEY\")]\n      field: String,\n  }",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(
                &input,
                "BindTarget can only be derived for structs.\n\nTry: #[derive(BindTarget)] on a struct, not an enum or union.",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut entries = Vec::new();
    let mut environment_slot: Option<proc_macro2::TokenStream> = None;

    for field in fields {
        let field_ident = field.ident.as_ref().expect("named field has an ident");
        let attr = match parse_bind_attr(&field.attrs) {
            Ok(Some(attr)) => attr,
            Ok(None) => continue,
            Err(err) => return err.to_compile_error().into(),
        };

        match attr {
            BindAttr::Tag(tag) => {
                let field_name = field_ident.to_string();
                let slot = slot_tokens(&field.ty, field_ident);
                entries.push(quote! {
                    envbind::Field::new(#field_name, #tag, #slot)
                });
            }
            BindAttr::Environment => {
                if environment_slot.is_some() {
                    return syn::Error::new_spanned(
                        field,
                        "only one field may be marked #[bind(environment)]",
                    )
                    .to_compile_error()
                    .into();
                }
                environment_slot = match environment_slot_tokens(&field.ty, field_ident) {
                    Ok(tokens) => Some(tokens),
                    Err(err) => return err.to_compile_error().into(),
                };
            }
        }
    }

    let environment_method = environment_slot.map(|slot| {
        quote! {
            fn environment_field(&mut self) -> Option<envbind::EnvField<'_>> {
                Some(#slot)
            }
        }
    });

    let expanded = quote! {
        impl envbind::BindTarget for #name {
            fn fields(&mut self) -> Option<Vec<envbind::Field<'_>>> {
                Some(vec![
                    #(#entries),*
                ])
            }

            #environment_method
        }
    };

    TokenStream::from(expanded)
}

/// Extract the `#[bind(...)]` attribute from a field, if present.
fn parse_bind_attr(attrs: &[syn::Attribute]) -> syn::Result<Option<BindAttr>> {
    for attr in attrs {
        if !attr.path().is_ident("bind") {
            continue;
        }
        if let Ok(tag) = attr.parse_args::<LitStr>() {
            return Ok(Some(BindAttr::Tag(tag.value())));
        }
        if let Ok(ident) = attr.parse_args::<Ident>() {
            if ident == "environment" {
                return Ok(Some(BindAttr::Environment));
            }
            return Err(syn::Error::new_spanned(
                ident,
                "unknown #[bind] argument; expected a tag string literal or `environment`",
            ));
        }
        return Err(syn::Error::new_spanned(
            attr,
            "expected #[bind(\"env:KEY,...\")] or #[bind(environment)]",
        ));
    }
    Ok(None)
}

/// Classify a field type into the engine's slot kinds.
fn classify(ty: &Type) -> SlotKind {
    let Type::Path(type_path) = ty else {
        return SlotKind::Unsupported;
    };
    let Some(segment) = type_path.path.segments.last() else {
        return SlotKind::Unsupported;
    };

    match segment.ident.to_string().as_str() {
        "String" => SlotKind::Text,
        "i64" => SlotKind::Int,
        "bool" => SlotKind::Flag,
        "Vec" => {
            if vec_element_is_string(&segment.arguments) {
                SlotKind::TextList
            } else {
                SlotKind::UnsupportedList
            }
        }
        _ => SlotKind::Unsupported,
    }
}

/// Check whether a `Vec<...>` segment's element type is `String`.
fn vec_element_is_string(arguments: &PathArguments) -> bool {
    let PathArguments::AngleBracketed(args) = arguments else {
        return false;
    };
    let Some(GenericArgument::Type(Type::Path(element))) = args.args.first() else {
        return false;
    };
    element
        .path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "String")
}

fn slot_tokens(ty: &Type, field: &Ident) -> proc_macro2::TokenStream {
    match classify(ty) {
        SlotKind::Text => quote! { envbind::FieldSlot::Text(&mut self.#field) },
        SlotKind::Int => quote! { envbind::FieldSlot::Int(&mut self.#field) },
        SlotKind::Flag => quote! { envbind::FieldSlot::Flag(&mut self.#field) },
        SlotKind::TextList => quote! { envbind::FieldSlot::TextList(&mut self.#field) },
        SlotKind::UnsupportedList => quote! { envbind::FieldSlot::UnsupportedList },
        SlotKind::Unsupported => quote! { envbind::FieldSlot::Unsupported },
    }
}

/// An environment field must be a `String` (raw name) or the
/// `envbind::Environment` enum (typed).
fn environment_slot_tokens(
    ty: &Type,
    field: &Ident,
) -> syn::Result<proc_macro2::TokenStream> {
    let last_segment = match ty {
        Type::Path(type_path) => type_path.path.segments.last(),
        _ => None,
    };

    match last_segment.map(|segment| segment.ident.to_string()).as_deref() {
        Some("String") => Ok(quote! { envbind::EnvField::Name(&mut self.#field) }),
        Some("Environment") => Ok(quote! { envbind::EnvField::Typed(&mut self.#field) }),
        _ => Err(syn::Error::new_spanned(
            ty,
            "#[bind(environment)] requires a field of type String or envbind::Environment",
        )),
    }
}
