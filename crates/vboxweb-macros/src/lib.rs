use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, GenericArgument, PathArguments, Type, TypePath, parse_macro_input};

mod wire;

/// Derives `TagValue` for structs where all fields are `Option<Tag<ValueType, TagName>>`.
///
/// Each `Some(tag)` becomes a child element, in field order.
#[proc_macro_derive(SimpleTagValue)]
pub fn derive_simple_tag_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    impl_simple_tag_value(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derives `XmlDeserialize` for structs where all fields are `Option<Tag<ValueType, TagName>>`.
///
/// Child elements are matched against each field's `TagName::TAG_NAME`; an
/// element that matches no field is logged and skipped.
#[proc_macro_derive(SimpleXmlDeserialize)]
pub fn derive_simple_xml_deserialize(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    impl_simple_xml_deserialize(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derives the wire codec of an operation payload or a value struct.
///
/// Container attributes:
/// - `#[wire(element = "IMachine_getName")]` also implements `TagName`, putting
///   the element in the VirtualBox namespace.
/// - `#[wire(default)]` decodes missing members to their `Default`.
///
/// Field attributes:
/// - `#[wire(rename = "_this")]` overrides the element name, which otherwise is
///   the field name in lowerCamelCase.
///
/// `Option<T>` fields are omitted when `None`, `Vec<T>` fields repeat their
/// element, any other field is required.
#[proc_macro_derive(WireStruct, attributes(wire))]
pub fn derive_wire_struct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    wire::impl_wire_struct(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct SimpleFieldEntry {
    field_name: Ident,
    field_type: Type,
    tag_name_type: Type,
}

fn simple_fields(input: &DeriveInput, derive: &str) -> syn::Result<Vec<SimpleFieldEntry>> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            format!("{derive} does not support generic structs"),
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    format!("{derive} can only be derived for structs with named fields"),
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                format!("{derive} can only be derived for structs"),
            ));
        }
    };

    fields
        .iter()
        .map(|field| {
            let field_name = field
                .ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
            let tag_name_type = extract_tag_name_type(&field.ty).ok_or_else(|| {
                syn::Error::new_spanned(&field.ty, "expected a field of type Option<Tag<V, N>>")
            })?;
            Ok(SimpleFieldEntry {
                field_name,
                field_type: field.ty.clone(),
                tag_name_type,
            })
        })
        .collect()
}

fn impl_simple_tag_value(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = simple_fields(input, "SimpleTagValue")?;
    let field_names: Vec<&Ident> = fields.iter().map(|f| &f.field_name).collect();

    Ok(quote! {
        impl<'a> crate::cores::TagValue<'a> for #name {
            fn append_to_element(
                self,
                element: ::vboxweb_xml::builder::Element<'a>,
            ) -> ::vboxweb_xml::builder::Element<'a> {
                let Self { #(#field_names),* } = self;

                let mut array = Vec::new();

                #(
                    if let Some(tag) = #field_names {
                        array.push(tag.into_element());
                    }
                )*

                element.add_children(array)
            }
        }
    })
}

fn impl_simple_xml_deserialize(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let visitor_name = format_ident!("{}Visitor", name);
    let fields = simple_fields(input, "SimpleXmlDeserialize")?;

    let visitor_fields = fields.iter().map(|entry| {
        let field_name = &entry.field_name;
        let field_type = &entry.field_type;
        quote! { pub #field_name: #field_type }
    });

    let branches = fields.iter().map(|entry| {
        let field_name = &entry.field_name;
        let tag_name_type = &entry.tag_name_type;
        quote! {
            if tag_name == <#tag_name_type as crate::cores::TagName>::TAG_NAME {
                self.#field_name = Some(::vboxweb_xml::parser::XmlDeserialize::from_node(child)?);
                continue;
            }
        }
    });

    let field_names: Vec<&Ident> = fields.iter().map(|f| &f.field_name).collect();

    Ok(quote! {
        #[derive(Debug, Clone, Default)]
        pub struct #visitor_name {
            #(#visitor_fields),*
        }

        impl<'a> ::vboxweb_xml::parser::XmlVisitor<'a> for #visitor_name {
            type Value = #name;

            fn visit_children(
                &mut self,
                children: impl Iterator<Item = ::vboxweb_xml::parser::Node<'a, 'a>>,
            ) -> Result<(), ::vboxweb_xml::XmlError> {
                for child in children {
                    if !child.is_element() {
                        continue;
                    }

                    let tag_name = child.tag_name().name();

                    #(#branches)*

                    ::tracing::debug!(
                        element = tag_name,
                        parent = stringify!(#name),
                        "ignoring unknown element"
                    );
                }

                Ok(())
            }

            fn finish(self) -> Result<Self::Value, ::vboxweb_xml::XmlError> {
                let Self { #(#field_names),* } = self;

                Ok(#name { #(#field_names),* })
            }
        }

        impl<'a> ::vboxweb_xml::parser::XmlDeserialize<'a> for #name {
            type Visitor = #visitor_name;

            fn visitor() -> Self::Visitor {
                #visitor_name::default()
            }
        }
    })
}

/// Finds `N` in `Option<Tag<V, N>>`.
fn extract_tag_name_type(ty: &Type) -> Option<Type> {
    let inner = single_generic_argument(ty, "Option")?;
    let Type::Path(TypePath { path, .. }) = inner else {
        return None;
    };
    let segment = path.segments.last()?;
    if segment.ident != "Tag" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });
    let _value = types.next()?;
    types.next().cloned()
}

/// Returns `T` when `ty` is `wrapper<T>`, matching on the last path segment.
pub(crate) fn single_generic_argument<'t>(ty: &'t Type, wrapper: &str) -> Option<&'t Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let segment = path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}
