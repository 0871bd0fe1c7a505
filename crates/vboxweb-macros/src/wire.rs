use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Type};

use crate::single_generic_argument;

#[derive(Default)]
struct ContainerOptions {
    element: Option<LitStr>,
    default: bool,
}

enum Shape<'t> {
    Required(&'t Type),
    Optional(&'t Type),
    Repeated(&'t Type),
}

struct WireField<'t> {
    ident: &'t Ident,
    wire_name: String,
    shape: Shape<'t>,
}

fn container_options(attrs: &[Attribute]) -> syn::Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("wire")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("element") {
                options.element = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("default") {
                options.default = true;
                Ok(())
            } else {
                Err(meta.error("expected `element = \"...\"` or `default`"))
            }
        })?;
    }
    Ok(options)
}

fn field_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("wire")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"`"))
            }
        })?;
    }
    Ok(rename)
}

/// `returnval` -> `returnval`, `name_or_id` -> `nameOrId`.
fn lower_camel(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut out = String::with_capacity(ident.len());
    let mut upper_next = false;
    for c in ident.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn shape_of(ty: &Type) -> Shape<'_> {
    if let Some(inner) = single_generic_argument(ty, "Option") {
        Shape::Optional(inner)
    } else if let Some(inner) = single_generic_argument(ty, "Vec") {
        Shape::Repeated(inner)
    } else {
        Shape::Required(ty)
    }
}

pub(crate) fn impl_wire_struct(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "WireStruct does not support generic structs",
        ));
    }

    let name = &input.ident;
    let options = container_options(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "WireStruct can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "WireStruct can only be derived for structs",
            ));
        }
    };
    let is_unit = matches!(&input.data, Data::Struct(data) if matches!(data.fields, Fields::Unit));

    let fields = fields
        .into_iter()
        .map(|field| {
            let ident = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
            let wire_name = match field_rename(&field.attrs)? {
                Some(rename) => rename,
                None => lower_camel(&ident.to_string()),
            };
            Ok(WireField {
                ident,
                wire_name,
                shape: shape_of(&field.ty),
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let tag_name_impl = options.element.as_ref().map(|element| {
        quote! {
            impl ::vboxweb_soap::cores::TagName for #name {
                const TAG_NAME: &'static str = #element;
                const NAMESPACE: Option<&'static str> =
                    Some(::vboxweb_soap::cores::VBOX_NAMESPACE_URI);
            }
        }
    });

    let tag_value_impl = tag_value_impl(name, &fields, is_unit);
    let deserialize_impl = deserialize_impl(name, &fields, is_unit, options.default);

    Ok(quote! {
        #tag_name_impl
        #tag_value_impl
        #deserialize_impl
    })
}

fn tag_value_impl(name: &Ident, fields: &[WireField<'_>], is_unit: bool) -> TokenStream2 {
    let idents: Vec<&Ident> = fields.iter().map(|f| f.ident).collect();
    let destructure = if is_unit {
        quote! { let _ = self; }
    } else {
        quote! { let Self { #(#idents),* } = self; }
    };

    let pushes = fields.iter().map(|field| {
        let ident = field.ident;
        let wire_name = &field.wire_name;
        match field.shape {
            Shape::Required(_) => quote! {
                children.push(::vboxweb_soap::cores::TagValue::append_to_element(
                    #ident,
                    ::vboxweb_xml::builder::Element::new(#wire_name),
                ));
            },
            Shape::Optional(_) => quote! {
                if let Some(value) = #ident {
                    children.push(::vboxweb_soap::cores::TagValue::append_to_element(
                        value,
                        ::vboxweb_xml::builder::Element::new(#wire_name),
                    ));
                }
            },
            Shape::Repeated(_) => quote! {
                for value in #ident {
                    children.push(::vboxweb_soap::cores::TagValue::append_to_element(
                        value,
                        ::vboxweb_xml::builder::Element::new(#wire_name),
                    ));
                }
            },
        }
    });

    quote! {
        impl<'a> ::vboxweb_soap::cores::TagValue<'a> for #name {
            #[allow(unused_mut)]
            fn append_to_element(
                self,
                element: ::vboxweb_xml::builder::Element<'a>,
            ) -> ::vboxweb_xml::builder::Element<'a> {
                #destructure
                let mut children: Vec<::vboxweb_xml::builder::Element<'a>> = Vec::new();
                #(#pushes)*
                element.add_children(children)
            }
        }
    }
}

fn deserialize_impl(
    name: &Ident,
    fields: &[WireField<'_>],
    is_unit: bool,
    default: bool,
) -> TokenStream2 {
    let visitor_name = format_ident!("{}Visitor", name);

    let visitor_fields = fields.iter().map(|field| {
        let ident = field.ident;
        match field.shape {
            Shape::Required(ty) | Shape::Optional(ty) => quote! { #ident: Option<#ty> },
            Shape::Repeated(ty) => quote! { #ident: Vec<#ty> },
        }
    });

    let arms = fields.iter().map(|field| {
        let ident = field.ident;
        let wire_name = &field.wire_name;
        match field.shape {
            Shape::Required(ty) | Shape::Optional(ty) => quote! {
                #wire_name => {
                    if self.#ident.is_some() {
                        return Err(::vboxweb_xml::XmlError::TagCountInvalid {
                            tag: #wire_name.to_owned(),
                            value: 2,
                        });
                    }
                    self.#ident = Some(
                        <#ty as ::vboxweb_xml::parser::XmlDeserialize<'a>>::from_node(child)?,
                    );
                }
            },
            Shape::Repeated(ty) => quote! {
                #wire_name => {
                    self.#ident.push(
                        <#ty as ::vboxweb_xml::parser::XmlDeserialize<'a>>::from_node(child)?,
                    );
                }
            },
        }
    });

    let finish_fields = fields.iter().map(|field| {
        let ident = field.ident;
        let wire_name = &field.wire_name;
        match field.shape {
            Shape::Required(_) if default => quote! { #ident: #ident.unwrap_or_default() },
            Shape::Required(_) => quote! {
                #ident: #ident.ok_or_else(|| {
                    ::vboxweb_xml::XmlError::InvalidXml(format!(
                        "Missing {} in {}",
                        #wire_name,
                        stringify!(#name)
                    ))
                })?
            },
            Shape::Optional(_) | Shape::Repeated(_) => quote! { #ident },
        }
    });

    let idents: Vec<&Ident> = fields.iter().map(|f| f.ident).collect();
    let build = if is_unit {
        quote! { Ok(#name) }
    } else {
        quote! {
            let Self { #(#idents),* } = self;
            Ok(#name { #(#finish_fields),* })
        }
    };

    let visit_child = if fields.is_empty() {
        quote! {
            ::tracing::debug!(
                element = child.tag_name().name(),
                parent = stringify!(#name),
                "ignoring unknown element"
            );
        }
    } else {
        quote! {
            match child.tag_name().name() {
                #(#arms)*
                other => {
                    ::tracing::debug!(
                        element = other,
                        parent = stringify!(#name),
                        "ignoring unknown element"
                    );
                }
            }
        }
    };

    quote! {
        #[doc(hidden)]
        #[derive(Default)]
        pub struct #visitor_name {
            #(#visitor_fields),*
        }

        impl<'a> ::vboxweb_xml::parser::XmlVisitor<'a> for #visitor_name {
            type Value = #name;

            fn visit_children(
                &mut self,
                children: impl Iterator<Item = ::vboxweb_xml::parser::Node<'a, 'a>>,
            ) -> Result<(), ::vboxweb_xml::XmlError> {
                for child in children.filter(::vboxweb_xml::parser::Node::is_element) {
                    #visit_child
                }
                Ok(())
            }

            fn finish(self) -> Result<Self::Value, ::vboxweb_xml::XmlError> {
                #build
            }
        }

        impl<'a> ::vboxweb_xml::parser::XmlDeserialize<'a> for #name {
            type Visitor = #visitor_name;

            fn visitor() -> Self::Visitor {
                #visitor_name::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::lower_camel;

    #[test]
    fn lower_camel_conversion() {
        assert_eq!(lower_camel("returnval"), "returnval");
        assert_eq!(lower_camel("name_or_id"), "nameOrId");
        assert_eq!(lower_camel("r#type"), "type");
        assert_eq!(lower_camel("_this"), "this");
    }
}
