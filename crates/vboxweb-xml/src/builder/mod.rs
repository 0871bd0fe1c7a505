//! Compact, namespace-aware XML writer.
//!
//! Elements carry their namespace as a URL; prefixes are resolved at write
//! time from the `xmlns` declarations in scope, so a subtree can be built
//! before the envelope that declares its namespaces.
mod attribute;
#[allow(clippy::module_inception)]
mod builder;
mod declaration;
mod element;
mod namespace;

use std::borrow::Cow;
use std::collections::HashMap;

pub use self::attribute::*;
pub use self::builder::*;
pub use self::declaration::*;
pub use self::element::*;
pub use self::namespace::*;

pub type AliasMap<'a> = HashMap<Namespace<'a>, Option<&'a str>>;

#[derive(Debug, thiserror::Error)]
pub enum XmlBuilderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("UTF-8 error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error("Missing alias map for element '{tag}' in namespace '{ns}'")]
    MissingAliasMapForElement { tag: String, ns: String },
    #[error("Missing alias map for attribute '{attr}' in namespace '{ns}'")]
    MissingAliasMapForAttribute { attr: String, ns: String },
    #[error("Namespace '{ns}' not declared for tag '{tag}'")]
    NamespaceNotDeclared { tag: String, ns: String },
    #[error("Namespace '{ns}' has no alias for tag '{tag}'")]
    NamespaceHasNoAlias { tag: String, ns: String },
}

pub trait NamespaceWrite<'a> {
    fn ns_write<W: std::io::Write>(
        &self,
        w: &mut W,
        aliases: Option<&AliasMap<'a>>,
    ) -> Result<(), XmlBuilderError>;
}

/// Escapes the five XML special characters. Borrows when nothing needs escaping.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOAP_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
    const VBOX_NS: &str = "http://www.virtualbox.org/";

    #[test]
    fn test_simple_xml() {
        let element = Element::new("root");

        let builder = Builder::new(None, element);
        let xml_string = builder.to_xml_string().unwrap();
        assert_eq!(xml_string, "<root/>");
    }

    #[test]
    fn test_xml_with_attributes() {
        let element = Element::new("root").add_attribute(Attribute::new("attr1", "value1"));

        let builder = Builder::new(None, element);
        let xml_string = builder.to_xml_string().unwrap();
        assert_eq!(xml_string, r#"<root attr1="value1"/>"#);
    }

    #[test]
    fn test_xml_with_namespaces() {
        let element = Element::new("Envelope")
            .set_namespace(Namespace::new(SOAP_NS))
            .add_namespace_declaration(SOAP_NS, Some("soap"));

        let builder = Builder::new(None, element);
        let xml_string = builder.to_xml_string().unwrap();
        assert_eq!(
            xml_string,
            r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"/>"#
        );
    }

    #[test]
    fn test_envelope_shape() {
        let request = Element::new("IMachine_getName")
            .set_namespace(Namespace::new(VBOX_NS))
            .add_namespace_declaration(VBOX_NS, None)
            .add_child(Element::new("_this").set_text("m-1"));
        let body = Element::new("Body")
            .set_namespace(Namespace::new(SOAP_NS))
            .add_child(request);
        let envelope = Element::new("Envelope")
            .set_namespace(Namespace::new(SOAP_NS))
            .add_namespace_declaration(SOAP_NS, Some("soap"))
            .add_child(body);

        let builder = Builder::new(Some(Declaration::new("1.0", "UTF-8")), envelope);
        let xml_string = builder.to_xml_string().unwrap();
        assert_eq!(
            xml_string,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#,
                r#"<soap:Body><IMachine_getName xmlns="http://www.virtualbox.org/">"#,
                "<_this>m-1</_this></IMachine_getName></soap:Body></soap:Envelope>"
            )
        );
    }

    #[test]
    fn test_declarations_keep_insertion_order() {
        let element = Element::new("root")
            .add_namespace_declaration("http://example.com/ns1", Some("ns1"))
            .add_namespace_declaration("http://example.com/ns2", Some("ns2"))
            .add_namespace_declaration("http://example.com/default", None);

        let builder = Builder::new(None, element);
        let xml_string = builder.to_xml_string().unwrap();
        assert_eq!(
            xml_string,
            r#"<root xmlns:ns1="http://example.com/ns1" xmlns:ns2="http://example.com/ns2" xmlns="http://example.com/default"/>"#
        );
    }

    #[test]
    fn test_undeclared_namespace_is_an_error() {
        let element = Element::new("root").set_namespace(Namespace::new("http://example.com/ns1"));

        let builder = Builder::new(None, element);
        let err = builder.to_xml_string().unwrap_err();
        assert!(matches!(err, XmlBuilderError::NamespaceNotDeclared { .. }));
    }

    #[test]
    fn test_namespace_override_in_child() {
        let child = Element::new("child")
            .set_namespace(Namespace::new("http://example.com/ns1"))
            .add_namespace_declaration("http://example.com/ns1", Some("override"));

        let root = Element::new("root")
            .set_namespace(Namespace::new("http://example.com/ns1"))
            .add_namespace_declaration("http://example.com/ns1", Some("ns1"))
            .add_child(child);

        let builder = Builder::new(None, root);
        let xml_string = builder.to_xml_string().unwrap();
        assert_eq!(
            xml_string,
            r#"<ns1:root xmlns:ns1="http://example.com/ns1"><override:child xmlns:override="http://example.com/ns1"/></ns1:root>"#
        );
    }

    #[test]
    fn test_attribute_with_namespace() {
        let ns = Namespace::new("http://example.com");
        let attr = Attribute::new_with_namespace("attr", "value", Some(ns));
        let element = Element::new("test")
            .add_attribute(attr)
            .add_namespace_declaration("http://example.com", Some("ex"));

        let builder = Builder::new(None, element);
        let xml_string = builder.to_xml_string().unwrap();
        assert_eq!(
            xml_string,
            r#"<test xmlns:ex="http://example.com" ex:attr="value"/>"#
        );
    }

    #[test]
    fn test_attribute_in_default_namespace_is_rejected() {
        let attr = Attribute::new("attr", "value").set_namespace("http://example.com");
        let element = Element::new("test")
            .add_attribute(attr)
            .add_namespace_declaration("http://example.com", None);

        let err = Builder::new(None, element).to_xml_string().unwrap_err();
        assert!(matches!(err, XmlBuilderError::NamespaceHasNoAlias { .. }));
    }

    #[test]
    fn test_adding_child_overwrites_text() {
        let element = Element::new("container")
            .set_text("Initial text")
            .add_child(Element::new("item"));

        let builder = Builder::new(None, element);
        assert_eq!(
            builder.to_xml_string().unwrap(),
            "<container><item/></container>"
        );
    }

    #[test]
    fn test_setting_text_overwrites_children() {
        let element = Element::new("container")
            .add_child(Element::new("item"))
            .set_text("New text");

        let builder = Builder::new(None, element);
        assert_eq!(
            builder.to_xml_string().unwrap(),
            "<container>New text</container>"
        );
    }

    #[test]
    fn test_element_add_children_bulk() {
        let children = vec![
            Element::new("returnval").set_text("a"),
            Element::new("returnval").set_text("b"),
            Element::new("returnval"),
        ];
        let element = Element::new("root").add_children(children);

        let builder = Builder::new(None, element);
        assert_eq!(
            builder.to_xml_string().unwrap(),
            "<root><returnval>a</returnval><returnval>b</returnval><returnval/></root>"
        );
    }

    #[test]
    fn test_with_text_mutable() {
        let mut element = Element::new("test");
        element.with_text(String::from("owned"));
        assert_eq!(element.text(), Some("owned"));
        assert!(element.children().is_empty());
    }

    #[test]
    fn test_special_characters_in_text() {
        let element = Element::new("test").set_text("Text with <>&\"' characters");
        let builder = Builder::new(None, element);
        let xml_string = builder.to_xml_string().unwrap();
        assert_eq!(
            xml_string,
            "<test>Text with &lt;&gt;&amp;&quot;&apos; characters</test>"
        );
    }

    #[test]
    fn test_special_characters_in_attributes() {
        let attr = Attribute::new("name", "a<b & \"c\"");
        let element = Element::new("test").add_attribute(attr);
        let builder = Builder::new(None, element);
        let xml_string = builder.to_xml_string().unwrap();
        assert_eq!(
            xml_string,
            r#"<test name="a&lt;b &amp; &quot;c&quot;"/>"#
        );
    }

    #[test]
    fn test_escape_borrows_plain_text() {
        assert!(matches!(escape("MyVM"), Cow::Borrowed("MyVM")));
        assert_eq!(escape("R&D"), "R&amp;D");
    }

    #[test]
    fn test_unicode_content() {
        let element = Element::new("test").set_text("Hello 世界 🌍");
        let builder = Builder::new(None, element);
        assert_eq!(builder.to_xml_string().unwrap(), "<test>Hello 世界 🌍</test>");
    }

    #[test]
    fn test_declaration_with_standalone() {
        let declaration = Declaration::new("1.0", "UTF-8").with_standalone(true);
        assert_eq!(
            declaration.to_string(),
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
        );
        let declaration = Declaration::new("1.0", "UTF-8").with_standalone(false);
        assert_eq!(
            declaration.to_string(),
            r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
        );
    }

    #[test]
    fn test_namespace_hash() {
        let mut map = HashMap::new();
        map.insert(Namespace::new(VBOX_NS), "value1");
        assert_eq!(map.get(&Namespace::from(VBOX_NS)), Some(&"value1"));
        assert_eq!(Namespace::new(VBOX_NS).to_string(), VBOX_NS);
    }
}
