use std::marker::PhantomData;

use tracing::trace;
use vboxweb_xml::XmlError;
use vboxweb_xml::builder::Element;
use vboxweb_xml::parser::{Node, XmlDeserialize, XmlVisitor};

use crate::cores::namespace::{Namespace, NamespaceDeclaration};

use super::tag_name::TagName;
use super::tag_value::TagValue;

/// A value `V` wrapped in the element named by `N`.
#[derive(Debug, Clone)]
pub struct Tag<V, N> {
    pub value: V,
    /// The namespaces declared on this tag, for example
    /// `<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">`.
    pub namespaces_declaration: NamespaceDeclaration,

    __phantom_name: PhantomData<N>,
}

impl<V, N> Tag<V, N>
where
    N: TagName,
{
    pub fn new(value: impl Into<V>) -> Self {
        Self {
            value: value.into(),
            namespaces_declaration: NamespaceDeclaration::new(),
            __phantom_name: PhantomData,
        }
    }

    /// Does not do anything, just returns self.
    /// This is useful for compiler to infer the type of `N` when using `Tag::new`.
    pub fn with_name(self, _name: N) -> Self {
        self
    }

    pub fn with_declaration(mut self, declaration: Namespace) -> Self {
        self.namespaces_declaration.push(declaration);
        self
    }

    pub fn into_element<'a>(self) -> Element<'a>
    where
        V: TagValue<'a>,
    {
        let mut element = Element::new(N::TAG_NAME);
        if let Some(ns) = N::NAMESPACE {
            element = element.set_namespace(ns);
        }

        for namespace in self.namespaces_declaration {
            let (url, alias) = namespace.as_tuple();
            element = element.add_namespace_declaration(url, alias);
        }

        self.value.append_to_element(element)
    }

    pub fn name(&self) -> &'static str {
        N::TAG_NAME
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V: PartialEq, N> PartialEq for Tag<V, N> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq, N> Eq for Tag<V, N> {}

impl<V, N: TagName> From<V> for Tag<V, N> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V, N> AsRef<V> for Tag<V, N> {
    fn as_ref(&self) -> &V {
        &self.value
    }
}

impl<'a, V, N> From<Tag<V, N>> for Element<'a>
where
    V: TagValue<'a>,
    N: TagName,
{
    fn from(val: Tag<V, N>) -> Self {
        val.into_element()
    }
}

impl<'a, V, N> TagValue<'a> for Tag<V, N>
where
    V: TagValue<'a>,
    N: TagName,
{
    fn append_to_element(self, element: Element<'a>) -> Element<'a> {
        element.add_child(self.into_element())
    }
}

/// Checks the local name and, when both sides carry one, the namespace.
pub fn expect_tag<N: TagName>(node: Node<'_, '_>) -> Result<(), XmlError> {
    let tag_name = node.tag_name();

    if !node.is_element() || tag_name.name() != N::TAG_NAME {
        return Err(XmlError::XmlInvalidTag {
            expected: N::TAG_NAME.to_owned(),
            found: tag_name.name().to_owned(),
        });
    }

    if let (Some(expected), Some(found)) = (N::NAMESPACE, tag_name.namespace())
        && expected != found
    {
        return Err(XmlError::XmlInvalidNamespace {
            expected: expected.to_owned(),
            found: Some(found.to_owned()),
        });
    }

    Ok(())
}

pub struct TagVisitor<V, N> {
    tag: Option<V>,
    __phantom: PhantomData<N>,
}

impl<'a, V, N> XmlVisitor<'a> for TagVisitor<V, N>
where
    V: XmlDeserialize<'a>,
    N: TagName,
{
    type Value = Tag<V, N>;

    fn visit_node(&mut self, node: Node<'a, 'a>) -> Result<(), XmlError> {
        trace!(
            expected_tag_name = N::TAG_NAME,
            actual_tag_name = node.tag_name().name(),
            namespace = ?node.tag_name().namespace(),
            "TagVisitor visiting node",
        );

        expect_tag::<N>(node)?;

        if self.tag.is_some() {
            return Err(XmlError::TagCountInvalid {
                tag: N::TAG_NAME.to_owned(),
                value: 2,
            });
        }

        self.tag = Some(V::from_node(node)?);
        Ok(())
    }

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        for child in children.filter(Node::is_element) {
            self.visit_node(child)?;
        }

        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        self.tag.map(Tag::from).ok_or_else(|| {
            XmlError::InvalidXml(format!(
                "Tag visitor cannot be built for tag: {}",
                N::TAG_NAME
            ))
        })
    }
}

impl<'a, V, N> XmlDeserialize<'a> for Tag<V, N>
where
    V: XmlDeserialize<'a>,
    N: TagName,
{
    type Visitor = TagVisitor<V, N>;

    fn visitor() -> Self::Visitor {
        TagVisitor {
            tag: None,
            __phantom: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cores::tag_name::{Body, FaultString};
    use vboxweb_xml::builder::Builder;
    use vboxweb_xml::parser::parse;

    #[test]
    fn tag_writes_name_namespace_and_declarations() {
        let tag: Tag<String, FaultString> = Tag::new("boom".to_owned());
        let xml = Builder::new(None, tag.into_element()).to_xml_string().unwrap();
        assert_eq!(xml, "<faultstring>boom</faultstring>");

        let tag = Tag::<(), Body>::new(()).with_declaration(Namespace::SoapEnvelope);
        let xml = Builder::new(None, tag.into_element()).to_xml_string().unwrap();
        assert_eq!(
            xml,
            r#"<soap:Body xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"/>"#
        );
    }

    #[test]
    fn tag_rejects_other_names() {
        let doc = parse("<faultcode>x</faultcode>").unwrap();
        let result = Tag::<String, FaultString>::from_node(doc.root_element());
        assert!(matches!(result, Err(XmlError::XmlInvalidTag { .. })));
    }

    #[test]
    fn tag_rejects_wrong_namespace() {
        let doc = parse(r#"<Body xmlns="urn:not-soap"/>"#).unwrap();
        let result = expect_tag::<Body>(doc.root_element());
        assert!(matches!(result, Err(XmlError::XmlInvalidNamespace { .. })));
    }

    #[test]
    fn tag_decodes_value() {
        let doc = parse("<faultstring>Invalid managed object reference</faultstring>").unwrap();
        let tag = Tag::<String, FaultString>::from_node(doc.root_element()).unwrap();
        assert_eq!(tag.value, "Invalid managed object reference");
        assert_eq!(tag.name(), "faultstring");
    }
}
