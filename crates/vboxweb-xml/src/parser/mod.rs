pub use roxmltree::*;

use crate::XmlError;

pub fn parse(xml: &str) -> Result<Document<'_>, roxmltree::Error> {
    roxmltree::Document::parse(xml)
}

/// Accumulates a value while walking a node and its children.
///
/// `visit_node` is called with the element that carries the value; the default
/// implementation hands its children to `visit_children`.
pub trait XmlVisitor<'a> {
    type Value;

    fn visit_node(&mut self, node: Node<'a, 'a>) -> Result<(), XmlError> {
        self.visit_children(node.children())
    }

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), XmlError>;

    fn finish(self) -> Result<Self::Value, XmlError>;
}

pub trait XmlDeserialize<'a>: Sized {
    type Visitor: XmlVisitor<'a, Value = Self>;

    fn visitor() -> Self::Visitor;

    fn from_node(node: Node<'a, 'a>) -> Result<Self, XmlError> {
        NodeDeserializer::new(node).deserialize(Self::visitor())
    }

    fn from_children(children: impl Iterator<Item = Node<'a, 'a>>) -> Result<Self, XmlError> {
        let mut visitor = Self::visitor();
        visitor.visit_children(children)?;
        visitor.finish()
    }
}

pub struct NodeDeserializer<'a> {
    root: Node<'a, 'a>,
}

impl<'a> NodeDeserializer<'a> {
    pub fn new(root: Node<'a, 'a>) -> Self {
        Self { root }
    }

    /// Drive any visitor over the subtree rooted at `self.root`
    pub fn deserialize<V>(self, mut visitor: V) -> Result<V::Value, XmlError>
    where
        V: XmlVisitor<'a>,
    {
        visitor.visit_node(self.root)?;
        visitor.finish()
    }
}

/// Concatenated text of the direct text children of `node`.
pub fn text_content(node: Node<'_, '_>) -> Result<String, XmlError> {
    collect_text(node.tag_name().name(), node.children())
}

/// Concatenates text nodes, skipping comments and processing instructions.
///
/// Fails on an element child, so a scalar never silently swallows
/// structured content. `tag` only names the owner in the error.
pub fn collect_text<'a>(
    tag: &str,
    children: impl Iterator<Item = Node<'a, 'a>>,
) -> Result<String, XmlError> {
    let mut text = String::new();
    for child in children {
        if child.is_element() {
            return Err(XmlError::InvalidValue {
                tag: tag.to_owned(),
                reason: format!(
                    "expected text content, found element '{}'",
                    child.tag_name().name()
                ),
            });
        }
        if child.is_text()
            && let Some(t) = child.text()
        {
            text.push_str(t);
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountVisitor(usize);

    impl<'a> XmlVisitor<'a> for CountVisitor {
        type Value = usize;

        fn visit_children(
            &mut self,
            children: impl Iterator<Item = Node<'a, 'a>>,
        ) -> Result<(), XmlError> {
            self.0 += children.filter(Node::is_element).count();
            Ok(())
        }

        fn finish(self) -> Result<Self::Value, XmlError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_node_deserializer_visits_children() {
        let doc = parse("<r><a/><b/>text<c/></r>").unwrap();
        let count = NodeDeserializer::new(doc.root_element())
            .deserialize(CountVisitor(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_text_content_concatenates_and_decodes() {
        let doc = parse("<r>a &amp; <!-- c -->b</r>").unwrap();
        assert_eq!(text_content(doc.root_element()).unwrap(), "a & b");
    }

    #[test]
    fn test_text_content_rejects_elements() {
        let doc = parse("<r>a<x/></r>").unwrap();
        assert!(matches!(
            text_content(doc.root_element()),
            Err(XmlError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(parse("<r>").is_err());
    }
}
