use crate::XmlError;
use crate::parser::{Node, XmlDeserialize, XmlVisitor, collect_text};

/// A value carried as the text content of one element.
pub trait WireScalar: Sized {
    fn from_wire(text: &str) -> Result<Self, String>;
}

/// Decodes any [`WireScalar`] from the text content of a node.
pub struct ScalarVisitor<T> {
    value: Option<T>,
    tag: Option<String>,
}

impl<T> ScalarVisitor<T> {
    pub fn new() -> Self {
        Self {
            value: None,
            tag: None,
        }
    }
}

impl<T> Default for ScalarVisitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: WireScalar> XmlVisitor<'a> for ScalarVisitor<T> {
    type Value = T;

    fn visit_node(&mut self, node: Node<'a, 'a>) -> Result<(), XmlError> {
        self.tag = Some(node.tag_name().name().to_owned());
        self.visit_children(node.children())
    }

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        let tag = self.tag.as_deref().unwrap_or("scalar");
        let text = collect_text(tag, children)?;
        let value = T::from_wire(&text).map_err(|reason| XmlError::InvalidValue {
            tag: tag.to_owned(),
            reason,
        })?;
        self.value = Some(value);
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        self.value
            .ok_or_else(|| XmlError::InvalidXml("No value found in the node".to_string()))
    }
}

impl WireScalar for String {
    fn from_wire(text: &str) -> Result<Self, String> {
        Ok(text.to_owned())
    }
}

impl WireScalar for bool {
    fn from_wire(text: &str) -> Result<Self, String> {
        match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(format!("'{other}' is not a boolean")),
        }
    }
}

macro_rules! wire_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WireScalar for $ty {
                fn from_wire(text: &str) -> Result<Self, String> {
                    text.trim().parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

wire_number!(i16, i32, i64, u16, u32, u64);

macro_rules! scalar_deserialize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> XmlDeserialize<'a> for $ty {
                type Visitor = ScalarVisitor<Self>;

                fn visitor() -> Self::Visitor {
                    ScalarVisitor::new()
                }
            }
        )*
    };
}

scalar_deserialize!(String, bool, i16, i32, i64, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn decode<T: for<'a> XmlDeserialize<'a>>(xml: &str) -> Result<T, XmlError> {
        let doc = parse(xml)?;
        T::from_node(doc.root_element())
    }

    #[test]
    fn string_keeps_whitespace_and_entities() {
        assert_eq!(decode::<String>("<v> a &amp; b </v>").unwrap(), " a & b ");
        assert_eq!(decode::<String>("<v/>").unwrap(), "");
    }

    #[test]
    fn string_rejects_element_content() {
        assert!(matches!(
            decode::<String>("<v><x/></v>"),
            Err(XmlError::InvalidValue { .. })
        ));
    }

    #[test]
    fn booleans_accept_both_lexical_forms() {
        assert!(decode::<bool>("<v>true</v>").unwrap());
        assert!(decode::<bool>("<v>1</v>").unwrap());
        assert!(!decode::<bool>("<v> false </v>").unwrap());
        assert!(!decode::<bool>("<v>0</v>").unwrap());
        assert!(decode::<bool>("<v>yes</v>").is_err());
    }

    #[test]
    fn integers_are_decimal() {
        assert_eq!(decode::<i32>("<v>-2135228409</v>").unwrap(), -2_135_228_409);
        assert_eq!(decode::<u32>("<v> 2048 </v>").unwrap(), 2048);
        assert_eq!(decode::<i64>("<v>1700000000000</v>").unwrap(), 1_700_000_000_000);
        let err = decode::<u32>("<v>-1</v>").unwrap_err();
        match err {
            XmlError::InvalidValue { tag, .. } => assert_eq!(tag, "v"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
