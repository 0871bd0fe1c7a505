use vboxweb_xml::builder::Element;

pub use vboxweb_xml::scalar::{ScalarVisitor, WireScalar};

pub trait TagValue<'a> {
    fn append_to_element(self, element: Element<'a>) -> Element<'a>;
}

impl<'a> TagValue<'a> for () {
    fn append_to_element(self, element: Element<'a>) -> Element<'a> {
        element
    }
}

impl<'a> TagValue<'a> for String {
    fn append_to_element(self, element: Element<'a>) -> Element<'a> {
        element.set_text(self)
    }
}

impl<'a> TagValue<'a> for &'a str {
    fn append_to_element(self, element: Element<'a>) -> Element<'a> {
        element.set_text(self)
    }
}

impl<'a> TagValue<'a> for bool {
    fn append_to_element(self, element: Element<'a>) -> Element<'a> {
        element.set_text(if self { "true" } else { "false" })
    }
}

macro_rules! xml_num_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> TagValue<'a> for $ty {
                fn append_to_element(self, element: Element<'a>) -> Element<'a> {
                    element.set_text(self.to_string())
                }
            }
        )*
    };
}

xml_num_value!(i16, i32, i64, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_write_text() {
        let element = 42_u32.append_to_element(Element::new("memorySize"));
        assert_eq!(element.text(), Some("42"));
        let element = true.append_to_element(Element::new("flag"));
        assert_eq!(element.text(), Some("true"));
        let element = "MyVM".append_to_element(Element::new("name"));
        assert_eq!(element.text(), Some("MyVM"));
    }
}
