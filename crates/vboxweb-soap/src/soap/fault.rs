use tracing::trace;
use vboxweb_macros::{SimpleTagValue, SimpleXmlDeserialize};
use vboxweb_xml::XmlError;
use vboxweb_xml::builder::Element;
use vboxweb_xml::parser::{Node, XmlDeserialize, XmlVisitor};

use crate::WireStruct;
use crate::cores::*;

/// A SOAP 1.1 fault, as returned by the web service for every failed call.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    typed_builder::TypedBuilder,
    SimpleTagValue,
    SimpleXmlDeserialize,
)]
pub struct SoapFault {
    #[builder(default, setter(into, strip_option))]
    pub faultcode: Option<Tag<String, FaultCode>>,
    #[builder(default, setter(into, strip_option))]
    pub faultstring: Option<Tag<String, FaultString>>,
    #[builder(default, setter(into, strip_option))]
    pub faultactor: Option<Tag<String, FaultActor>>,
    #[builder(default, setter(into, strip_option))]
    pub detail: Option<Tag<FaultDetail, Detail>>,
}

impl SoapFault {
    pub fn fault_code(&self) -> Option<&str> {
        self.faultcode.as_ref().map(|tag| tag.value.as_str())
    }

    pub fn fault_string(&self) -> Option<&str> {
        self.faultstring.as_ref().map(|tag| tag.value.as_str())
    }

    pub fn fault_actor(&self) -> Option<&str> {
        self.faultactor.as_ref().map(|tag| tag.value.as_str())
    }

    pub fn detail(&self) -> Option<&FaultDetail> {
        self.detail.as_ref().map(|tag| &tag.value)
    }

    /// The COM result code, when the detail is a `RuntimeFault`.
    pub fn result_code(&self) -> Option<i32> {
        match self.detail()? {
            FaultDetail::RuntimeFault(fault) => Some(fault.result_code),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoapFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.fault_string().unwrap_or_default())
    }
}

impl std::error::Error for SoapFault {}

/// Typed content of the fault `detail` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultDetail {
    RuntimeFault(RuntimeFault),
    InvalidObjectFault(InvalidObjectFault),
    /// Any other detail, kept as its text.
    Other(String),
}

impl Default for FaultDetail {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// A failed COM call on the server side.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(default)]
pub struct RuntimeFault {
    pub result_code: i32,
    pub returnval: String,
}

/// A managed object reference the server does not know (anymore).
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(default)]
pub struct InvalidObjectFault {
    #[wire(rename = "badObjectID")]
    pub bad_object_id: String,
}

fn vbox_element<'a>(name: &'a str) -> Element<'a> {
    Element::new(name)
        .set_namespace(VBOX_NAMESPACE_URI)
        .add_namespace_declaration(VBOX_NAMESPACE_URI, Some("vbox"))
}

impl<'a> TagValue<'a> for FaultDetail {
    fn append_to_element(self, element: Element<'a>) -> Element<'a> {
        match self {
            Self::RuntimeFault(fault) => {
                element.add_child(fault.append_to_element(vbox_element("RuntimeFault")))
            }
            Self::InvalidObjectFault(fault) => {
                element.add_child(fault.append_to_element(vbox_element("InvalidObjectFault")))
            }
            Self::Other(text) => element.set_text(text),
        }
    }
}

#[derive(Default)]
pub struct FaultDetailVisitor {
    detail: Option<FaultDetail>,
}

impl<'a> XmlVisitor<'a> for FaultDetailVisitor {
    type Value = FaultDetail;

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        let children: Vec<_> = children.collect();

        let detail = match children.iter().find(|child| child.is_element()) {
            Some(child) if child.tag_name().name() == "RuntimeFault" => {
                FaultDetail::RuntimeFault(RuntimeFault::from_node(*child)?)
            }
            Some(child) if child.tag_name().name() == "InvalidObjectFault" => {
                FaultDetail::InvalidObjectFault(InvalidObjectFault::from_node(*child)?)
            }
            _ => {
                let text: String = children
                    .iter()
                    .flat_map(Node::descendants)
                    .filter(Node::is_text)
                    .filter_map(|node| node.text())
                    .collect();
                FaultDetail::Other(text.trim().to_owned())
            }
        };

        trace!(?detail, "decoded fault detail");
        self.detail = Some(detail);
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        Ok(self.detail.unwrap_or_default())
    }
}

impl<'a> XmlDeserialize<'a> for FaultDetail {
    type Visitor = FaultDetailVisitor;

    fn visitor() -> Self::Visitor {
        FaultDetailVisitor::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;
    use vboxweb_xml::builder::Builder;
    use vboxweb_xml::parser::parse;

    const RUNTIME_FAULT: &str = r#"<SOAP-ENV:Fault xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:vbox="http://www.virtualbox.org/">
        <faultcode>SOAP-ENV:Client</faultcode>
        <faultstring>VirtualBox error: Could not find a registered machine named 'nope' (0x80BB0001)</faultstring>
        <detail>
            <vbox:RuntimeFault>
                <resultCode>-2135228415</resultCode>
                <returnval>c1d6a9b8-0000-4000-8000-000000000001</returnval>
            </vbox:RuntimeFault>
        </detail>
    </SOAP-ENV:Fault>"#;

    #[test]
    fn decodes_runtime_fault() {
        let doc = parse(RUNTIME_FAULT).unwrap();
        let fault = SoapFault::from_node(doc.root_element()).unwrap();

        assert_eq!(fault.fault_code(), Some("SOAP-ENV:Client"));
        assert_eq!(
            fault.to_string(),
            "VirtualBox error: Could not find a registered machine named 'nope' (0x80BB0001)"
        );
        assert_eq!(fault.result_code(), Some(-2_135_228_415));
        assert!(fault.fault_actor().is_none());
    }

    #[test]
    fn decodes_invalid_object_fault() {
        let xml = r#"<Fault><faultcode>SOAP-ENV:Client</faultcode><faultstring>Invalid managed object reference "a1b2"</faultstring><detail><vbox:InvalidObjectFault xmlns:vbox="http://www.virtualbox.org/"><badObjectID>a1b2</badObjectID></vbox:InvalidObjectFault></detail></Fault>"#;
        let doc = parse(xml).unwrap();
        let fault = SoapFault::from_node(doc.root_element()).unwrap();

        assert_eq!(
            fault.detail(),
            Some(&FaultDetail::InvalidObjectFault(InvalidObjectFault {
                bad_object_id: "a1b2".to_owned()
            }))
        );
        assert_eq!(fault.result_code(), None);
    }

    #[test]
    fn unknown_detail_keeps_text() {
        let xml = "<Fault><faultstring>x</faultstring><detail> <other>some text</other> </detail></Fault>";
        let doc = parse(xml).unwrap();
        let fault = SoapFault::from_node(doc.root_element()).unwrap();
        assert_eq!(
            fault.detail(),
            Some(&FaultDetail::Other("some text".to_owned()))
        );
    }

    #[test]
    #[traced_test]
    fn unknown_fault_member_keeps_the_fault() {
        let xml = "<Fault><faultcode>SOAP-ENV:Client</faultcode><extra>x</extra><faultstring>bad ref</faultstring></Fault>";
        let doc = parse(xml).unwrap();
        let fault = SoapFault::from_node(doc.root_element()).unwrap();

        assert_eq!(fault.to_string(), "bad ref");
        assert_eq!(fault.fault_code(), Some("SOAP-ENV:Client"));
        assert!(logs_contain("ignoring unknown element"));
    }

    #[test]
    fn builder_and_encoding() {
        let fault = SoapFault::builder()
            .faultcode("SOAP-ENV:Server".to_owned())
            .faultstring("boom".to_owned())
            .detail(FaultDetail::RuntimeFault(RuntimeFault {
                result_code: -1,
                returnval: String::new(),
            }))
            .build();

        let element = Tag::<SoapFault, Fault>::new(fault)
            .with_declaration(Namespace::SoapEnvelope)
            .into_element();
        let xml = Builder::new(None, element).to_xml_string().unwrap();

        assert_eq!(
            xml,
            concat!(
                r#"<soap:Fault xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#,
                "<faultcode>SOAP-ENV:Server</faultcode><faultstring>boom</faultstring>",
                r#"<detail><vbox:RuntimeFault xmlns:vbox="http://www.virtualbox.org/">"#,
                "<resultCode>-1</resultCode><returnval></returnval></vbox:RuntimeFault></detail>",
                "</soap:Fault>"
            )
        );
    }
}
