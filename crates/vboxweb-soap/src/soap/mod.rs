pub mod fault;

use tracing::{debug, trace};
use vboxweb_xml::XmlError;
use vboxweb_xml::builder::{Builder, Declaration, Element};
use vboxweb_xml::parser::{Node, XmlDeserialize, XmlVisitor};

use crate::cores::{Namespace, Tag, TagName, TagValue, expect_tag, tag_name::*};

pub use fault::{FaultDetail, InvalidObjectFault, RuntimeFault, SoapFault};

/// A SOAP 1.1 envelope around one payload element `C`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapEnvelope<C> {
    pub body: Tag<SoapBody<C>, Body>,
}

/// What a body carries: the expected payload, or a fault instead of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoapBody<C> {
    Content(C),
    Fault(Box<SoapFault>),
}

impl<C> SoapEnvelope<C> {
    pub fn new(content: C) -> Self {
        Self {
            body: Tag::new(SoapBody::Content(content)),
        }
    }

    pub fn fault(fault: SoapFault) -> Self {
        Self {
            body: Tag::new(SoapBody::Fault(Box::new(fault))),
        }
    }

    pub fn body(&self) -> &SoapBody<C> {
        &self.body.value
    }

    pub fn into_result(self) -> Result<C, Box<SoapFault>> {
        match self.body.value {
            SoapBody::Content(content) => Ok(content),
            SoapBody::Fault(fault) => Err(fault),
        }
    }

    pub fn into_element<'a>(self) -> Element<'a>
    where
        C: TagValue<'a> + TagName,
    {
        Tag::<Self, Envelope>::new(self)
            .with_declaration(Namespace::SoapEnvelope)
            .into_element()
    }
}

impl<'a, C> TagValue<'a> for SoapEnvelope<C>
where
    C: TagValue<'a> + TagName,
{
    fn append_to_element(self, element: Element<'a>) -> Element<'a> {
        element.add_child(self.body.into_element())
    }
}

impl<'a, C> TagValue<'a> for SoapBody<C>
where
    C: TagValue<'a> + TagName,
{
    fn append_to_element(self, element: Element<'a>) -> Element<'a> {
        let child = match self {
            // The payload root declares the VirtualBox namespace as default,
            // so its members go out unprefixed.
            Self::Content(content) => Tag::<C, C>::new(content)
                .with_declaration(Namespace::VirtualBox)
                .into_element(),
            Self::Fault(fault) => Tag::<SoapFault, Fault>::new(*fault).into_element(),
        };
        element.add_child(child)
    }
}

pub struct SoapEnvelopeVisitor<C> {
    body: Option<Tag<SoapBody<C>, Body>>,
}

impl<'a, C> XmlVisitor<'a> for SoapEnvelopeVisitor<C>
where
    C: XmlDeserialize<'a> + TagName,
{
    type Value = SoapEnvelope<C>;

    fn visit_node(&mut self, node: Node<'a, 'a>) -> Result<(), XmlError> {
        expect_tag::<Envelope>(node)?;
        if node.tag_name().namespace() != Envelope::NAMESPACE {
            return Err(XmlError::XmlInvalidNamespace {
                expected: Envelope::NAMESPACE.unwrap_or_default().to_owned(),
                found: node.tag_name().namespace().map(str::to_owned),
            });
        }

        self.visit_children(node.children())
    }

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        for child in children.filter(Node::is_element) {
            let name = child.tag_name().name();
            if name == Header::TAG_NAME {
                trace!("ignoring SOAP header");
            } else if name == Body::TAG_NAME {
                if self.body.is_some() {
                    return Err(XmlError::TagCountInvalid {
                        tag: Body::TAG_NAME.to_owned(),
                        value: 2,
                    });
                }
                self.body = Some(Tag::from_node(child)?);
            } else {
                debug!(element = name, "ignoring unexpected envelope member");
            }
        }

        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        Ok(SoapEnvelope {
            body: self
                .body
                .ok_or_else(|| XmlError::InvalidXml("Missing Soap Body".to_string()))?,
        })
    }
}

impl<'a, C> XmlDeserialize<'a> for SoapEnvelope<C>
where
    C: XmlDeserialize<'a> + TagName,
{
    type Visitor = SoapEnvelopeVisitor<C>;

    fn visitor() -> Self::Visitor {
        SoapEnvelopeVisitor { body: None }
    }
}

pub struct SoapBodyVisitor<C> {
    content: Option<SoapBody<C>>,
}

impl<'a, C> XmlVisitor<'a> for SoapBodyVisitor<C>
where
    C: XmlDeserialize<'a> + TagName,
{
    type Value = SoapBody<C>;

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        let elements: Vec<_> = children.filter(Node::is_element).collect();

        let [child] = elements.as_slice() else {
            return Err(XmlError::InvalidXml(format!(
                "SOAP Body must contain exactly one element, found {}",
                elements.len()
            )));
        };

        let name = child.tag_name();
        let content = if name.name() == Fault::TAG_NAME && name.namespace() == Fault::NAMESPACE {
            debug!("SOAP body carries a fault");
            SoapBody::Fault(Box::new(SoapFault::from_node(*child)?))
        } else {
            expect_tag::<C>(*child)?;
            SoapBody::Content(C::from_node(*child)?)
        };

        self.content = Some(content);
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        self.content
            .ok_or_else(|| XmlError::InvalidXml("Missing SOAP body content".to_string()))
    }
}

impl<'a, C> XmlDeserialize<'a> for SoapBody<C>
where
    C: XmlDeserialize<'a> + TagName,
{
    type Visitor = SoapBodyVisitor<C>;

    fn visitor() -> Self::Visitor {
        SoapBodyVisitor { content: None }
    }
}

/// Writes `content` as a complete SOAP request document.
pub fn encode_envelope<C>(content: C) -> Result<String, XmlError>
where
    C: for<'a> TagValue<'a> + TagName,
{
    let element = SoapEnvelope::new(content).into_element();
    let xml = Builder::new(Some(Declaration::new("1.0", "UTF-8")), element).to_xml_string()?;
    Ok(xml)
}

/// Parses a complete SOAP response document.
pub fn decode_envelope<C>(xml: &str) -> Result<SoapEnvelope<C>, XmlError>
where
    C: for<'a> XmlDeserialize<'a> + TagName,
{
    let document = vboxweb_xml::parser::parse(xml)?;
    SoapEnvelope::from_node(document.root_element())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WireStruct;
    use tracing_test::traced_test;

    #[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
    #[wire(element = "IMachine_getName")]
    pub struct GetName {
        #[wire(rename = "_this")]
        pub this: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
    #[wire(element = "IMachine_getNameResponse", default)]
    pub struct GetNameResponse {
        pub returnval: String,
    }

    const SOAP: &str = "http://schemas.xmlsoap.org/soap/envelope/";

    fn envelope(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><SOAP-ENV:Envelope xmlns:SOAP-ENV="{SOAP}" xmlns:vbox="http://www.virtualbox.org/"><SOAP-ENV:Body>{body}</SOAP-ENV:Body></SOAP-ENV:Envelope>"#
        )
    }

    #[test]
    fn encodes_request_envelope() {
        let xml = encode_envelope(GetName {
            this: "ref-123".to_owned(),
        })
        .unwrap();

        assert_eq!(
            xml,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#,
                r#"<soap:Body><IMachine_getName xmlns="http://www.virtualbox.org/">"#,
                "<_this>ref-123</_this></IMachine_getName></soap:Body></soap:Envelope>"
            )
        );
    }

    #[test]
    fn decodes_content() {
        let xml = envelope(
            "<vbox:IMachine_getNameResponse><returnval>MyVM</returnval></vbox:IMachine_getNameResponse>",
        );
        let envelope = decode_envelope::<GetNameResponse>(&xml).unwrap();
        assert_eq!(
            envelope.into_result().unwrap(),
            GetNameResponse {
                returnval: "MyVM".to_owned()
            }
        );
    }

    #[test]
    fn decodes_unqualified_content() {
        let xml = envelope(
            "<IMachine_getNameResponse><returnval>MyVM</returnval></IMachine_getNameResponse>",
        );
        let response = decode_envelope::<GetNameResponse>(&xml)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(response.returnval, "MyVM");
    }

    #[test]
    fn decodes_fault_instead_of_content() {
        let xml = envelope(
            "<SOAP-ENV:Fault><faultcode>SOAP-ENV:Client</faultcode><faultstring>Invalid managed object reference</faultstring></SOAP-ENV:Fault>",
        );
        let envelope = decode_envelope::<GetNameResponse>(&xml).unwrap();
        let fault = envelope.into_result().unwrap_err();
        assert_eq!(fault.to_string(), "Invalid managed object reference");
    }

    #[test]
    fn rejects_two_body_elements() {
        let xml = envelope(
            "<IMachine_getNameResponse><returnval>a</returnval></IMachine_getNameResponse><IMachine_getNameResponse><returnval>b</returnval></IMachine_getNameResponse>",
        );
        let err = decode_envelope::<GetNameResponse>(&xml).unwrap_err();
        assert!(err.to_string().contains("exactly one element"), "{err}");
    }

    #[test]
    fn rejects_empty_body() {
        let xml = envelope("");
        assert!(decode_envelope::<GetNameResponse>(&xml).is_err());
    }

    #[test]
    fn rejects_unexpected_response_element() {
        let xml = envelope("<IMachine_getIdResponse><returnval>x</returnval></IMachine_getIdResponse>");
        let err = decode_envelope::<GetNameResponse>(&xml).unwrap_err();
        assert!(matches!(err, XmlError::XmlInvalidTag { .. }));
    }

    #[test]
    fn rejects_non_soap_root() {
        let xml = "<Envelope><Body><IMachine_getNameResponse/></Body></Envelope>";
        let err = decode_envelope::<GetNameResponse>(xml).unwrap_err();
        assert!(matches!(err, XmlError::XmlInvalidNamespace { .. }));
    }

    #[test]
    fn missing_response_member_decodes_to_default() {
        let xml = envelope("<vbox:IMachine_getNameResponse/>");
        let response = decode_envelope::<GetNameResponse>(&xml)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(response, GetNameResponse::default());
    }

    #[test]
    fn missing_member_without_default_is_an_error() {
        let xml = envelope("<IMachine_getName/>");
        let err = decode_envelope::<GetName>(&xml).unwrap_err();
        assert!(err.to_string().contains("Missing _this"), "{err}");
    }

    #[test]
    #[traced_test]
    fn header_and_unknown_members_are_ignored() {
        let xml = format!(
            r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="{SOAP}"><SOAP-ENV:Header><x/></SOAP-ENV:Header><SOAP-ENV:Body><IMachine_getNameResponse><returnval>MyVM</returnval><addedLater>1</addedLater></IMachine_getNameResponse></SOAP-ENV:Body></SOAP-ENV:Envelope>"#
        );
        let response = decode_envelope::<GetNameResponse>(&xml)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(response.returnval, "MyVM");
        assert!(logs_contain("ignoring unknown element"));
    }

    #[test]
    fn round_trip_through_fault_encoding() {
        let fault = SoapFault::builder()
            .faultcode("SOAP-ENV:Server".to_owned())
            .faultstring("boom".to_owned())
            .build();
        let element = SoapEnvelope::<GetNameResponse>::fault(fault.clone()).into_element();
        let xml = Builder::new(None, element).to_xml_string().unwrap();

        let decoded = decode_envelope::<GetNameResponse>(&xml).unwrap();
        assert_eq!(decoded.body(), &SoapBody::Fault(Box::new(fault)));
    }
}
