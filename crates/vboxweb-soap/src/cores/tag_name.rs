use crate::cores::namespace::*;
use crate::{define_custom_tagname, define_tagname};

pub trait TagName {
    const TAG_NAME: &'static str;
    const NAMESPACE: Option<&'static str>;

    fn tag_name(&self) -> &'static str {
        Self::TAG_NAME
    }

    fn namespace(&self) -> Option<&'static str> {
        Self::NAMESPACE
    }
}

// =============
// SOAP 1.1 (soap namespace)
// =============
define_tagname!(Envelope, Some(SOAP_ENVELOPE_NAMESPACE_URI));
define_tagname!(Header, Some(SOAP_ENVELOPE_NAMESPACE_URI));
define_tagname!(Body, Some(SOAP_ENVELOPE_NAMESPACE_URI));
define_tagname!(Fault, Some(SOAP_ENVELOPE_NAMESPACE_URI));

// Fault members are unqualified.
define_custom_tagname!(FaultCode, "faultcode", None);
define_custom_tagname!(FaultString, "faultstring", None);
define_custom_tagname!(FaultActor, "faultactor", None);
define_custom_tagname!(Detail, "detail", None);
