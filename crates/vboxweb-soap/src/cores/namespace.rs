pub const SOAP_ENVELOPE_NAMESPACE_URI: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const SOAP_ENVELOPE_NAMESPACE_ALIAS: &str = "soap";

/// Payload namespace. Declared as the default namespace on the payload root,
/// so members are written unprefixed.
pub const VBOX_NAMESPACE_URI: &str = "http://www.virtualbox.org/";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Namespace {
    SoapEnvelope,
    VirtualBox,
}

impl Namespace {
    pub fn as_tuple(self) -> (&'static str, Option<&'static str>) {
        match self {
            Self::SoapEnvelope => (
                SOAP_ENVELOPE_NAMESPACE_URI,
                Some(SOAP_ENVELOPE_NAMESPACE_ALIAS),
            ),
            Self::VirtualBox => (VBOX_NAMESPACE_URI, None),
        }
    }

    pub fn url(self) -> &'static str {
        self.as_tuple().0
    }

    pub fn alias(self) -> Option<&'static str> {
        self.as_tuple().1
    }
}

impl TryFrom<&str> for Namespace {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            SOAP_ENVELOPE_NAMESPACE_URI => Ok(Self::SoapEnvelope),
            VBOX_NAMESPACE_URI => Ok(Self::VirtualBox),
            _ => Err("Unknown namespace"),
        }
    }
}

/// The `xmlns` declarations carried by one tag.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct NamespaceDeclaration(Vec<Namespace>);

impl NamespaceDeclaration {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, namespace: Namespace) {
        if !self.0.contains(&namespace) {
            self.0.push(namespace);
        }
    }

    pub fn namespaces(&self) -> &[Namespace] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for NamespaceDeclaration {
    type Item = Namespace;
    type IntoIter = std::vec::IntoIter<Namespace>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_lookup() {
        assert_eq!(
            Namespace::try_from(VBOX_NAMESPACE_URI),
            Ok(Namespace::VirtualBox)
        );
        assert_eq!(Namespace::SoapEnvelope.alias(), Some("soap"));
        assert!(Namespace::try_from("urn:other").is_err());
    }

    #[test]
    fn declarations_are_deduplicated() {
        let mut declaration = NamespaceDeclaration::new();
        declaration.push(Namespace::SoapEnvelope);
        declaration.push(Namespace::SoapEnvelope);
        assert_eq!(declaration.namespaces(), &[Namespace::SoapEnvelope]);
    }
}
