use vboxweb_soap::soap::SoapFault;
use vboxweb_xml::XmlError;

#[derive(Debug, thiserror::Error)]
pub enum VboxWebError {
    /// Connecting, the TLS handshake, or a timeout failed.
    #[error("transport error: {0}")]
    Transport(Box<ureq::Error>),

    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// The server answered with a SOAP fault.
    #[error("{0}")]
    Fault(Box<SoapFault>),

    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),
}

impl VboxWebError {
    pub fn as_fault(&self) -> Option<&SoapFault> {
        match self {
            Self::Fault(fault) => Some(&**fault),
            _ => None,
        }
    }
}

impl From<ureq::Error> for VboxWebError {
    fn from(error: ureq::Error) -> Self {
        Self::Transport(Box::new(error))
    }
}
