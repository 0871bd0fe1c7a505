//! Blocking client for the VirtualBox web service (`vboxwebsrv`).
//!
//! [`SoapClient`] moves one typed request per HTTP POST and decodes the typed
//! response or the SOAP fault. [`VboxPortType`] wraps it with one method per
//! remote operation:
//!
//! ```no_run
//! use vboxweb_api::ops::{IVirtualBoxGetVersion, IWebsessionManagerLogoff, IWebsessionManagerLogon};
//! use vboxweb_client::{SoapClient, VboxPortType};
//!
//! let client = SoapClient::new("http://127.0.0.1:18083/", false, None)?;
//! let port = VboxPortType::new(client);
//!
//! let vbox = port
//!     .websession_manager_logon(IWebsessionManagerLogon {
//!         username: "admin".to_owned(),
//!         password: "secret".to_owned(),
//!     })?
//!     .returnval;
//! let version = port.virtualbox_get_version(IVirtualBoxGetVersion { this: vbox.clone() })?;
//! println!("VirtualBox {}", version.returnval);
//! port.websession_manager_logoff(IWebsessionManagerLogoff {
//!     ref_i_virtual_box: vbox,
//! })?;
//! # Ok::<(), vboxweb_client::VboxWebError>(())
//! ```

mod auth;
mod client;
mod config;
mod error;
mod port;

pub use auth::BasicAuth;
pub use client::SoapClient;
pub use config::{ClientConfig, DEFAULT_CONNECT_TIMEOUT, KeepAlive};
pub use error::VboxWebError;
pub use port::VboxPortType;

pub use vboxweb_soap::soap::{FaultDetail, InvalidObjectFault, RuntimeFault, SoapFault};
