//! Typed payloads of the VirtualBox 6.1 web service (`vboxwebsrv`).
//!
//! Remote objects are addressed by managed object references, opaque strings
//! handed out by the server. They are plain [`String`]s here and are only
//! valid inside the web session that produced them.
//!
//! ```
//! use vboxweb_api::ops::IMachineGetName;
//! use vboxweb_soap::soap::encode_envelope;
//!
//! let xml = encode_envelope(IMachineGetName {
//!     this: "d4d4c0c0a9e2b0f1-0000000000000007".to_owned(),
//! })
//! .unwrap();
//! assert!(xml.contains("<IMachine_getName xmlns=\"http://www.virtualbox.org/\">"));
//! ```

pub mod enums;
pub mod ops;
pub mod structs;
