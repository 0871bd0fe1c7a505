//! SOAP 1.1 layer shared by every VirtualBox web service operation.
//!
//! [`cores`] holds the typed tag machinery and the scalar writers,
//! [`soap`] the envelope, the body discrimination and the fault types.

// Derived code refers to this crate by its external name.
extern crate self as vboxweb_soap;

mod macros;

pub mod cores;
pub mod soap;

pub use vboxweb_macros::WireStruct;
