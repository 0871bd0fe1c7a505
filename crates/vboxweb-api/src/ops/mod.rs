//! Request and response payloads, one module per remote interface.
//!
//! Every operation `IFoo_bar` has a request struct `IFooBar` carrying the
//! `_this` reference (except on `IWebsessionManager`) and the input
//! parameters in declaration order, plus an `IFooBarResponse` with the
//! output parameters and `returnval`.

mod console;
mod display;
mod guest;
mod host;
mod host_network_interface;
mod keyboard;
mod machine;
mod managed_object_ref;
mod medium;
mod mouse;
mod network_adapter;
mod progress;
mod session;
mod snapshot;
mod storage_controller;
mod system_properties;
mod virtualbox;
mod virtualbox_error_info;
mod vrde_server;
mod websession_manager;

pub use console::*;
pub use display::*;
pub use guest::*;
pub use host::*;
pub use host_network_interface::*;
pub use keyboard::*;
pub use machine::*;
pub use managed_object_ref::*;
pub use medium::*;
pub use mouse::*;
pub use network_adapter::*;
pub use progress::*;
pub use session::*;
pub use snapshot::*;
pub use storage_controller::*;
pub use system_properties::*;
pub use virtualbox::*;
pub use virtualbox_error_info::*;
pub use vrde_server::*;
pub use websession_manager::*;
