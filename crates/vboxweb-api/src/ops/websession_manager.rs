//! Session management: `logon`, `getSessionObject` and `logoff`.
//!
//! These are the only operations that do not take a `_this` reference.

use vboxweb_soap::WireStruct;

/// Authenticates and returns a reference to a fresh `IVirtualBox` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IWebsessionManager_logon")]
pub struct IWebsessionManagerLogon {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IWebsessionManager_logonResponse", default)]
pub struct IWebsessionManagerLogonResponse {
    pub returnval: String,
}

/// Returns the `ISession` object bound to the web session.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IWebsessionManager_getSessionObject")]
pub struct IWebsessionManagerGetSessionObject {
    pub ref_i_virtual_box: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IWebsessionManager_getSessionObjectResponse", default)]
pub struct IWebsessionManagerGetSessionObjectResponse {
    pub returnval: String,
}

/// Releases the session and every reference obtained through it.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IWebsessionManager_logoff")]
pub struct IWebsessionManagerLogoff {
    pub ref_i_virtual_box: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IWebsessionManager_logoffResponse", default)]
pub struct IWebsessionManagerLogoffResponse {}
