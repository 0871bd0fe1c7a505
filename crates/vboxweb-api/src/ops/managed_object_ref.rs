//! Operations valid on any managed object reference.

use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IManagedObjectRef_getInterfaceName")]
pub struct IManagedObjectRefGetInterfaceName {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IManagedObjectRef_getInterfaceNameResponse", default)]
pub struct IManagedObjectRefGetInterfaceNameResponse {
    pub returnval: String,
}

/// Releases one managed object reference on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IManagedObjectRef_release")]
pub struct IManagedObjectRefRelease {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IManagedObjectRef_releaseResponse", default)]
pub struct IManagedObjectRefReleaseResponse {}
