//! Remote display server settings of a machine.

use crate::enums::AuthType;
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getEnabled")]
pub struct IVRDEServerGetEnabled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getEnabledResponse", default)]
pub struct IVRDEServerGetEnabledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setEnabled")]
pub struct IVRDEServerSetEnabled {
    #[wire(rename = "_this")]
    pub this: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setEnabledResponse", default)]
pub struct IVRDEServerSetEnabledResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getAuthType")]
pub struct IVRDEServerGetAuthType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getAuthTypeResponse", default)]
pub struct IVRDEServerGetAuthTypeResponse {
    pub returnval: AuthType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setAuthType")]
pub struct IVRDEServerSetAuthType {
    #[wire(rename = "_this")]
    pub this: String,
    pub auth_type: AuthType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setAuthTypeResponse", default)]
pub struct IVRDEServerSetAuthTypeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getAuthTimeout")]
pub struct IVRDEServerGetAuthTimeout {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getAuthTimeoutResponse", default)]
pub struct IVRDEServerGetAuthTimeoutResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setAuthTimeout")]
pub struct IVRDEServerSetAuthTimeout {
    #[wire(rename = "_this")]
    pub this: String,
    pub auth_timeout: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setAuthTimeoutResponse", default)]
pub struct IVRDEServerSetAuthTimeoutResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getAllowMultiConnection")]
pub struct IVRDEServerGetAllowMultiConnection {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getAllowMultiConnectionResponse", default)]
pub struct IVRDEServerGetAllowMultiConnectionResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setAllowMultiConnection")]
pub struct IVRDEServerSetAllowMultiConnection {
    #[wire(rename = "_this")]
    pub this: String,
    pub allow_multi_connection: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setAllowMultiConnectionResponse", default)]
pub struct IVRDEServerSetAllowMultiConnectionResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getReuseSingleConnection")]
pub struct IVRDEServerGetReuseSingleConnection {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getReuseSingleConnectionResponse", default)]
pub struct IVRDEServerGetReuseSingleConnectionResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setReuseSingleConnection")]
pub struct IVRDEServerSetReuseSingleConnection {
    #[wire(rename = "_this")]
    pub this: String,
    pub reuse_single_connection: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setReuseSingleConnectionResponse", default)]
pub struct IVRDEServerSetReuseSingleConnectionResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getVRDEExtPack")]
pub struct IVRDEServerGetVRDEExtPack {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getVRDEExtPackResponse", default)]
pub struct IVRDEServerGetVRDEExtPackResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setVRDEExtPack")]
pub struct IVRDEServerSetVRDEExtPack {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "VRDEExtPack")]
    pub vrde_ext_pack: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setVRDEExtPackResponse", default)]
pub struct IVRDEServerSetVRDEExtPackResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getAuthLibrary")]
pub struct IVRDEServerGetAuthLibrary {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getAuthLibraryResponse", default)]
pub struct IVRDEServerGetAuthLibraryResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setAuthLibrary")]
pub struct IVRDEServerSetAuthLibrary {
    #[wire(rename = "_this")]
    pub this: String,
    pub auth_library: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setAuthLibraryResponse", default)]
pub struct IVRDEServerSetAuthLibraryResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getVRDEProperties")]
pub struct IVRDEServerGetVRDEProperties {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getVRDEPropertiesResponse", default)]
pub struct IVRDEServerGetVRDEPropertiesResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setVRDEProperty")]
pub struct IVRDEServerSetVRDEProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_setVRDEPropertyResponse", default)]
pub struct IVRDEServerSetVRDEPropertyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getVRDEProperty")]
pub struct IVRDEServerGetVRDEProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVRDEServer_getVRDEPropertyResponse", default)]
pub struct IVRDEServerGetVRDEPropertyResponse {
    pub returnval: String,
}
