use crate::enums::{NetworkAdapterPromiscModePolicy, NetworkAdapterType, NetworkAttachmentType};
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getAdapterType")]
pub struct INetworkAdapterGetAdapterType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getAdapterTypeResponse", default)]
pub struct INetworkAdapterGetAdapterTypeResponse {
    pub returnval: NetworkAdapterType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setAdapterType")]
pub struct INetworkAdapterSetAdapterType {
    #[wire(rename = "_this")]
    pub this: String,
    pub adapter_type: NetworkAdapterType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setAdapterTypeResponse", default)]
pub struct INetworkAdapterSetAdapterTypeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getSlot")]
pub struct INetworkAdapterGetSlot {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getSlotResponse", default)]
pub struct INetworkAdapterGetSlotResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getEnabled")]
pub struct INetworkAdapterGetEnabled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getEnabledResponse", default)]
pub struct INetworkAdapterGetEnabledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setEnabled")]
pub struct INetworkAdapterSetEnabled {
    #[wire(rename = "_this")]
    pub this: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setEnabledResponse", default)]
pub struct INetworkAdapterSetEnabledResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getMACAddress")]
pub struct INetworkAdapterGetMACAddress {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getMACAddressResponse", default)]
pub struct INetworkAdapterGetMACAddressResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setMACAddress")]
pub struct INetworkAdapterSetMACAddress {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "MACAddress")]
    pub mac_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setMACAddressResponse", default)]
pub struct INetworkAdapterSetMACAddressResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getAttachmentType")]
pub struct INetworkAdapterGetAttachmentType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getAttachmentTypeResponse", default)]
pub struct INetworkAdapterGetAttachmentTypeResponse {
    pub returnval: NetworkAttachmentType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setAttachmentType")]
pub struct INetworkAdapterSetAttachmentType {
    #[wire(rename = "_this")]
    pub this: String,
    pub attachment_type: NetworkAttachmentType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setAttachmentTypeResponse", default)]
pub struct INetworkAdapterSetAttachmentTypeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getBridgedInterface")]
pub struct INetworkAdapterGetBridgedInterface {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getBridgedInterfaceResponse", default)]
pub struct INetworkAdapterGetBridgedInterfaceResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setBridgedInterface")]
pub struct INetworkAdapterSetBridgedInterface {
    #[wire(rename = "_this")]
    pub this: String,
    pub bridged_interface: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setBridgedInterfaceResponse", default)]
pub struct INetworkAdapterSetBridgedInterfaceResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getHostOnlyInterface")]
pub struct INetworkAdapterGetHostOnlyInterface {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getHostOnlyInterfaceResponse", default)]
pub struct INetworkAdapterGetHostOnlyInterfaceResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setHostOnlyInterface")]
pub struct INetworkAdapterSetHostOnlyInterface {
    #[wire(rename = "_this")]
    pub this: String,
    pub host_only_interface: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setHostOnlyInterfaceResponse", default)]
pub struct INetworkAdapterSetHostOnlyInterfaceResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getInternalNetwork")]
pub struct INetworkAdapterGetInternalNetwork {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getInternalNetworkResponse", default)]
pub struct INetworkAdapterGetInternalNetworkResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setInternalNetwork")]
pub struct INetworkAdapterSetInternalNetwork {
    #[wire(rename = "_this")]
    pub this: String,
    pub internal_network: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setInternalNetworkResponse", default)]
pub struct INetworkAdapterSetInternalNetworkResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getNATNetwork")]
pub struct INetworkAdapterGetNATNetwork {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getNATNetworkResponse", default)]
pub struct INetworkAdapterGetNATNetworkResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setNATNetwork")]
pub struct INetworkAdapterSetNATNetwork {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "NATNetwork")]
    pub nat_network: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setNATNetworkResponse", default)]
pub struct INetworkAdapterSetNATNetworkResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getGenericDriver")]
pub struct INetworkAdapterGetGenericDriver {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getGenericDriverResponse", default)]
pub struct INetworkAdapterGetGenericDriverResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setGenericDriver")]
pub struct INetworkAdapterSetGenericDriver {
    #[wire(rename = "_this")]
    pub this: String,
    pub generic_driver: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setGenericDriverResponse", default)]
pub struct INetworkAdapterSetGenericDriverResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getCableConnected")]
pub struct INetworkAdapterGetCableConnected {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getCableConnectedResponse", default)]
pub struct INetworkAdapterGetCableConnectedResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setCableConnected")]
pub struct INetworkAdapterSetCableConnected {
    #[wire(rename = "_this")]
    pub this: String,
    pub cable_connected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setCableConnectedResponse", default)]
pub struct INetworkAdapterSetCableConnectedResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getLineSpeed")]
pub struct INetworkAdapterGetLineSpeed {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getLineSpeedResponse", default)]
pub struct INetworkAdapterGetLineSpeedResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setLineSpeed")]
pub struct INetworkAdapterSetLineSpeed {
    #[wire(rename = "_this")]
    pub this: String,
    pub line_speed: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setLineSpeedResponse", default)]
pub struct INetworkAdapterSetLineSpeedResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getPromiscModePolicy")]
pub struct INetworkAdapterGetPromiscModePolicy {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getPromiscModePolicyResponse", default)]
pub struct INetworkAdapterGetPromiscModePolicyResponse {
    pub returnval: NetworkAdapterPromiscModePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setPromiscModePolicy")]
pub struct INetworkAdapterSetPromiscModePolicy {
    #[wire(rename = "_this")]
    pub this: String,
    pub promisc_mode_policy: NetworkAdapterPromiscModePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setPromiscModePolicyResponse", default)]
pub struct INetworkAdapterSetPromiscModePolicyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getTraceEnabled")]
pub struct INetworkAdapterGetTraceEnabled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getTraceEnabledResponse", default)]
pub struct INetworkAdapterGetTraceEnabledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setTraceEnabled")]
pub struct INetworkAdapterSetTraceEnabled {
    #[wire(rename = "_this")]
    pub this: String,
    pub trace_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setTraceEnabledResponse", default)]
pub struct INetworkAdapterSetTraceEnabledResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getTraceFile")]
pub struct INetworkAdapterGetTraceFile {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getTraceFileResponse", default)]
pub struct INetworkAdapterGetTraceFileResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setTraceFile")]
pub struct INetworkAdapterSetTraceFile {
    #[wire(rename = "_this")]
    pub this: String,
    pub trace_file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setTraceFileResponse", default)]
pub struct INetworkAdapterSetTraceFileResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getNATEngine")]
pub struct INetworkAdapterGetNATEngine {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getNATEngineResponse", default)]
pub struct INetworkAdapterGetNATEngineResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getBootPriority")]
pub struct INetworkAdapterGetBootPriority {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getBootPriorityResponse", default)]
pub struct INetworkAdapterGetBootPriorityResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setBootPriority")]
pub struct INetworkAdapterSetBootPriority {
    #[wire(rename = "_this")]
    pub this: String,
    pub boot_priority: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setBootPriorityResponse", default)]
pub struct INetworkAdapterSetBootPriorityResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getBandwidthGroup")]
pub struct INetworkAdapterGetBandwidthGroup {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getBandwidthGroupResponse", default)]
pub struct INetworkAdapterGetBandwidthGroupResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setBandwidthGroup")]
pub struct INetworkAdapterSetBandwidthGroup {
    #[wire(rename = "_this")]
    pub this: String,
    pub bandwidth_group: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setBandwidthGroupResponse", default)]
pub struct INetworkAdapterSetBandwidthGroupResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getProperty")]
pub struct INetworkAdapterGetProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getPropertyResponse", default)]
pub struct INetworkAdapterGetPropertyResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setProperty")]
pub struct INetworkAdapterSetProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_setPropertyResponse", default)]
pub struct INetworkAdapterSetPropertyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getProperties")]
pub struct INetworkAdapterGetProperties {
    #[wire(rename = "_this")]
    pub this: String,
    pub names: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "INetworkAdapter_getPropertiesResponse", default)]
pub struct INetworkAdapterGetPropertiesResponse {
    pub return_names: Vec<String>,
    pub returnval: Vec<String>,
}
