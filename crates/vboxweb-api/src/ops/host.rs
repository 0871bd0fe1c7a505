//! The host the web service runs on.

use crate::enums::{HostNetworkInterfaceType, ProcessorFeature};
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getDVDDrives")]
pub struct IHostGetDVDDrives {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getDVDDrivesResponse", default)]
pub struct IHostGetDVDDrivesResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getFloppyDrives")]
pub struct IHostGetFloppyDrives {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getFloppyDrivesResponse", default)]
pub struct IHostGetFloppyDrivesResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getNetworkInterfaces")]
pub struct IHostGetNetworkInterfaces {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getNetworkInterfacesResponse", default)]
pub struct IHostGetNetworkInterfacesResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getNameServers")]
pub struct IHostGetNameServers {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getNameServersResponse", default)]
pub struct IHostGetNameServersResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getDomainName")]
pub struct IHostGetDomainName {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getDomainNameResponse", default)]
pub struct IHostGetDomainNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getSearchStrings")]
pub struct IHostGetSearchStrings {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getSearchStringsResponse", default)]
pub struct IHostGetSearchStringsResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorCount")]
pub struct IHostGetProcessorCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorCountResponse", default)]
pub struct IHostGetProcessorCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorOnlineCount")]
pub struct IHostGetProcessorOnlineCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorOnlineCountResponse", default)]
pub struct IHostGetProcessorOnlineCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorCoreCount")]
pub struct IHostGetProcessorCoreCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorCoreCountResponse", default)]
pub struct IHostGetProcessorCoreCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorOnlineCoreCount")]
pub struct IHostGetProcessorOnlineCoreCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorOnlineCoreCountResponse", default)]
pub struct IHostGetProcessorOnlineCoreCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getMemorySize")]
pub struct IHostGetMemorySize {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getMemorySizeResponse", default)]
pub struct IHostGetMemorySizeResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getMemoryAvailable")]
pub struct IHostGetMemoryAvailable {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getMemoryAvailableResponse", default)]
pub struct IHostGetMemoryAvailableResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getOperatingSystem")]
pub struct IHostGetOperatingSystem {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getOperatingSystemResponse", default)]
pub struct IHostGetOperatingSystemResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getOSVersion")]
pub struct IHostGetOSVersion {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getOSVersionResponse", default)]
pub struct IHostGetOSVersionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getUTCTime")]
pub struct IHostGetUTCTime {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getUTCTimeResponse", default)]
pub struct IHostGetUTCTimeResponse {
    pub returnval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getAcceleration3DAvailable")]
pub struct IHostGetAcceleration3DAvailable {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getAcceleration3DAvailableResponse", default)]
pub struct IHostGetAcceleration3DAvailableResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorSpeed")]
pub struct IHostGetProcessorSpeed {
    #[wire(rename = "_this")]
    pub this: String,
    pub cpu_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorSpeedResponse", default)]
pub struct IHostGetProcessorSpeedResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorFeature")]
pub struct IHostGetProcessorFeature {
    #[wire(rename = "_this")]
    pub this: String,
    pub feature: ProcessorFeature,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorFeatureResponse", default)]
pub struct IHostGetProcessorFeatureResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorDescription")]
pub struct IHostGetProcessorDescription {
    #[wire(rename = "_this")]
    pub this: String,
    pub cpu_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorDescriptionResponse", default)]
pub struct IHostGetProcessorDescriptionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorCPUIDLeaf")]
pub struct IHostGetProcessorCPUIDLeaf {
    #[wire(rename = "_this")]
    pub this: String,
    pub cpu_id: u32,
    pub leaf: u32,
    pub sub_leaf: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_getProcessorCPUIDLeafResponse", default)]
pub struct IHostGetProcessorCPUIDLeafResponse {
    #[wire(rename = "valEax")]
    pub eax: u32,
    #[wire(rename = "valEbx")]
    pub ebx: u32,
    #[wire(rename = "valEcx")]
    pub ecx: u32,
    #[wire(rename = "valEdx")]
    pub edx: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_createHostOnlyNetworkInterface")]
pub struct IHostCreateHostOnlyNetworkInterface {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_createHostOnlyNetworkInterfaceResponse", default)]
pub struct IHostCreateHostOnlyNetworkInterfaceResponse {
    pub host_interface: String,
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_removeHostOnlyNetworkInterface")]
pub struct IHostRemoveHostOnlyNetworkInterface {
    #[wire(rename = "_this")]
    pub this: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_removeHostOnlyNetworkInterfaceResponse", default)]
pub struct IHostRemoveHostOnlyNetworkInterfaceResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_findHostDVDDrive")]
pub struct IHostFindHostDVDDrive {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_findHostDVDDriveResponse", default)]
pub struct IHostFindHostDVDDriveResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_findHostFloppyDrive")]
pub struct IHostFindHostFloppyDrive {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_findHostFloppyDriveResponse", default)]
pub struct IHostFindHostFloppyDriveResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_findHostNetworkInterfaceByName")]
pub struct IHostFindHostNetworkInterfaceByName {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_findHostNetworkInterfaceByNameResponse", default)]
pub struct IHostFindHostNetworkInterfaceByNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_findHostNetworkInterfaceById")]
pub struct IHostFindHostNetworkInterfaceById {
    #[wire(rename = "_this")]
    pub this: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_findHostNetworkInterfaceByIdResponse", default)]
pub struct IHostFindHostNetworkInterfaceByIdResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_findHostNetworkInterfacesOfType")]
pub struct IHostFindHostNetworkInterfacesOfType {
    #[wire(rename = "_this")]
    pub this: String,
    pub r#type: HostNetworkInterfaceType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_findHostNetworkInterfacesOfTypeResponse", default)]
pub struct IHostFindHostNetworkInterfacesOfTypeResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_generateMACAddress")]
pub struct IHostGenerateMACAddress {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHost_generateMACAddressResponse", default)]
pub struct IHostGenerateMACAddressResponse {
    pub returnval: String,
}
