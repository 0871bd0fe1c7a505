//! The root `IVirtualBox` object returned by `IWebsessionManager_logon`.

use crate::enums::{AccessMode, DeviceType, FirmwareType, MachineState};
use crate::structs::IGuestOSType;
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getVersion")]
pub struct IVirtualBoxGetVersion {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getVersionResponse", default)]
pub struct IVirtualBoxGetVersionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getVersionNormalized")]
pub struct IVirtualBoxGetVersionNormalized {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getVersionNormalizedResponse", default)]
pub struct IVirtualBoxGetVersionNormalizedResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getRevision")]
pub struct IVirtualBoxGetRevision {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getRevisionResponse", default)]
pub struct IVirtualBoxGetRevisionResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getPackageType")]
pub struct IVirtualBoxGetPackageType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getPackageTypeResponse", default)]
pub struct IVirtualBoxGetPackageTypeResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getAPIVersion")]
pub struct IVirtualBoxGetAPIVersion {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getAPIVersionResponse", default)]
pub struct IVirtualBoxGetAPIVersionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getAPIRevision")]
pub struct IVirtualBoxGetAPIRevision {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getAPIRevisionResponse", default)]
pub struct IVirtualBoxGetAPIRevisionResponse {
    pub returnval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getHomeFolder")]
pub struct IVirtualBoxGetHomeFolder {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getHomeFolderResponse", default)]
pub struct IVirtualBoxGetHomeFolderResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getSettingsFilePath")]
pub struct IVirtualBoxGetSettingsFilePath {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getSettingsFilePathResponse", default)]
pub struct IVirtualBoxGetSettingsFilePathResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getHost")]
pub struct IVirtualBoxGetHost {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getHostResponse", default)]
pub struct IVirtualBoxGetHostResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getSystemProperties")]
pub struct IVirtualBoxGetSystemProperties {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getSystemPropertiesResponse", default)]
pub struct IVirtualBoxGetSystemPropertiesResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getMachines")]
pub struct IVirtualBoxGetMachines {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getMachinesResponse", default)]
pub struct IVirtualBoxGetMachinesResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getMachineGroups")]
pub struct IVirtualBoxGetMachineGroups {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getMachineGroupsResponse", default)]
pub struct IVirtualBoxGetMachineGroupsResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getHardDisks")]
pub struct IVirtualBoxGetHardDisks {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getHardDisksResponse", default)]
pub struct IVirtualBoxGetHardDisksResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getDVDImages")]
pub struct IVirtualBoxGetDVDImages {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getDVDImagesResponse", default)]
pub struct IVirtualBoxGetDVDImagesResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getFloppyImages")]
pub struct IVirtualBoxGetFloppyImages {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getFloppyImagesResponse", default)]
pub struct IVirtualBoxGetFloppyImagesResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getProgressOperations")]
pub struct IVirtualBoxGetProgressOperations {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getProgressOperationsResponse", default)]
pub struct IVirtualBoxGetProgressOperationsResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getGuestOSTypes")]
pub struct IVirtualBoxGetGuestOSTypes {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getGuestOSTypesResponse", default)]
pub struct IVirtualBoxGetGuestOSTypesResponse {
    pub returnval: Vec<IGuestOSType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getPerformanceCollector")]
pub struct IVirtualBoxGetPerformanceCollector {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getPerformanceCollectorResponse", default)]
pub struct IVirtualBoxGetPerformanceCollectorResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getDHCPServers")]
pub struct IVirtualBoxGetDHCPServers {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getDHCPServersResponse", default)]
pub struct IVirtualBoxGetDHCPServersResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getNATNetworks")]
pub struct IVirtualBoxGetNATNetworks {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getNATNetworksResponse", default)]
pub struct IVirtualBoxGetNATNetworksResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getEventSource")]
pub struct IVirtualBoxGetEventSource {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getEventSourceResponse", default)]
pub struct IVirtualBoxGetEventSourceResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getInternalNetworks")]
pub struct IVirtualBoxGetInternalNetworks {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getInternalNetworksResponse", default)]
pub struct IVirtualBoxGetInternalNetworksResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getGenericNetworkDrivers")]
pub struct IVirtualBoxGetGenericNetworkDrivers {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getGenericNetworkDriversResponse", default)]
pub struct IVirtualBoxGetGenericNetworkDriversResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_composeMachineFilename")]
pub struct IVirtualBoxComposeMachineFilename {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub group: String,
    pub create_flags: String,
    pub base_folder: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_composeMachineFilenameResponse", default)]
pub struct IVirtualBoxComposeMachineFilenameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_createMachine")]
pub struct IVirtualBoxCreateMachine {
    #[wire(rename = "_this")]
    pub this: String,
    pub settings_file: String,
    pub name: String,
    pub groups: Vec<String>,
    pub os_type_id: String,
    pub flags: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_createMachineResponse", default)]
pub struct IVirtualBoxCreateMachineResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_openMachine")]
pub struct IVirtualBoxOpenMachine {
    #[wire(rename = "_this")]
    pub this: String,
    pub settings_file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_openMachineResponse", default)]
pub struct IVirtualBoxOpenMachineResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_registerMachine")]
pub struct IVirtualBoxRegisterMachine {
    #[wire(rename = "_this")]
    pub this: String,
    pub machine: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_registerMachineResponse", default)]
pub struct IVirtualBoxRegisterMachineResponse {}

/// Looks a machine up by name or UUID.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_findMachine")]
pub struct IVirtualBoxFindMachine {
    #[wire(rename = "_this")]
    pub this: String,
    pub name_or_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_findMachineResponse", default)]
pub struct IVirtualBoxFindMachineResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getMachinesByGroups")]
pub struct IVirtualBoxGetMachinesByGroups {
    #[wire(rename = "_this")]
    pub this: String,
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getMachinesByGroupsResponse", default)]
pub struct IVirtualBoxGetMachinesByGroupsResponse {
    pub returnval: Vec<String>,
}

/// Returns the states in the order of `machines`.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getMachineStates")]
pub struct IVirtualBoxGetMachineStates {
    #[wire(rename = "_this")]
    pub this: String,
    pub machines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getMachineStatesResponse", default)]
pub struct IVirtualBoxGetMachineStatesResponse {
    pub returnval: Vec<MachineState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_createMedium")]
pub struct IVirtualBoxCreateMedium {
    #[wire(rename = "_this")]
    pub this: String,
    pub format: String,
    pub location: String,
    pub access_mode: AccessMode,
    pub a_device_type_type: DeviceType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_createMediumResponse", default)]
pub struct IVirtualBoxCreateMediumResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_openMedium")]
pub struct IVirtualBoxOpenMedium {
    #[wire(rename = "_this")]
    pub this: String,
    pub location: String,
    pub device_type: DeviceType,
    pub access_mode: AccessMode,
    pub force_new_uuid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_openMediumResponse", default)]
pub struct IVirtualBoxOpenMediumResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getGuestOSType")]
pub struct IVirtualBoxGetGuestOSType {
    #[wire(rename = "_this")]
    pub this: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getGuestOSTypeResponse", default)]
pub struct IVirtualBoxGetGuestOSTypeResponse {
    pub returnval: IGuestOSType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_createSharedFolder")]
pub struct IVirtualBoxCreateSharedFolder {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub host_path: String,
    pub writable: bool,
    pub automount: bool,
    pub auto_mount_point: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_createSharedFolderResponse", default)]
pub struct IVirtualBoxCreateSharedFolderResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_removeSharedFolder")]
pub struct IVirtualBoxRemoveSharedFolder {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_removeSharedFolderResponse", default)]
pub struct IVirtualBoxRemoveSharedFolderResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getExtraDataKeys")]
pub struct IVirtualBoxGetExtraDataKeys {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getExtraDataKeysResponse", default)]
pub struct IVirtualBoxGetExtraDataKeysResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getExtraData")]
pub struct IVirtualBoxGetExtraData {
    #[wire(rename = "_this")]
    pub this: String,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_getExtraDataResponse", default)]
pub struct IVirtualBoxGetExtraDataResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_setExtraData")]
pub struct IVirtualBoxSetExtraData {
    #[wire(rename = "_this")]
    pub this: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_setExtraDataResponse", default)]
pub struct IVirtualBoxSetExtraDataResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_setSettingsSecret")]
pub struct IVirtualBoxSetSettingsSecret {
    #[wire(rename = "_this")]
    pub this: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_setSettingsSecretResponse", default)]
pub struct IVirtualBoxSetSettingsSecretResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_createDHCPServer")]
pub struct IVirtualBoxCreateDHCPServer {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_createDHCPServerResponse", default)]
pub struct IVirtualBoxCreateDHCPServerResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_findDHCPServerByNetworkName")]
pub struct IVirtualBoxFindDHCPServerByNetworkName {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_findDHCPServerByNetworkNameResponse", default)]
pub struct IVirtualBoxFindDHCPServerByNetworkNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_removeDHCPServer")]
pub struct IVirtualBoxRemoveDHCPServer {
    #[wire(rename = "_this")]
    pub this: String,
    pub server: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_removeDHCPServerResponse", default)]
pub struct IVirtualBoxRemoveDHCPServerResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_createNATNetwork")]
pub struct IVirtualBoxCreateNATNetwork {
    #[wire(rename = "_this")]
    pub this: String,
    pub network_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_createNATNetworkResponse", default)]
pub struct IVirtualBoxCreateNATNetworkResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_findNATNetworkByName")]
pub struct IVirtualBoxFindNATNetworkByName {
    #[wire(rename = "_this")]
    pub this: String,
    pub network_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_findNATNetworkByNameResponse", default)]
pub struct IVirtualBoxFindNATNetworkByNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_removeNATNetwork")]
pub struct IVirtualBoxRemoveNATNetwork {
    #[wire(rename = "_this")]
    pub this: String,
    pub network: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_removeNATNetworkResponse", default)]
pub struct IVirtualBoxRemoveNATNetworkResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_checkFirmwarePresent")]
pub struct IVirtualBoxCheckFirmwarePresent {
    #[wire(rename = "_this")]
    pub this: String,
    pub firmware_type: FirmwareType,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBox_checkFirmwarePresentResponse", default)]
pub struct IVirtualBoxCheckFirmwarePresentResponse {
    pub url: String,
    pub file: String,
    pub returnval: bool,
}
