//! Global limits and defaults of the installation.

use crate::enums::{
    ChipsetType, DeviceType, NetworkAttachmentType, StorageBus, StorageControllerType,
};
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMinGuestRAM")]
pub struct ISystemPropertiesGetMinGuestRAM {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMinGuestRAMResponse", default)]
pub struct ISystemPropertiesGetMinGuestRAMResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxGuestRAM")]
pub struct ISystemPropertiesGetMaxGuestRAM {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxGuestRAMResponse", default)]
pub struct ISystemPropertiesGetMaxGuestRAMResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMinGuestVRAM")]
pub struct ISystemPropertiesGetMinGuestVRAM {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMinGuestVRAMResponse", default)]
pub struct ISystemPropertiesGetMinGuestVRAMResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxGuestVRAM")]
pub struct ISystemPropertiesGetMaxGuestVRAM {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxGuestVRAMResponse", default)]
pub struct ISystemPropertiesGetMaxGuestVRAMResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMinGuestCPUCount")]
pub struct ISystemPropertiesGetMinGuestCPUCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMinGuestCPUCountResponse", default)]
pub struct ISystemPropertiesGetMinGuestCPUCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxGuestCPUCount")]
pub struct ISystemPropertiesGetMaxGuestCPUCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxGuestCPUCountResponse", default)]
pub struct ISystemPropertiesGetMaxGuestCPUCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxGuestMonitors")]
pub struct ISystemPropertiesGetMaxGuestMonitors {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxGuestMonitorsResponse", default)]
pub struct ISystemPropertiesGetMaxGuestMonitorsResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getInfoVDSize")]
pub struct ISystemPropertiesGetInfoVDSize {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getInfoVDSizeResponse", default)]
pub struct ISystemPropertiesGetInfoVDSizeResponse {
    pub returnval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getSerialPortCount")]
pub struct ISystemPropertiesGetSerialPortCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getSerialPortCountResponse", default)]
pub struct ISystemPropertiesGetSerialPortCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getParallelPortCount")]
pub struct ISystemPropertiesGetParallelPortCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getParallelPortCountResponse", default)]
pub struct ISystemPropertiesGetParallelPortCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxBootPosition")]
pub struct ISystemPropertiesGetMaxBootPosition {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxBootPositionResponse", default)]
pub struct ISystemPropertiesGetMaxBootPositionResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultMachineFolder")]
pub struct ISystemPropertiesGetDefaultMachineFolder {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultMachineFolderResponse", default)]
pub struct ISystemPropertiesGetDefaultMachineFolderResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setDefaultMachineFolder")]
pub struct ISystemPropertiesSetDefaultMachineFolder {
    #[wire(rename = "_this")]
    pub this: String,
    pub default_machine_folder: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setDefaultMachineFolderResponse", default)]
pub struct ISystemPropertiesSetDefaultMachineFolderResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getLoggingLevel")]
pub struct ISystemPropertiesGetLoggingLevel {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getLoggingLevelResponse", default)]
pub struct ISystemPropertiesGetLoggingLevelResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setLoggingLevel")]
pub struct ISystemPropertiesSetLoggingLevel {
    #[wire(rename = "_this")]
    pub this: String,
    pub logging_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setLoggingLevelResponse", default)]
pub struct ISystemPropertiesSetLoggingLevelResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMediumFormats")]
pub struct ISystemPropertiesGetMediumFormats {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMediumFormatsResponse", default)]
pub struct ISystemPropertiesGetMediumFormatsResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultHardDiskFormat")]
pub struct ISystemPropertiesGetDefaultHardDiskFormat {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultHardDiskFormatResponse", default)]
pub struct ISystemPropertiesGetDefaultHardDiskFormatResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setDefaultHardDiskFormat")]
pub struct ISystemPropertiesSetDefaultHardDiskFormat {
    #[wire(rename = "_this")]
    pub this: String,
    pub default_hard_disk_format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setDefaultHardDiskFormatResponse", default)]
pub struct ISystemPropertiesSetDefaultHardDiskFormatResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getFreeDiskSpaceWarning")]
pub struct ISystemPropertiesGetFreeDiskSpaceWarning {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getFreeDiskSpaceWarningResponse", default)]
pub struct ISystemPropertiesGetFreeDiskSpaceWarningResponse {
    pub returnval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setFreeDiskSpaceWarning")]
pub struct ISystemPropertiesSetFreeDiskSpaceWarning {
    #[wire(rename = "_this")]
    pub this: String,
    pub free_disk_space_warning: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setFreeDiskSpaceWarningResponse", default)]
pub struct ISystemPropertiesSetFreeDiskSpaceWarningResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getFreeDiskSpacePercentWarning")]
pub struct ISystemPropertiesGetFreeDiskSpacePercentWarning {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getFreeDiskSpacePercentWarningResponse", default)]
pub struct ISystemPropertiesGetFreeDiskSpacePercentWarningResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setFreeDiskSpacePercentWarning")]
pub struct ISystemPropertiesSetFreeDiskSpacePercentWarning {
    #[wire(rename = "_this")]
    pub this: String,
    pub free_disk_space_percent_warning: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setFreeDiskSpacePercentWarningResponse", default)]
pub struct ISystemPropertiesSetFreeDiskSpacePercentWarningResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getFreeDiskSpaceError")]
pub struct ISystemPropertiesGetFreeDiskSpaceError {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getFreeDiskSpaceErrorResponse", default)]
pub struct ISystemPropertiesGetFreeDiskSpaceErrorResponse {
    pub returnval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setFreeDiskSpaceError")]
pub struct ISystemPropertiesSetFreeDiskSpaceError {
    #[wire(rename = "_this")]
    pub this: String,
    pub free_disk_space_error: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setFreeDiskSpaceErrorResponse", default)]
pub struct ISystemPropertiesSetFreeDiskSpaceErrorResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getFreeDiskSpacePercentError")]
pub struct ISystemPropertiesGetFreeDiskSpacePercentError {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getFreeDiskSpacePercentErrorResponse", default)]
pub struct ISystemPropertiesGetFreeDiskSpacePercentErrorResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setFreeDiskSpacePercentError")]
pub struct ISystemPropertiesSetFreeDiskSpacePercentError {
    #[wire(rename = "_this")]
    pub this: String,
    pub free_disk_space_percent_error: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setFreeDiskSpacePercentErrorResponse", default)]
pub struct ISystemPropertiesSetFreeDiskSpacePercentErrorResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getVRDEAuthLibrary")]
pub struct ISystemPropertiesGetVRDEAuthLibrary {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getVRDEAuthLibraryResponse", default)]
pub struct ISystemPropertiesGetVRDEAuthLibraryResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setVRDEAuthLibrary")]
pub struct ISystemPropertiesSetVRDEAuthLibrary {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "VRDEAuthLibrary")]
    pub vrde_auth_library: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setVRDEAuthLibraryResponse", default)]
pub struct ISystemPropertiesSetVRDEAuthLibraryResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getWebServiceAuthLibrary")]
pub struct ISystemPropertiesGetWebServiceAuthLibrary {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getWebServiceAuthLibraryResponse", default)]
pub struct ISystemPropertiesGetWebServiceAuthLibraryResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setWebServiceAuthLibrary")]
pub struct ISystemPropertiesSetWebServiceAuthLibrary {
    #[wire(rename = "_this")]
    pub this: String,
    pub web_service_auth_library: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setWebServiceAuthLibraryResponse", default)]
pub struct ISystemPropertiesSetWebServiceAuthLibraryResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultVRDEExtPack")]
pub struct ISystemPropertiesGetDefaultVRDEExtPack {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultVRDEExtPackResponse", default)]
pub struct ISystemPropertiesGetDefaultVRDEExtPackResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setDefaultVRDEExtPack")]
pub struct ISystemPropertiesSetDefaultVRDEExtPack {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "defaultVRDEExtPack")]
    pub default_vrde_ext_pack: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setDefaultVRDEExtPackResponse", default)]
pub struct ISystemPropertiesSetDefaultVRDEExtPackResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getLogHistoryCount")]
pub struct ISystemPropertiesGetLogHistoryCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getLogHistoryCountResponse", default)]
pub struct ISystemPropertiesGetLogHistoryCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setLogHistoryCount")]
pub struct ISystemPropertiesSetLogHistoryCount {
    #[wire(rename = "_this")]
    pub this: String,
    pub log_history_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setLogHistoryCountResponse", default)]
pub struct ISystemPropertiesSetLogHistoryCountResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getAutostartDatabasePath")]
pub struct ISystemPropertiesGetAutostartDatabasePath {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getAutostartDatabasePathResponse", default)]
pub struct ISystemPropertiesGetAutostartDatabasePathResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setAutostartDatabasePath")]
pub struct ISystemPropertiesSetAutostartDatabasePath {
    #[wire(rename = "_this")]
    pub this: String,
    pub autostart_database_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setAutostartDatabasePathResponse", default)]
pub struct ISystemPropertiesSetAutostartDatabasePathResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultAdditionsISO")]
pub struct ISystemPropertiesGetDefaultAdditionsISO {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultAdditionsISOResponse", default)]
pub struct ISystemPropertiesGetDefaultAdditionsISOResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setDefaultAdditionsISO")]
pub struct ISystemPropertiesSetDefaultAdditionsISO {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "defaultAdditionsISO")]
    pub default_additions_iso: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setDefaultAdditionsISOResponse", default)]
pub struct ISystemPropertiesSetDefaultAdditionsISOResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultFrontend")]
pub struct ISystemPropertiesGetDefaultFrontend {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultFrontendResponse", default)]
pub struct ISystemPropertiesGetDefaultFrontendResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setDefaultFrontend")]
pub struct ISystemPropertiesSetDefaultFrontend {
    #[wire(rename = "_this")]
    pub this: String,
    pub default_frontend: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_setDefaultFrontendResponse", default)]
pub struct ISystemPropertiesSetDefaultFrontendResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxNetworkAdapters")]
pub struct ISystemPropertiesGetMaxNetworkAdapters {
    #[wire(rename = "_this")]
    pub this: String,
    pub chipset: ChipsetType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxNetworkAdaptersResponse", default)]
pub struct ISystemPropertiesGetMaxNetworkAdaptersResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxNetworkAdaptersOfType")]
pub struct ISystemPropertiesGetMaxNetworkAdaptersOfType {
    #[wire(rename = "_this")]
    pub this: String,
    pub chipset: ChipsetType,
    pub r#type: NetworkAttachmentType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxNetworkAdaptersOfTypeResponse", default)]
pub struct ISystemPropertiesGetMaxNetworkAdaptersOfTypeResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxDevicesPerPortForStorageBus")]
pub struct ISystemPropertiesGetMaxDevicesPerPortForStorageBus {
    #[wire(rename = "_this")]
    pub this: String,
    pub bus: StorageBus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxDevicesPerPortForStorageBusResponse", default)]
pub struct ISystemPropertiesGetMaxDevicesPerPortForStorageBusResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMinPortCountForStorageBus")]
pub struct ISystemPropertiesGetMinPortCountForStorageBus {
    #[wire(rename = "_this")]
    pub this: String,
    pub bus: StorageBus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMinPortCountForStorageBusResponse", default)]
pub struct ISystemPropertiesGetMinPortCountForStorageBusResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxPortCountForStorageBus")]
pub struct ISystemPropertiesGetMaxPortCountForStorageBus {
    #[wire(rename = "_this")]
    pub this: String,
    pub bus: StorageBus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxPortCountForStorageBusResponse", default)]
pub struct ISystemPropertiesGetMaxPortCountForStorageBusResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxInstancesOfStorageBus")]
pub struct ISystemPropertiesGetMaxInstancesOfStorageBus {
    #[wire(rename = "_this")]
    pub this: String,
    pub chipset: ChipsetType,
    pub bus: StorageBus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getMaxInstancesOfStorageBusResponse", default)]
pub struct ISystemPropertiesGetMaxInstancesOfStorageBusResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDeviceTypesForStorageBus")]
pub struct ISystemPropertiesGetDeviceTypesForStorageBus {
    #[wire(rename = "_this")]
    pub this: String,
    pub bus: StorageBus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDeviceTypesForStorageBusResponse", default)]
pub struct ISystemPropertiesGetDeviceTypesForStorageBusResponse {
    pub returnval: Vec<DeviceType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getStorageBusForStorageControllerType")]
pub struct ISystemPropertiesGetStorageBusForStorageControllerType {
    #[wire(rename = "_this")]
    pub this: String,
    pub storage_controller_type: StorageControllerType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getStorageBusForStorageControllerTypeResponse", default)]
pub struct ISystemPropertiesGetStorageBusForStorageControllerTypeResponse {
    pub returnval: StorageBus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getStorageControllerTypesForStorageBus")]
pub struct ISystemPropertiesGetStorageControllerTypesForStorageBus {
    #[wire(rename = "_this")]
    pub this: String,
    pub storage_bus: StorageBus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getStorageControllerTypesForStorageBusResponse", default)]
pub struct ISystemPropertiesGetStorageControllerTypesForStorageBusResponse {
    pub returnval: Vec<StorageControllerType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultIoCacheSettingForStorageController")]
pub struct ISystemPropertiesGetDefaultIoCacheSettingForStorageController {
    #[wire(rename = "_this")]
    pub this: String,
    pub controller_type: StorageControllerType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISystemProperties_getDefaultIoCacheSettingForStorageControllerResponse", default)]
pub struct ISystemPropertiesGetDefaultIoCacheSettingForStorageControllerResponse {
    pub returnval: bool,
}
