//! Machine configuration and lifecycle.

use crate::enums::{
    BitmapFormat, CPUPropertyType, ChipsetType, CleanupMode, ClipboardMode, CloneMode,
    CloneOptions, DeviceType, FirmwareType, HWVirtExPropertyType, KeyboardHIDType, LockType,
    MachineState, ParavirtProvider, PointingHIDType, SessionState, StorageBus,
};
use crate::structs::IMediumAttachment;
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getParent")]
pub struct IMachineGetParent {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getParentResponse", default)]
pub struct IMachineGetParentResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getIcon")]
pub struct IMachineGetIcon {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getIconResponse", default)]
pub struct IMachineGetIconResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setIcon")]
pub struct IMachineSetIcon {
    #[wire(rename = "_this")]
    pub this: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setIconResponse", default)]
pub struct IMachineSetIconResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getAccessible")]
pub struct IMachineGetAccessible {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getAccessibleResponse", default)]
pub struct IMachineGetAccessibleResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getAccessError")]
pub struct IMachineGetAccessError {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getAccessErrorResponse", default)]
pub struct IMachineGetAccessErrorResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getName")]
pub struct IMachineGetName {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getNameResponse", default)]
pub struct IMachineGetNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setName")]
pub struct IMachineSetName {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setNameResponse", default)]
pub struct IMachineSetNameResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getDescription")]
pub struct IMachineGetDescription {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getDescriptionResponse", default)]
pub struct IMachineGetDescriptionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setDescription")]
pub struct IMachineSetDescription {
    #[wire(rename = "_this")]
    pub this: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setDescriptionResponse", default)]
pub struct IMachineSetDescriptionResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getId")]
pub struct IMachineGetId {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getIdResponse", default)]
pub struct IMachineGetIdResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getGroups")]
pub struct IMachineGetGroups {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getGroupsResponse", default)]
pub struct IMachineGetGroupsResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setGroups")]
pub struct IMachineSetGroups {
    #[wire(rename = "_this")]
    pub this: String,
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setGroupsResponse", default)]
pub struct IMachineSetGroupsResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getOSTypeId")]
pub struct IMachineGetOSTypeId {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getOSTypeIdResponse", default)]
pub struct IMachineGetOSTypeIdResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setOSTypeId")]
pub struct IMachineSetOSTypeId {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "OSTypeId")]
    pub os_type_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setOSTypeIdResponse", default)]
pub struct IMachineSetOSTypeIdResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getHardwareVersion")]
pub struct IMachineGetHardwareVersion {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getHardwareVersionResponse", default)]
pub struct IMachineGetHardwareVersionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setHardwareVersion")]
pub struct IMachineSetHardwareVersion {
    #[wire(rename = "_this")]
    pub this: String,
    pub hardware_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setHardwareVersionResponse", default)]
pub struct IMachineSetHardwareVersionResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getHardwareUUID")]
pub struct IMachineGetHardwareUUID {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getHardwareUUIDResponse", default)]
pub struct IMachineGetHardwareUUIDResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setHardwareUUID")]
pub struct IMachineSetHardwareUUID {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "hardwareUUID")]
    pub hardware_uuid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setHardwareUUIDResponse", default)]
pub struct IMachineSetHardwareUUIDResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUCount")]
pub struct IMachineGetCPUCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUCountResponse", default)]
pub struct IMachineGetCPUCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setCPUCount")]
pub struct IMachineSetCPUCount {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "CPUCount")]
    pub cpu_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setCPUCountResponse", default)]
pub struct IMachineSetCPUCountResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUHotPlugEnabled")]
pub struct IMachineGetCPUHotPlugEnabled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUHotPlugEnabledResponse", default)]
pub struct IMachineGetCPUHotPlugEnabledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setCPUHotPlugEnabled")]
pub struct IMachineSetCPUHotPlugEnabled {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "CPUHotPlugEnabled")]
    pub cpu_hot_plug_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setCPUHotPlugEnabledResponse", default)]
pub struct IMachineSetCPUHotPlugEnabledResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUExecutionCap")]
pub struct IMachineGetCPUExecutionCap {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUExecutionCapResponse", default)]
pub struct IMachineGetCPUExecutionCapResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setCPUExecutionCap")]
pub struct IMachineSetCPUExecutionCap {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "CPUExecutionCap")]
    pub cpu_execution_cap: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setCPUExecutionCapResponse", default)]
pub struct IMachineSetCPUExecutionCapResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUIDPortabilityLevel")]
pub struct IMachineGetCPUIDPortabilityLevel {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUIDPortabilityLevelResponse", default)]
pub struct IMachineGetCPUIDPortabilityLevelResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setCPUIDPortabilityLevel")]
pub struct IMachineSetCPUIDPortabilityLevel {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "CPUIDPortabilityLevel")]
    pub cpuid_portability_level: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setCPUIDPortabilityLevelResponse", default)]
pub struct IMachineSetCPUIDPortabilityLevelResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMemorySize")]
pub struct IMachineGetMemorySize {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMemorySizeResponse", default)]
pub struct IMachineGetMemorySizeResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setMemorySize")]
pub struct IMachineSetMemorySize {
    #[wire(rename = "_this")]
    pub this: String,
    pub memory_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setMemorySizeResponse", default)]
pub struct IMachineSetMemorySizeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMemoryBalloonSize")]
pub struct IMachineGetMemoryBalloonSize {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMemoryBalloonSizeResponse", default)]
pub struct IMachineGetMemoryBalloonSizeResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setMemoryBalloonSize")]
pub struct IMachineSetMemoryBalloonSize {
    #[wire(rename = "_this")]
    pub this: String,
    pub memory_balloon_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setMemoryBalloonSizeResponse", default)]
pub struct IMachineSetMemoryBalloonSizeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getPageFusionEnabled")]
pub struct IMachineGetPageFusionEnabled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getPageFusionEnabledResponse", default)]
pub struct IMachineGetPageFusionEnabledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setPageFusionEnabled")]
pub struct IMachineSetPageFusionEnabled {
    #[wire(rename = "_this")]
    pub this: String,
    pub page_fusion_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setPageFusionEnabledResponse", default)]
pub struct IMachineSetPageFusionEnabledResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getGraphicsAdapter")]
pub struct IMachineGetGraphicsAdapter {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getGraphicsAdapterResponse", default)]
pub struct IMachineGetGraphicsAdapterResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getBIOSSettings")]
pub struct IMachineGetBIOSSettings {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getBIOSSettingsResponse", default)]
pub struct IMachineGetBIOSSettingsResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getRecordingSettings")]
pub struct IMachineGetRecordingSettings {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getRecordingSettingsResponse", default)]
pub struct IMachineGetRecordingSettingsResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getFirmwareType")]
pub struct IMachineGetFirmwareType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getFirmwareTypeResponse", default)]
pub struct IMachineGetFirmwareTypeResponse {
    pub returnval: FirmwareType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setFirmwareType")]
pub struct IMachineSetFirmwareType {
    #[wire(rename = "_this")]
    pub this: String,
    pub firmware_type: FirmwareType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setFirmwareTypeResponse", default)]
pub struct IMachineSetFirmwareTypeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getPointingHIDType")]
pub struct IMachineGetPointingHIDType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getPointingHIDTypeResponse", default)]
pub struct IMachineGetPointingHIDTypeResponse {
    pub returnval: PointingHIDType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setPointingHIDType")]
pub struct IMachineSetPointingHIDType {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "pointingHIDType")]
    pub pointing_hid_type: PointingHIDType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setPointingHIDTypeResponse", default)]
pub struct IMachineSetPointingHIDTypeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getKeyboardHIDType")]
pub struct IMachineGetKeyboardHIDType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getKeyboardHIDTypeResponse", default)]
pub struct IMachineGetKeyboardHIDTypeResponse {
    pub returnval: KeyboardHIDType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setKeyboardHIDType")]
pub struct IMachineSetKeyboardHIDType {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "keyboardHIDType")]
    pub keyboard_hid_type: KeyboardHIDType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setKeyboardHIDTypeResponse", default)]
pub struct IMachineSetKeyboardHIDTypeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getHPETEnabled")]
pub struct IMachineGetHPETEnabled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getHPETEnabledResponse", default)]
pub struct IMachineGetHPETEnabledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setHPETEnabled")]
pub struct IMachineSetHPETEnabled {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "HPETEnabled")]
    pub hpet_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setHPETEnabledResponse", default)]
pub struct IMachineSetHPETEnabledResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getChipsetType")]
pub struct IMachineGetChipsetType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getChipsetTypeResponse", default)]
pub struct IMachineGetChipsetTypeResponse {
    pub returnval: ChipsetType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setChipsetType")]
pub struct IMachineSetChipsetType {
    #[wire(rename = "_this")]
    pub this: String,
    pub chipset_type: ChipsetType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setChipsetTypeResponse", default)]
pub struct IMachineSetChipsetTypeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSnapshotFolder")]
pub struct IMachineGetSnapshotFolder {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSnapshotFolderResponse", default)]
pub struct IMachineGetSnapshotFolderResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setSnapshotFolder")]
pub struct IMachineSetSnapshotFolder {
    #[wire(rename = "_this")]
    pub this: String,
    pub snapshot_folder: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setSnapshotFolderResponse", default)]
pub struct IMachineSetSnapshotFolderResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getVRDEServer")]
pub struct IMachineGetVRDEServer {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getVRDEServerResponse", default)]
pub struct IMachineGetVRDEServerResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getEmulatedUSBCardReaderEnabled")]
pub struct IMachineGetEmulatedUSBCardReaderEnabled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getEmulatedUSBCardReaderEnabledResponse", default)]
pub struct IMachineGetEmulatedUSBCardReaderEnabledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setEmulatedUSBCardReaderEnabled")]
pub struct IMachineSetEmulatedUSBCardReaderEnabled {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "emulatedUSBCardReaderEnabled")]
    pub emulated_usb_card_reader_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setEmulatedUSBCardReaderEnabledResponse", default)]
pub struct IMachineSetEmulatedUSBCardReaderEnabledResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMediumAttachments")]
pub struct IMachineGetMediumAttachments {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMediumAttachmentsResponse", default)]
pub struct IMachineGetMediumAttachmentsResponse {
    pub returnval: Vec<IMediumAttachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getUSBControllers")]
pub struct IMachineGetUSBControllers {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getUSBControllersResponse", default)]
pub struct IMachineGetUSBControllersResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getUSBDeviceFilters")]
pub struct IMachineGetUSBDeviceFilters {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getUSBDeviceFiltersResponse", default)]
pub struct IMachineGetUSBDeviceFiltersResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getAudioAdapter")]
pub struct IMachineGetAudioAdapter {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getAudioAdapterResponse", default)]
pub struct IMachineGetAudioAdapterResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getStorageControllers")]
pub struct IMachineGetStorageControllers {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getStorageControllersResponse", default)]
pub struct IMachineGetStorageControllersResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSettingsFilePath")]
pub struct IMachineGetSettingsFilePath {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSettingsFilePathResponse", default)]
pub struct IMachineGetSettingsFilePathResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSettingsAuxFilePath")]
pub struct IMachineGetSettingsAuxFilePath {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSettingsAuxFilePathResponse", default)]
pub struct IMachineGetSettingsAuxFilePathResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSettingsModified")]
pub struct IMachineGetSettingsModified {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSettingsModifiedResponse", default)]
pub struct IMachineGetSettingsModifiedResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSessionState")]
pub struct IMachineGetSessionState {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSessionStateResponse", default)]
pub struct IMachineGetSessionStateResponse {
    pub returnval: SessionState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSessionName")]
pub struct IMachineGetSessionName {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSessionNameResponse", default)]
pub struct IMachineGetSessionNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSessionPID")]
pub struct IMachineGetSessionPID {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSessionPIDResponse", default)]
pub struct IMachineGetSessionPIDResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getState")]
pub struct IMachineGetState {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getStateResponse", default)]
pub struct IMachineGetStateResponse {
    pub returnval: MachineState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getLastStateChange")]
pub struct IMachineGetLastStateChange {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getLastStateChangeResponse", default)]
pub struct IMachineGetLastStateChangeResponse {
    pub returnval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getStateFilePath")]
pub struct IMachineGetStateFilePath {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getStateFilePathResponse", default)]
pub struct IMachineGetStateFilePathResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getLogFolder")]
pub struct IMachineGetLogFolder {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getLogFolderResponse", default)]
pub struct IMachineGetLogFolderResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCurrentSnapshot")]
pub struct IMachineGetCurrentSnapshot {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCurrentSnapshotResponse", default)]
pub struct IMachineGetCurrentSnapshotResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSnapshotCount")]
pub struct IMachineGetSnapshotCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSnapshotCountResponse", default)]
pub struct IMachineGetSnapshotCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCurrentStateModified")]
pub struct IMachineGetCurrentStateModified {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCurrentStateModifiedResponse", default)]
pub struct IMachineGetCurrentStateModifiedResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getClipboardMode")]
pub struct IMachineGetClipboardMode {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getClipboardModeResponse", default)]
pub struct IMachineGetClipboardModeResponse {
    pub returnval: ClipboardMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setClipboardMode")]
pub struct IMachineSetClipboardMode {
    #[wire(rename = "_this")]
    pub this: String,
    pub clipboard_mode: ClipboardMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setClipboardModeResponse", default)]
pub struct IMachineSetClipboardModeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getTeleporterEnabled")]
pub struct IMachineGetTeleporterEnabled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getTeleporterEnabledResponse", default)]
pub struct IMachineGetTeleporterEnabledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setTeleporterEnabled")]
pub struct IMachineSetTeleporterEnabled {
    #[wire(rename = "_this")]
    pub this: String,
    pub teleporter_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setTeleporterEnabledResponse", default)]
pub struct IMachineSetTeleporterEnabledResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getTeleporterPort")]
pub struct IMachineGetTeleporterPort {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getTeleporterPortResponse", default)]
pub struct IMachineGetTeleporterPortResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setTeleporterPort")]
pub struct IMachineSetTeleporterPort {
    #[wire(rename = "_this")]
    pub this: String,
    pub teleporter_port: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setTeleporterPortResponse", default)]
pub struct IMachineSetTeleporterPortResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getTeleporterAddress")]
pub struct IMachineGetTeleporterAddress {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getTeleporterAddressResponse", default)]
pub struct IMachineGetTeleporterAddressResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setTeleporterAddress")]
pub struct IMachineSetTeleporterAddress {
    #[wire(rename = "_this")]
    pub this: String,
    pub teleporter_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setTeleporterAddressResponse", default)]
pub struct IMachineSetTeleporterAddressResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getTeleporterPassword")]
pub struct IMachineGetTeleporterPassword {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getTeleporterPasswordResponse", default)]
pub struct IMachineGetTeleporterPasswordResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setTeleporterPassword")]
pub struct IMachineSetTeleporterPassword {
    #[wire(rename = "_this")]
    pub this: String,
    pub teleporter_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setTeleporterPasswordResponse", default)]
pub struct IMachineSetTeleporterPasswordResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getParavirtProvider")]
pub struct IMachineGetParavirtProvider {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getParavirtProviderResponse", default)]
pub struct IMachineGetParavirtProviderResponse {
    pub returnval: ParavirtProvider,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setParavirtProvider")]
pub struct IMachineSetParavirtProvider {
    #[wire(rename = "_this")]
    pub this: String,
    pub paravirt_provider: ParavirtProvider,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setParavirtProviderResponse", default)]
pub struct IMachineSetParavirtProviderResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getRTCUseUTC")]
pub struct IMachineGetRTCUseUTC {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getRTCUseUTCResponse", default)]
pub struct IMachineGetRTCUseUTCResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setRTCUseUTC")]
pub struct IMachineSetRTCUseUTC {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "RTCUseUTC")]
    pub rtc_use_utc: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setRTCUseUTCResponse", default)]
pub struct IMachineSetRTCUseUTCResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getIOCacheEnabled")]
pub struct IMachineGetIOCacheEnabled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getIOCacheEnabledResponse", default)]
pub struct IMachineGetIOCacheEnabledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setIOCacheEnabled")]
pub struct IMachineSetIOCacheEnabled {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "IOCacheEnabled")]
    pub io_cache_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setIOCacheEnabledResponse", default)]
pub struct IMachineSetIOCacheEnabledResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getIOCacheSize")]
pub struct IMachineGetIOCacheSize {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getIOCacheSizeResponse", default)]
pub struct IMachineGetIOCacheSizeResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setIOCacheSize")]
pub struct IMachineSetIOCacheSize {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "IOCacheSize")]
    pub io_cache_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setIOCacheSizeResponse", default)]
pub struct IMachineSetIOCacheSizeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getAutostartEnabled")]
pub struct IMachineGetAutostartEnabled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getAutostartEnabledResponse", default)]
pub struct IMachineGetAutostartEnabledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setAutostartEnabled")]
pub struct IMachineSetAutostartEnabled {
    #[wire(rename = "_this")]
    pub this: String,
    pub autostart_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setAutostartEnabledResponse", default)]
pub struct IMachineSetAutostartEnabledResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getAutostartDelay")]
pub struct IMachineGetAutostartDelay {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getAutostartDelayResponse", default)]
pub struct IMachineGetAutostartDelayResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setAutostartDelay")]
pub struct IMachineSetAutostartDelay {
    #[wire(rename = "_this")]
    pub this: String,
    pub autostart_delay: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setAutostartDelayResponse", default)]
pub struct IMachineSetAutostartDelayResponse {}

/// Locks the machine for the given session object.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_lockMachine")]
pub struct IMachineLockMachine {
    #[wire(rename = "_this")]
    pub this: String,
    pub session: String,
    pub lock_type: LockType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_lockMachineResponse", default)]
pub struct IMachineLockMachineResponse {}

/// Starts the machine in a new process and returns an `IProgress` reference.
///
/// `name` selects the frontend, for example `headless` or `gui`.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_launchVMProcess")]
pub struct IMachineLaunchVMProcess {
    #[wire(rename = "_this")]
    pub this: String,
    pub session: String,
    pub name: String,
    pub environment_changes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_launchVMProcessResponse", default)]
pub struct IMachineLaunchVMProcessResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setBootOrder")]
pub struct IMachineSetBootOrder {
    #[wire(rename = "_this")]
    pub this: String,
    pub position: u32,
    pub device: DeviceType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setBootOrderResponse", default)]
pub struct IMachineSetBootOrderResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getBootOrder")]
pub struct IMachineGetBootOrder {
    #[wire(rename = "_this")]
    pub this: String,
    pub position: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getBootOrderResponse", default)]
pub struct IMachineGetBootOrderResponse {
    pub returnval: DeviceType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_attachDevice")]
pub struct IMachineAttachDevice {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
    pub r#type: DeviceType,
    pub medium: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_attachDeviceResponse", default)]
pub struct IMachineAttachDeviceResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_attachDeviceWithoutMedium")]
pub struct IMachineAttachDeviceWithoutMedium {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
    pub r#type: DeviceType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_attachDeviceWithoutMediumResponse", default)]
pub struct IMachineAttachDeviceWithoutMediumResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_detachDevice")]
pub struct IMachineDetachDevice {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_detachDeviceResponse", default)]
pub struct IMachineDetachDeviceResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_passthroughDevice")]
pub struct IMachinePassthroughDevice {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
    pub passthrough: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_passthroughDeviceResponse", default)]
pub struct IMachinePassthroughDeviceResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_temporaryEjectDevice")]
pub struct IMachineTemporaryEjectDevice {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
    pub temporary_eject: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_temporaryEjectDeviceResponse", default)]
pub struct IMachineTemporaryEjectDeviceResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_nonRotationalDevice")]
pub struct IMachineNonRotationalDevice {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
    pub non_rotational: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_nonRotationalDeviceResponse", default)]
pub struct IMachineNonRotationalDeviceResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setAutoDiscardForDevice")]
pub struct IMachineSetAutoDiscardForDevice {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
    pub discard: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setAutoDiscardForDeviceResponse", default)]
pub struct IMachineSetAutoDiscardForDeviceResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setHotPluggableForDevice")]
pub struct IMachineSetHotPluggableForDevice {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
    pub hot_pluggable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setHotPluggableForDeviceResponse", default)]
pub struct IMachineSetHotPluggableForDeviceResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_unmountMedium")]
pub struct IMachineUnmountMedium {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
    pub force: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_unmountMediumResponse", default)]
pub struct IMachineUnmountMediumResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_mountMedium")]
pub struct IMachineMountMedium {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
    pub medium: String,
    pub force: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_mountMediumResponse", default)]
pub struct IMachineMountMediumResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMedium")]
pub struct IMachineGetMedium {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMediumResponse", default)]
pub struct IMachineGetMediumResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMediumAttachmentsOfController")]
pub struct IMachineGetMediumAttachmentsOfController {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMediumAttachmentsOfControllerResponse", default)]
pub struct IMachineGetMediumAttachmentsOfControllerResponse {
    pub returnval: Vec<IMediumAttachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMediumAttachment")]
pub struct IMachineGetMediumAttachment {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub controller_port: i32,
    pub device: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getMediumAttachmentResponse", default)]
pub struct IMachineGetMediumAttachmentResponse {
    pub returnval: IMediumAttachment,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getNetworkAdapter")]
pub struct IMachineGetNetworkAdapter {
    #[wire(rename = "_this")]
    pub this: String,
    pub slot: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getNetworkAdapterResponse", default)]
pub struct IMachineGetNetworkAdapterResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_addStorageController")]
pub struct IMachineAddStorageController {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub connection_type: StorageBus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_addStorageControllerResponse", default)]
pub struct IMachineAddStorageControllerResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getStorageControllerByName")]
pub struct IMachineGetStorageControllerByName {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getStorageControllerByNameResponse", default)]
pub struct IMachineGetStorageControllerByNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getStorageControllerByInstance")]
pub struct IMachineGetStorageControllerByInstance {
    #[wire(rename = "_this")]
    pub this: String,
    pub connection_type: StorageBus,
    pub instance: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getStorageControllerByInstanceResponse", default)]
pub struct IMachineGetStorageControllerByInstanceResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_removeStorageController")]
pub struct IMachineRemoveStorageController {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_removeStorageControllerResponse", default)]
pub struct IMachineRemoveStorageControllerResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setStorageControllerBootable")]
pub struct IMachineSetStorageControllerBootable {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub bootable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setStorageControllerBootableResponse", default)]
pub struct IMachineSetStorageControllerBootableResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSerialPort")]
pub struct IMachineGetSerialPort {
    #[wire(rename = "_this")]
    pub this: String,
    pub slot: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getSerialPortResponse", default)]
pub struct IMachineGetSerialPortResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getParallelPort")]
pub struct IMachineGetParallelPort {
    #[wire(rename = "_this")]
    pub this: String,
    pub slot: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getParallelPortResponse", default)]
pub struct IMachineGetParallelPortResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getExtraDataKeys")]
pub struct IMachineGetExtraDataKeys {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getExtraDataKeysResponse", default)]
pub struct IMachineGetExtraDataKeysResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getExtraData")]
pub struct IMachineGetExtraData {
    #[wire(rename = "_this")]
    pub this: String,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getExtraDataResponse", default)]
pub struct IMachineGetExtraDataResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setExtraData")]
pub struct IMachineSetExtraData {
    #[wire(rename = "_this")]
    pub this: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setExtraDataResponse", default)]
pub struct IMachineSetExtraDataResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUProperty")]
pub struct IMachineGetCPUProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub property: CPUPropertyType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUPropertyResponse", default)]
pub struct IMachineGetCPUPropertyResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setCPUProperty")]
pub struct IMachineSetCPUProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub property: CPUPropertyType,
    pub value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setCPUPropertyResponse", default)]
pub struct IMachineSetCPUPropertyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getHWVirtExProperty")]
pub struct IMachineGetHWVirtExProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub property: HWVirtExPropertyType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getHWVirtExPropertyResponse", default)]
pub struct IMachineGetHWVirtExPropertyResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setHWVirtExProperty")]
pub struct IMachineSetHWVirtExProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub property: HWVirtExPropertyType,
    pub value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setHWVirtExPropertyResponse", default)]
pub struct IMachineSetHWVirtExPropertyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_saveSettings")]
pub struct IMachineSaveSettings {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_saveSettingsResponse", default)]
pub struct IMachineSaveSettingsResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_discardSettings")]
pub struct IMachineDiscardSettings {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_discardSettingsResponse", default)]
pub struct IMachineDiscardSettingsResponse {}

/// Returns the media that were detached, depending on `cleanup_mode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_unregister")]
pub struct IMachineUnregister {
    #[wire(rename = "_this")]
    pub this: String,
    pub cleanup_mode: CleanupMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_unregisterResponse", default)]
pub struct IMachineUnregisterResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_deleteConfig")]
pub struct IMachineDeleteConfig {
    #[wire(rename = "_this")]
    pub this: String,
    pub media: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_deleteConfigResponse", default)]
pub struct IMachineDeleteConfigResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_findSnapshot")]
pub struct IMachineFindSnapshot {
    #[wire(rename = "_this")]
    pub this: String,
    pub name_or_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_findSnapshotResponse", default)]
pub struct IMachineFindSnapshotResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_createSharedFolder")]
pub struct IMachineCreateSharedFolder {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub host_path: String,
    pub writable: bool,
    pub automount: bool,
    pub auto_mount_point: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_createSharedFolderResponse", default)]
pub struct IMachineCreateSharedFolderResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_removeSharedFolder")]
pub struct IMachineRemoveSharedFolder {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_removeSharedFolderResponse", default)]
pub struct IMachineRemoveSharedFolderResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_canShowConsoleWindow")]
pub struct IMachineCanShowConsoleWindow {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_canShowConsoleWindowResponse", default)]
pub struct IMachineCanShowConsoleWindowResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_showConsoleWindow")]
pub struct IMachineShowConsoleWindow {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_showConsoleWindowResponse", default)]
pub struct IMachineShowConsoleWindowResponse {
    pub returnval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getGuestProperty")]
pub struct IMachineGetGuestProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getGuestPropertyResponse", default)]
pub struct IMachineGetGuestPropertyResponse {
    pub value: String,
    pub timestamp: i64,
    pub flags: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getGuestPropertyValue")]
pub struct IMachineGetGuestPropertyValue {
    #[wire(rename = "_this")]
    pub this: String,
    pub property: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getGuestPropertyValueResponse", default)]
pub struct IMachineGetGuestPropertyValueResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getGuestPropertyTimestamp")]
pub struct IMachineGetGuestPropertyTimestamp {
    #[wire(rename = "_this")]
    pub this: String,
    pub property: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getGuestPropertyTimestampResponse", default)]
pub struct IMachineGetGuestPropertyTimestampResponse {
    pub returnval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setGuestProperty")]
pub struct IMachineSetGuestProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub property: String,
    pub value: String,
    pub flags: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setGuestPropertyResponse", default)]
pub struct IMachineSetGuestPropertyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setGuestPropertyValue")]
pub struct IMachineSetGuestPropertyValue {
    #[wire(rename = "_this")]
    pub this: String,
    pub property: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_setGuestPropertyValueResponse", default)]
pub struct IMachineSetGuestPropertyValueResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_deleteGuestProperty")]
pub struct IMachineDeleteGuestProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_deleteGuestPropertyResponse", default)]
pub struct IMachineDeleteGuestPropertyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_enumerateGuestProperties")]
pub struct IMachineEnumerateGuestProperties {
    #[wire(rename = "_this")]
    pub this: String,
    pub patterns: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_enumerateGuestPropertiesResponse", default)]
pub struct IMachineEnumerateGuestPropertiesResponse {
    pub names: Vec<String>,
    pub values: Vec<String>,
    pub timestamps: Vec<i64>,
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_querySavedGuestScreenInfo")]
pub struct IMachineQuerySavedGuestScreenInfo {
    #[wire(rename = "_this")]
    pub this: String,
    pub screen_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_querySavedGuestScreenInfoResponse", default)]
pub struct IMachineQuerySavedGuestScreenInfoResponse {
    pub origin_x: u32,
    pub origin_y: u32,
    pub width: u32,
    pub height: u32,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_readSavedThumbnailToArray")]
pub struct IMachineReadSavedThumbnailToArray {
    #[wire(rename = "_this")]
    pub this: String,
    pub screen_id: u32,
    pub bitmap_format: BitmapFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_readSavedThumbnailToArrayResponse", default)]
pub struct IMachineReadSavedThumbnailToArrayResponse {
    pub width: u32,
    pub height: u32,
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_querySavedScreenshotInfo")]
pub struct IMachineQuerySavedScreenshotInfo {
    #[wire(rename = "_this")]
    pub this: String,
    pub screen_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_querySavedScreenshotInfoResponse", default)]
pub struct IMachineQuerySavedScreenshotInfoResponse {
    pub width: u32,
    pub height: u32,
    pub returnval: Vec<BitmapFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_readSavedScreenshotToArray")]
pub struct IMachineReadSavedScreenshotToArray {
    #[wire(rename = "_this")]
    pub this: String,
    pub screen_id: u32,
    pub bitmap_format: BitmapFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_readSavedScreenshotToArrayResponse", default)]
pub struct IMachineReadSavedScreenshotToArrayResponse {
    pub width: u32,
    pub height: u32,
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_hotPlugCPU")]
pub struct IMachineHotPlugCPU {
    #[wire(rename = "_this")]
    pub this: String,
    pub cpu: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_hotPlugCPUResponse", default)]
pub struct IMachineHotPlugCPUResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_hotUnplugCPU")]
pub struct IMachineHotUnplugCPU {
    #[wire(rename = "_this")]
    pub this: String,
    pub cpu: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_hotUnplugCPUResponse", default)]
pub struct IMachineHotUnplugCPUResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUStatus")]
pub struct IMachineGetCPUStatus {
    #[wire(rename = "_this")]
    pub this: String,
    pub cpu: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_getCPUStatusResponse", default)]
pub struct IMachineGetCPUStatusResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_queryLogFilename")]
pub struct IMachineQueryLogFilename {
    #[wire(rename = "_this")]
    pub this: String,
    pub idx: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_queryLogFilenameResponse", default)]
pub struct IMachineQueryLogFilenameResponse {
    pub returnval: String,
}

/// The log chunk is returned base64 encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_readLog")]
pub struct IMachineReadLog {
    #[wire(rename = "_this")]
    pub this: String,
    pub idx: u32,
    pub offset: i64,
    pub size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_readLogResponse", default)]
pub struct IMachineReadLogResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_cloneTo")]
pub struct IMachineCloneTo {
    #[wire(rename = "_this")]
    pub this: String,
    pub target: String,
    pub mode: CloneMode,
    pub options: Vec<CloneOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_cloneToResponse", default)]
pub struct IMachineCloneToResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_saveState")]
pub struct IMachineSaveState {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_saveStateResponse", default)]
pub struct IMachineSaveStateResponse {
    pub returnval: String,
}

/// Returns the new snapshot id in `id` and an `IProgress` reference in `returnval`.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_takeSnapshot")]
pub struct IMachineTakeSnapshot {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub description: String,
    pub pause: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_takeSnapshotResponse", default)]
pub struct IMachineTakeSnapshotResponse {
    pub id: String,
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_deleteSnapshot")]
pub struct IMachineDeleteSnapshot {
    #[wire(rename = "_this")]
    pub this: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_deleteSnapshotResponse", default)]
pub struct IMachineDeleteSnapshotResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_deleteSnapshotAndAllChildren")]
pub struct IMachineDeleteSnapshotAndAllChildren {
    #[wire(rename = "_this")]
    pub this: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_deleteSnapshotAndAllChildrenResponse", default)]
pub struct IMachineDeleteSnapshotAndAllChildrenResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_restoreSnapshot")]
pub struct IMachineRestoreSnapshot {
    #[wire(rename = "_this")]
    pub this: String,
    pub snapshot: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_restoreSnapshotResponse", default)]
pub struct IMachineRestoreSnapshotResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_discardSavedState")]
pub struct IMachineDiscardSavedState {
    #[wire(rename = "_this")]
    pub this: String,
    pub f_remove_file: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_discardSavedStateResponse", default)]
pub struct IMachineDiscardSavedStateResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_applyDefaults")]
pub struct IMachineApplyDefaults {
    #[wire(rename = "_this")]
    pub this: String,
    pub flags: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMachine_applyDefaultsResponse", default)]
pub struct IMachineApplyDefaultsResponse {}
