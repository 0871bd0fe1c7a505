//! Virtual disks, optical and floppy images.

use crate::enums::{DeviceType, MediumState, MediumType, MediumVariant};
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getId")]
pub struct IMediumGetId {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getIdResponse", default)]
pub struct IMediumGetIdResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getDescription")]
pub struct IMediumGetDescription {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getDescriptionResponse", default)]
pub struct IMediumGetDescriptionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setDescription")]
pub struct IMediumSetDescription {
    #[wire(rename = "_this")]
    pub this: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setDescriptionResponse", default)]
pub struct IMediumSetDescriptionResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getState")]
pub struct IMediumGetState {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getStateResponse", default)]
pub struct IMediumGetStateResponse {
    pub returnval: MediumState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getVariant")]
pub struct IMediumGetVariant {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getVariantResponse", default)]
pub struct IMediumGetVariantResponse {
    pub returnval: Vec<MediumVariant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getLocation")]
pub struct IMediumGetLocation {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getLocationResponse", default)]
pub struct IMediumGetLocationResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getName")]
pub struct IMediumGetName {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getNameResponse", default)]
pub struct IMediumGetNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getDeviceType")]
pub struct IMediumGetDeviceType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getDeviceTypeResponse", default)]
pub struct IMediumGetDeviceTypeResponse {
    pub returnval: DeviceType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getHostDrive")]
pub struct IMediumGetHostDrive {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getHostDriveResponse", default)]
pub struct IMediumGetHostDriveResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getSize")]
pub struct IMediumGetSize {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getSizeResponse", default)]
pub struct IMediumGetSizeResponse {
    pub returnval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getFormat")]
pub struct IMediumGetFormat {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getFormatResponse", default)]
pub struct IMediumGetFormatResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getMediumFormat")]
pub struct IMediumGetMediumFormat {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getMediumFormatResponse", default)]
pub struct IMediumGetMediumFormatResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getType")]
pub struct IMediumGetType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getTypeResponse", default)]
pub struct IMediumGetTypeResponse {
    pub returnval: MediumType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setType")]
pub struct IMediumSetType {
    #[wire(rename = "_this")]
    pub this: String,
    pub r#type: MediumType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setTypeResponse", default)]
pub struct IMediumSetTypeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getAllowedTypes")]
pub struct IMediumGetAllowedTypes {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getAllowedTypesResponse", default)]
pub struct IMediumGetAllowedTypesResponse {
    pub returnval: Vec<MediumType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getParent")]
pub struct IMediumGetParent {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getParentResponse", default)]
pub struct IMediumGetParentResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getChildren")]
pub struct IMediumGetChildren {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getChildrenResponse", default)]
pub struct IMediumGetChildrenResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getBase")]
pub struct IMediumGetBase {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getBaseResponse", default)]
pub struct IMediumGetBaseResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getReadOnly")]
pub struct IMediumGetReadOnly {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getReadOnlyResponse", default)]
pub struct IMediumGetReadOnlyResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getLogicalSize")]
pub struct IMediumGetLogicalSize {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getLogicalSizeResponse", default)]
pub struct IMediumGetLogicalSizeResponse {
    pub returnval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getAutoReset")]
pub struct IMediumGetAutoReset {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getAutoResetResponse", default)]
pub struct IMediumGetAutoResetResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setAutoReset")]
pub struct IMediumSetAutoReset {
    #[wire(rename = "_this")]
    pub this: String,
    pub auto_reset: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setAutoResetResponse", default)]
pub struct IMediumSetAutoResetResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getLastAccessError")]
pub struct IMediumGetLastAccessError {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getLastAccessErrorResponse", default)]
pub struct IMediumGetLastAccessErrorResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getMachineIds")]
pub struct IMediumGetMachineIds {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getMachineIdsResponse", default)]
pub struct IMediumGetMachineIdsResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setIds")]
pub struct IMediumSetIds {
    #[wire(rename = "_this")]
    pub this: String,
    pub set_image_id: bool,
    pub image_id: String,
    pub set_parent_id: bool,
    pub parent_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setIdsResponse", default)]
pub struct IMediumSetIdsResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_refreshState")]
pub struct IMediumRefreshState {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_refreshStateResponse", default)]
pub struct IMediumRefreshStateResponse {
    pub returnval: MediumState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getSnapshotIds")]
pub struct IMediumGetSnapshotIds {
    #[wire(rename = "_this")]
    pub this: String,
    pub machine_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getSnapshotIdsResponse", default)]
pub struct IMediumGetSnapshotIdsResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_lockRead")]
pub struct IMediumLockRead {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_lockReadResponse", default)]
pub struct IMediumLockReadResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_lockWrite")]
pub struct IMediumLockWrite {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_lockWriteResponse", default)]
pub struct IMediumLockWriteResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_close")]
pub struct IMediumClose {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_closeResponse", default)]
pub struct IMediumCloseResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getProperty")]
pub struct IMediumGetProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getPropertyResponse", default)]
pub struct IMediumGetPropertyResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setProperty")]
pub struct IMediumSetProperty {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setPropertyResponse", default)]
pub struct IMediumSetPropertyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getProperties")]
pub struct IMediumGetProperties {
    #[wire(rename = "_this")]
    pub this: String,
    pub names: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_getPropertiesResponse", default)]
pub struct IMediumGetPropertiesResponse {
    pub return_names: Vec<String>,
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setProperties")]
pub struct IMediumSetProperties {
    #[wire(rename = "_this")]
    pub this: String,
    pub names: Vec<String>,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_setPropertiesResponse", default)]
pub struct IMediumSetPropertiesResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_createBaseStorage")]
pub struct IMediumCreateBaseStorage {
    #[wire(rename = "_this")]
    pub this: String,
    pub logical_size: i64,
    pub variant: Vec<MediumVariant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_createBaseStorageResponse", default)]
pub struct IMediumCreateBaseStorageResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_deleteStorage")]
pub struct IMediumDeleteStorage {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_deleteStorageResponse", default)]
pub struct IMediumDeleteStorageResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_createDiffStorage")]
pub struct IMediumCreateDiffStorage {
    #[wire(rename = "_this")]
    pub this: String,
    pub target: String,
    pub variant: Vec<MediumVariant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_createDiffStorageResponse", default)]
pub struct IMediumCreateDiffStorageResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_mergeTo")]
pub struct IMediumMergeTo {
    #[wire(rename = "_this")]
    pub this: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_mergeToResponse", default)]
pub struct IMediumMergeToResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_cloneTo")]
pub struct IMediumCloneTo {
    #[wire(rename = "_this")]
    pub this: String,
    pub target: String,
    pub variant: Vec<MediumVariant>,
    pub parent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_cloneToResponse", default)]
pub struct IMediumCloneToResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_cloneToBase")]
pub struct IMediumCloneToBase {
    #[wire(rename = "_this")]
    pub this: String,
    pub target: String,
    pub variant: Vec<MediumVariant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_cloneToBaseResponse", default)]
pub struct IMediumCloneToBaseResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_moveTo")]
pub struct IMediumMoveTo {
    #[wire(rename = "_this")]
    pub this: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_moveToResponse", default)]
pub struct IMediumMoveToResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_compact")]
pub struct IMediumCompact {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_compactResponse", default)]
pub struct IMediumCompactResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_resize")]
pub struct IMediumResize {
    #[wire(rename = "_this")]
    pub this: String,
    pub logical_size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_resizeResponse", default)]
pub struct IMediumResizeResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_reset")]
pub struct IMediumReset {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMedium_resetResponse", default)]
pub struct IMediumResetResponse {
    pub returnval: String,
}
