use crate::enums::{StorageBus, StorageControllerType};
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getName")]
pub struct IStorageControllerGetName {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getNameResponse", default)]
pub struct IStorageControllerGetNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_setName")]
pub struct IStorageControllerSetName {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_setNameResponse", default)]
pub struct IStorageControllerSetNameResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getMaxDevicesPerPortCount")]
pub struct IStorageControllerGetMaxDevicesPerPortCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getMaxDevicesPerPortCountResponse", default)]
pub struct IStorageControllerGetMaxDevicesPerPortCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getMinPortCount")]
pub struct IStorageControllerGetMinPortCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getMinPortCountResponse", default)]
pub struct IStorageControllerGetMinPortCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getMaxPortCount")]
pub struct IStorageControllerGetMaxPortCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getMaxPortCountResponse", default)]
pub struct IStorageControllerGetMaxPortCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getInstance")]
pub struct IStorageControllerGetInstance {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getInstanceResponse", default)]
pub struct IStorageControllerGetInstanceResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_setInstance")]
pub struct IStorageControllerSetInstance {
    #[wire(rename = "_this")]
    pub this: String,
    pub instance: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_setInstanceResponse", default)]
pub struct IStorageControllerSetInstanceResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getPortCount")]
pub struct IStorageControllerGetPortCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getPortCountResponse", default)]
pub struct IStorageControllerGetPortCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_setPortCount")]
pub struct IStorageControllerSetPortCount {
    #[wire(rename = "_this")]
    pub this: String,
    pub port_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_setPortCountResponse", default)]
pub struct IStorageControllerSetPortCountResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getBus")]
pub struct IStorageControllerGetBus {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getBusResponse", default)]
pub struct IStorageControllerGetBusResponse {
    pub returnval: StorageBus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getControllerType")]
pub struct IStorageControllerGetControllerType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getControllerTypeResponse", default)]
pub struct IStorageControllerGetControllerTypeResponse {
    pub returnval: StorageControllerType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_setControllerType")]
pub struct IStorageControllerSetControllerType {
    #[wire(rename = "_this")]
    pub this: String,
    pub controller_type: StorageControllerType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_setControllerTypeResponse", default)]
pub struct IStorageControllerSetControllerTypeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getUseHostIOCache")]
pub struct IStorageControllerGetUseHostIOCache {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getUseHostIOCacheResponse", default)]
pub struct IStorageControllerGetUseHostIOCacheResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_setUseHostIOCache")]
pub struct IStorageControllerSetUseHostIOCache {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "useHostIOCache")]
    pub use_host_io_cache: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_setUseHostIOCacheResponse", default)]
pub struct IStorageControllerSetUseHostIOCacheResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getBootable")]
pub struct IStorageControllerGetBootable {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IStorageController_getBootableResponse", default)]
pub struct IStorageControllerGetBootableResponse {
    pub returnval: bool,
}
