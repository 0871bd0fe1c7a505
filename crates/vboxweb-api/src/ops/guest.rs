//! Guest side information, available while the machine runs.

use crate::enums::{AdditionsRunLevelType, AdditionsUpdateFlag};
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getOSTypeId")]
pub struct IGuestGetOSTypeId {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getOSTypeIdResponse", default)]
pub struct IGuestGetOSTypeIdResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getAdditionsRunLevel")]
pub struct IGuestGetAdditionsRunLevel {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getAdditionsRunLevelResponse", default)]
pub struct IGuestGetAdditionsRunLevelResponse {
    pub returnval: AdditionsRunLevelType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getAdditionsVersion")]
pub struct IGuestGetAdditionsVersion {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getAdditionsVersionResponse", default)]
pub struct IGuestGetAdditionsVersionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getAdditionsRevision")]
pub struct IGuestGetAdditionsRevision {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getAdditionsRevisionResponse", default)]
pub struct IGuestGetAdditionsRevisionResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getSessions")]
pub struct IGuestGetSessions {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getSessionsResponse", default)]
pub struct IGuestGetSessionsResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getMemoryBalloonSize")]
pub struct IGuestGetMemoryBalloonSize {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getMemoryBalloonSizeResponse", default)]
pub struct IGuestGetMemoryBalloonSizeResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_setMemoryBalloonSize")]
pub struct IGuestSetMemoryBalloonSize {
    #[wire(rename = "_this")]
    pub this: String,
    pub memory_balloon_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_setMemoryBalloonSizeResponse", default)]
pub struct IGuestSetMemoryBalloonSizeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getStatisticsUpdateInterval")]
pub struct IGuestGetStatisticsUpdateInterval {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getStatisticsUpdateIntervalResponse", default)]
pub struct IGuestGetStatisticsUpdateIntervalResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_setStatisticsUpdateInterval")]
pub struct IGuestSetStatisticsUpdateInterval {
    #[wire(rename = "_this")]
    pub this: String,
    pub statistics_update_interval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_setStatisticsUpdateIntervalResponse", default)]
pub struct IGuestSetStatisticsUpdateIntervalResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_internalGetStatistics")]
pub struct IGuestInternalGetStatistics {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_internalGetStatisticsResponse", default)]
pub struct IGuestInternalGetStatisticsResponse {
    pub cpu_user: u32,
    pub cpu_kernel: u32,
    pub cpu_idle: u32,
    pub mem_total: u32,
    pub mem_free: u32,
    pub mem_balloon: u32,
    pub mem_shared: u32,
    pub mem_cache: u32,
    pub paged_total: u32,
    pub mem_alloc_total: u32,
    pub mem_free_total: u32,
    pub mem_balloon_total: u32,
    pub mem_shared_total: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getAdditionsStatus")]
pub struct IGuestGetAdditionsStatus {
    #[wire(rename = "_this")]
    pub this: String,
    pub level: AdditionsRunLevelType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_getAdditionsStatusResponse", default)]
pub struct IGuestGetAdditionsStatusResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_setCredentials")]
pub struct IGuestSetCredentials {
    #[wire(rename = "_this")]
    pub this: String,
    pub user_name: String,
    pub password: String,
    pub domain: String,
    pub allow_interactive_logon: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_setCredentialsResponse", default)]
pub struct IGuestSetCredentialsResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_createSession")]
pub struct IGuestCreateSession {
    #[wire(rename = "_this")]
    pub this: String,
    pub user: String,
    pub password: String,
    pub domain: String,
    pub session_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_createSessionResponse", default)]
pub struct IGuestCreateSessionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_findSession")]
pub struct IGuestFindSession {
    #[wire(rename = "_this")]
    pub this: String,
    pub session_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_findSessionResponse", default)]
pub struct IGuestFindSessionResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_updateGuestAdditions")]
pub struct IGuestUpdateGuestAdditions {
    #[wire(rename = "_this")]
    pub this: String,
    pub source: String,
    pub arguments: Vec<String>,
    pub flags: Vec<AdditionsUpdateFlag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IGuest_updateGuestAdditionsResponse", default)]
pub struct IGuestUpdateGuestAdditionsResponse {
    pub returnval: String,
}
