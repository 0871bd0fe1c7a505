//! The session object used to lock a machine.

use crate::enums::{SessionState, SessionType};
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_getState")]
pub struct ISessionGetState {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_getStateResponse", default)]
pub struct ISessionGetStateResponse {
    pub returnval: SessionState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_getType")]
pub struct ISessionGetType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_getTypeResponse", default)]
pub struct ISessionGetTypeResponse {
    pub returnval: SessionType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_getName")]
pub struct ISessionGetName {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_getNameResponse", default)]
pub struct ISessionGetNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_setName")]
pub struct ISessionSetName {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_setNameResponse", default)]
pub struct ISessionSetNameResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_getMachine")]
pub struct ISessionGetMachine {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_getMachineResponse", default)]
pub struct ISessionGetMachineResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_getConsole")]
pub struct ISessionGetConsole {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_getConsoleResponse", default)]
pub struct ISessionGetConsoleResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_unlockMachine")]
pub struct ISessionUnlockMachine {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISession_unlockMachineResponse", default)]
pub struct ISessionUnlockMachineResponse {}
