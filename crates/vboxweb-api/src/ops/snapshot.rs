use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getId")]
pub struct ISnapshotGetId {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getIdResponse", default)]
pub struct ISnapshotGetIdResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getName")]
pub struct ISnapshotGetName {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getNameResponse", default)]
pub struct ISnapshotGetNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_setName")]
pub struct ISnapshotSetName {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_setNameResponse", default)]
pub struct ISnapshotSetNameResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getDescription")]
pub struct ISnapshotGetDescription {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getDescriptionResponse", default)]
pub struct ISnapshotGetDescriptionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_setDescription")]
pub struct ISnapshotSetDescription {
    #[wire(rename = "_this")]
    pub this: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_setDescriptionResponse", default)]
pub struct ISnapshotSetDescriptionResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getTimeStamp")]
pub struct ISnapshotGetTimeStamp {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getTimeStampResponse", default)]
pub struct ISnapshotGetTimeStampResponse {
    pub returnval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getOnline")]
pub struct ISnapshotGetOnline {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getOnlineResponse", default)]
pub struct ISnapshotGetOnlineResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getMachine")]
pub struct ISnapshotGetMachine {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getMachineResponse", default)]
pub struct ISnapshotGetMachineResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getParent")]
pub struct ISnapshotGetParent {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getParentResponse", default)]
pub struct ISnapshotGetParentResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getChildren")]
pub struct ISnapshotGetChildren {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getChildrenResponse", default)]
pub struct ISnapshotGetChildrenResponse {
    pub returnval: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getChildrenCount")]
pub struct ISnapshotGetChildrenCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "ISnapshot_getChildrenCountResponse", default)]
pub struct ISnapshotGetChildrenCountResponse {
    pub returnval: u32,
}
