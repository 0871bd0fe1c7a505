//! Extended error information attached to progress objects.

use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getResultCode")]
pub struct IVirtualBoxErrorInfoGetResultCode {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getResultCodeResponse", default)]
pub struct IVirtualBoxErrorInfoGetResultCodeResponse {
    pub returnval: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getResultDetail")]
pub struct IVirtualBoxErrorInfoGetResultDetail {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getResultDetailResponse", default)]
pub struct IVirtualBoxErrorInfoGetResultDetailResponse {
    pub returnval: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getInterfaceID")]
pub struct IVirtualBoxErrorInfoGetInterfaceID {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getInterfaceIDResponse", default)]
pub struct IVirtualBoxErrorInfoGetInterfaceIDResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getComponent")]
pub struct IVirtualBoxErrorInfoGetComponent {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getComponentResponse", default)]
pub struct IVirtualBoxErrorInfoGetComponentResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getText")]
pub struct IVirtualBoxErrorInfoGetText {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getTextResponse", default)]
pub struct IVirtualBoxErrorInfoGetTextResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getNext")]
pub struct IVirtualBoxErrorInfoGetNext {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IVirtualBoxErrorInfo_getNextResponse", default)]
pub struct IVirtualBoxErrorInfoGetNextResponse {
    pub returnval: String,
}
