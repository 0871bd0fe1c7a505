use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_getAbsoluteSupported")]
pub struct IMouseGetAbsoluteSupported {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_getAbsoluteSupportedResponse", default)]
pub struct IMouseGetAbsoluteSupportedResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_getRelativeSupported")]
pub struct IMouseGetRelativeSupported {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_getRelativeSupportedResponse", default)]
pub struct IMouseGetRelativeSupportedResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_getMultiTouchSupported")]
pub struct IMouseGetMultiTouchSupported {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_getMultiTouchSupportedResponse", default)]
pub struct IMouseGetMultiTouchSupportedResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_getNeedsHostCursor")]
pub struct IMouseGetNeedsHostCursor {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_getNeedsHostCursorResponse", default)]
pub struct IMouseGetNeedsHostCursorResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_getEventSource")]
pub struct IMouseGetEventSource {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_getEventSourceResponse", default)]
pub struct IMouseGetEventSourceResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_putMouseEvent")]
pub struct IMousePutMouseEvent {
    #[wire(rename = "_this")]
    pub this: String,
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
    pub dw: i32,
    pub button_state: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_putMouseEventResponse", default)]
pub struct IMousePutMouseEventResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_putMouseEventAbsolute")]
pub struct IMousePutMouseEventAbsolute {
    #[wire(rename = "_this")]
    pub this: String,
    pub x: i32,
    pub y: i32,
    pub dz: i32,
    pub dw: i32,
    pub button_state: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_putMouseEventAbsoluteResponse", default)]
pub struct IMousePutMouseEventAbsoluteResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_putEventMultiTouch")]
pub struct IMousePutEventMultiTouch {
    #[wire(rename = "_this")]
    pub this: String,
    pub count: i32,
    pub contacts: Vec<i64>,
    pub scan_time: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_putEventMultiTouchResponse", default)]
pub struct IMousePutEventMultiTouchResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_putEventMultiTouchString")]
pub struct IMousePutEventMultiTouchString {
    #[wire(rename = "_this")]
    pub this: String,
    pub count: i32,
    pub contacts: String,
    pub scan_time: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IMouse_putEventMultiTouchStringResponse", default)]
pub struct IMousePutEventMultiTouchStringResponse {}
