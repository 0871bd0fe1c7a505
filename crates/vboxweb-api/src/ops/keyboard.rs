use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_getEventSource")]
pub struct IKeyboardGetEventSource {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_getEventSourceResponse", default)]
pub struct IKeyboardGetEventSourceResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_putScancode")]
pub struct IKeyboardPutScancode {
    #[wire(rename = "_this")]
    pub this: String,
    pub scancode: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_putScancodeResponse", default)]
pub struct IKeyboardPutScancodeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_putScancodes")]
pub struct IKeyboardPutScancodes {
    #[wire(rename = "_this")]
    pub this: String,
    pub scancodes: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_putScancodesResponse", default)]
pub struct IKeyboardPutScancodesResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_putCAD")]
pub struct IKeyboardPutCAD {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_putCADResponse", default)]
pub struct IKeyboardPutCADResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_releaseKeys")]
pub struct IKeyboardReleaseKeys {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_releaseKeysResponse", default)]
pub struct IKeyboardReleaseKeysResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_putUsageCode")]
pub struct IKeyboardPutUsageCode {
    #[wire(rename = "_this")]
    pub this: String,
    pub usage_code: i32,
    pub usage_page: i32,
    pub key_release: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IKeyboard_putUsageCodeResponse", default)]
pub struct IKeyboardPutUsageCodeResponse {}
