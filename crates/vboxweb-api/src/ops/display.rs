use crate::enums::{BitmapFormat, GuestMonitorStatus};
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_getScreenResolution")]
pub struct IDisplayGetScreenResolution {
    #[wire(rename = "_this")]
    pub this: String,
    pub screen_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_getScreenResolutionResponse", default)]
pub struct IDisplayGetScreenResolutionResponse {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    pub x_origin: i32,
    pub y_origin: i32,
    pub guest_monitor_status: GuestMonitorStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_setVideoModeHint")]
pub struct IDisplaySetVideoModeHint {
    #[wire(rename = "_this")]
    pub this: String,
    pub display: u32,
    pub enabled: bool,
    pub change_origin: bool,
    pub origin_x: i32,
    pub origin_y: i32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    pub notify: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_setVideoModeHintResponse", default)]
pub struct IDisplaySetVideoModeHintResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_setSeamlessMode")]
pub struct IDisplaySetSeamlessMode {
    #[wire(rename = "_this")]
    pub this: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_setSeamlessModeResponse", default)]
pub struct IDisplaySetSeamlessModeResponse {}

/// The image is returned base64 encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_takeScreenShotToArray")]
pub struct IDisplayTakeScreenShotToArray {
    #[wire(rename = "_this")]
    pub this: String,
    pub screen_id: u32,
    pub width: u32,
    pub height: u32,
    pub bitmap_format: BitmapFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_takeScreenShotToArrayResponse", default)]
pub struct IDisplayTakeScreenShotToArrayResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_invalidateAndUpdate")]
pub struct IDisplayInvalidateAndUpdate {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_invalidateAndUpdateResponse", default)]
pub struct IDisplayInvalidateAndUpdateResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_invalidateAndUpdateScreen")]
pub struct IDisplayInvalidateAndUpdateScreen {
    #[wire(rename = "_this")]
    pub this: String,
    pub screen_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_invalidateAndUpdateScreenResponse", default)]
pub struct IDisplayInvalidateAndUpdateScreenResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_detachScreens")]
pub struct IDisplayDetachScreens {
    #[wire(rename = "_this")]
    pub this: String,
    pub screen_ids: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_detachScreensResponse", default)]
pub struct IDisplayDetachScreensResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_notifyScaleFactorChange")]
pub struct IDisplayNotifyScaleFactorChange {
    #[wire(rename = "_this")]
    pub this: String,
    pub screen_id: u32,
    pub u32_scale_factor_w_multiplied: u32,
    pub u32_scale_factor_h_multiplied: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IDisplay_notifyScaleFactorChangeResponse", default)]
pub struct IDisplayNotifyScaleFactorChangeResponse {}
