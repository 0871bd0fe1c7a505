//! Control of a running machine, reached through a locked session.

use crate::enums::{DeviceActivity, DeviceType, MachineState};
use crate::structs::IVRDEServerInfo;
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getMachine")]
pub struct IConsoleGetMachine {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getMachineResponse", default)]
pub struct IConsoleGetMachineResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getState")]
pub struct IConsoleGetState {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getStateResponse", default)]
pub struct IConsoleGetStateResponse {
    pub returnval: MachineState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getGuest")]
pub struct IConsoleGetGuest {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getGuestResponse", default)]
pub struct IConsoleGetGuestResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getKeyboard")]
pub struct IConsoleGetKeyboard {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getKeyboardResponse", default)]
pub struct IConsoleGetKeyboardResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getMouse")]
pub struct IConsoleGetMouse {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getMouseResponse", default)]
pub struct IConsoleGetMouseResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getDisplay")]
pub struct IConsoleGetDisplay {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getDisplayResponse", default)]
pub struct IConsoleGetDisplayResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getEventSource")]
pub struct IConsoleGetEventSource {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getEventSourceResponse", default)]
pub struct IConsoleGetEventSourceResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getUseHostClipboard")]
pub struct IConsoleGetUseHostClipboard {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getUseHostClipboardResponse", default)]
pub struct IConsoleGetUseHostClipboardResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_setUseHostClipboard")]
pub struct IConsoleSetUseHostClipboard {
    #[wire(rename = "_this")]
    pub this: String,
    pub use_host_clipboard: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_setUseHostClipboardResponse", default)]
pub struct IConsoleSetUseHostClipboardResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getVRDEServerInfo")]
pub struct IConsoleGetVRDEServerInfo {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getVRDEServerInfoResponse", default)]
pub struct IConsoleGetVRDEServerInfoResponse {
    pub returnval: IVRDEServerInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_powerUp")]
pub struct IConsolePowerUp {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_powerUpResponse", default)]
pub struct IConsolePowerUpResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_powerUpPaused")]
pub struct IConsolePowerUpPaused {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_powerUpPausedResponse", default)]
pub struct IConsolePowerUpPausedResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_reset")]
pub struct IConsoleReset {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_resetResponse", default)]
pub struct IConsoleResetResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_pause")]
pub struct IConsolePause {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_pauseResponse", default)]
pub struct IConsolePauseResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_resume")]
pub struct IConsoleResume {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_resumeResponse", default)]
pub struct IConsoleResumeResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_powerButton")]
pub struct IConsolePowerButton {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_powerButtonResponse", default)]
pub struct IConsolePowerButtonResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_sleepButton")]
pub struct IConsoleSleepButton {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_sleepButtonResponse", default)]
pub struct IConsoleSleepButtonResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getPowerButtonHandled")]
pub struct IConsoleGetPowerButtonHandled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getPowerButtonHandledResponse", default)]
pub struct IConsoleGetPowerButtonHandledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getGuestEnteredACPIMode")]
pub struct IConsoleGetGuestEnteredACPIMode {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getGuestEnteredACPIModeResponse", default)]
pub struct IConsoleGetGuestEnteredACPIModeResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getDeviceActivity")]
pub struct IConsoleGetDeviceActivity {
    #[wire(rename = "_this")]
    pub this: String,
    pub r#type: Vec<DeviceType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_getDeviceActivityResponse", default)]
pub struct IConsoleGetDeviceActivityResponse {
    pub returnval: Vec<DeviceActivity>,
}

/// Returns an `IProgress` reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_powerDown")]
pub struct IConsolePowerDown {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_powerDownResponse", default)]
pub struct IConsolePowerDownResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_attachUSBDevice")]
pub struct IConsoleAttachUSBDevice {
    #[wire(rename = "_this")]
    pub this: String,
    pub id: String,
    pub capture_filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_attachUSBDeviceResponse", default)]
pub struct IConsoleAttachUSBDeviceResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_detachUSBDevice")]
pub struct IConsoleDetachUSBDevice {
    #[wire(rename = "_this")]
    pub this: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_detachUSBDeviceResponse", default)]
pub struct IConsoleDetachUSBDeviceResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_createSharedFolder")]
pub struct IConsoleCreateSharedFolder {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
    pub host_path: String,
    pub writable: bool,
    pub automount: bool,
    pub auto_mount_point: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_createSharedFolderResponse", default)]
pub struct IConsoleCreateSharedFolderResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_removeSharedFolder")]
pub struct IConsoleRemoveSharedFolder {
    #[wire(rename = "_this")]
    pub this: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_removeSharedFolderResponse", default)]
pub struct IConsoleRemoveSharedFolderResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_teleport")]
pub struct IConsoleTeleport {
    #[wire(rename = "_this")]
    pub this: String,
    pub hostname: String,
    pub tcpport: u32,
    pub password: String,
    pub max_downtime: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_teleportResponse", default)]
pub struct IConsoleTeleportResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_addDiskEncryptionPassword")]
pub struct IConsoleAddDiskEncryptionPassword {
    #[wire(rename = "_this")]
    pub this: String,
    pub id: String,
    pub password: String,
    pub clear_on_suspend: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_addDiskEncryptionPasswordResponse", default)]
pub struct IConsoleAddDiskEncryptionPasswordResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_removeDiskEncryptionPassword")]
pub struct IConsoleRemoveDiskEncryptionPassword {
    #[wire(rename = "_this")]
    pub this: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_removeDiskEncryptionPasswordResponse", default)]
pub struct IConsoleRemoveDiskEncryptionPasswordResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_clearAllDiskEncryptionPasswords")]
pub struct IConsoleClearAllDiskEncryptionPasswords {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IConsole_clearAllDiskEncryptionPasswordsResponse", default)]
pub struct IConsoleClearAllDiskEncryptionPasswordsResponse {}
