//! One method per remote operation.
//!
//! Methods are named after the interface without its leading `I` and the
//! operation in snake case: `IMachine_getName` is
//! [`VboxPortType::machine_get_name`], taking an `IMachineGetName` and
//! returning an `IMachineGetNameResponse`.

use vboxweb_api::ops::*;

use crate::client::SoapClient;
use crate::error::VboxWebError;

/// Typed access to every covered operation of the web service.
#[derive(Debug, Clone)]
pub struct VboxPortType {
    client: SoapClient,
}

impl VboxPortType {
    pub fn new(client: SoapClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &SoapClient {
        &self.client
    }
}

macro_rules! port_operations {
    ($($method:ident => $request:ident;)*) => {
        paste::paste! {
            impl VboxPortType {
                $(
                    pub fn $method(
                        &self,
                        request: $request,
                    ) -> Result<[<$request Response>], VboxWebError> {
                        self.client.call("", request)
                    }
                )*
            }
        }
    };
}

port_operations! {
    // IWebsessionManager
    websession_manager_logon => IWebsessionManagerLogon;
    websession_manager_get_session_object => IWebsessionManagerGetSessionObject;
    websession_manager_logoff => IWebsessionManagerLogoff;
    // IManagedObjectRef
    managed_object_ref_get_interface_name => IManagedObjectRefGetInterfaceName;
    managed_object_ref_release => IManagedObjectRefRelease;
    // IVirtualBox
    virtualbox_get_version => IVirtualBoxGetVersion;
    virtualbox_get_version_normalized => IVirtualBoxGetVersionNormalized;
    virtualbox_get_revision => IVirtualBoxGetRevision;
    virtualbox_get_package_type => IVirtualBoxGetPackageType;
    virtualbox_get_api_version => IVirtualBoxGetAPIVersion;
    virtualbox_get_api_revision => IVirtualBoxGetAPIRevision;
    virtualbox_get_home_folder => IVirtualBoxGetHomeFolder;
    virtualbox_get_settings_file_path => IVirtualBoxGetSettingsFilePath;
    virtualbox_get_host => IVirtualBoxGetHost;
    virtualbox_get_system_properties => IVirtualBoxGetSystemProperties;
    virtualbox_get_machines => IVirtualBoxGetMachines;
    virtualbox_get_machine_groups => IVirtualBoxGetMachineGroups;
    virtualbox_get_hard_disks => IVirtualBoxGetHardDisks;
    virtualbox_get_dvd_images => IVirtualBoxGetDVDImages;
    virtualbox_get_floppy_images => IVirtualBoxGetFloppyImages;
    virtualbox_get_progress_operations => IVirtualBoxGetProgressOperations;
    virtualbox_get_guest_os_types => IVirtualBoxGetGuestOSTypes;
    virtualbox_get_performance_collector => IVirtualBoxGetPerformanceCollector;
    virtualbox_get_dhcp_servers => IVirtualBoxGetDHCPServers;
    virtualbox_get_nat_networks => IVirtualBoxGetNATNetworks;
    virtualbox_get_event_source => IVirtualBoxGetEventSource;
    virtualbox_get_internal_networks => IVirtualBoxGetInternalNetworks;
    virtualbox_get_generic_network_drivers => IVirtualBoxGetGenericNetworkDrivers;
    virtualbox_compose_machine_filename => IVirtualBoxComposeMachineFilename;
    virtualbox_create_machine => IVirtualBoxCreateMachine;
    virtualbox_open_machine => IVirtualBoxOpenMachine;
    virtualbox_register_machine => IVirtualBoxRegisterMachine;
    virtualbox_find_machine => IVirtualBoxFindMachine;
    virtualbox_get_machines_by_groups => IVirtualBoxGetMachinesByGroups;
    virtualbox_get_machine_states => IVirtualBoxGetMachineStates;
    virtualbox_create_medium => IVirtualBoxCreateMedium;
    virtualbox_open_medium => IVirtualBoxOpenMedium;
    virtualbox_get_guest_os_type => IVirtualBoxGetGuestOSType;
    virtualbox_create_shared_folder => IVirtualBoxCreateSharedFolder;
    virtualbox_remove_shared_folder => IVirtualBoxRemoveSharedFolder;
    virtualbox_get_extra_data_keys => IVirtualBoxGetExtraDataKeys;
    virtualbox_get_extra_data => IVirtualBoxGetExtraData;
    virtualbox_set_extra_data => IVirtualBoxSetExtraData;
    virtualbox_set_settings_secret => IVirtualBoxSetSettingsSecret;
    virtualbox_create_dhcp_server => IVirtualBoxCreateDHCPServer;
    virtualbox_find_dhcp_server_by_network_name => IVirtualBoxFindDHCPServerByNetworkName;
    virtualbox_remove_dhcp_server => IVirtualBoxRemoveDHCPServer;
    virtualbox_create_nat_network => IVirtualBoxCreateNATNetwork;
    virtualbox_find_nat_network_by_name => IVirtualBoxFindNATNetworkByName;
    virtualbox_remove_nat_network => IVirtualBoxRemoveNATNetwork;
    virtualbox_check_firmware_present => IVirtualBoxCheckFirmwarePresent;
    // IMachine
    machine_get_parent => IMachineGetParent;
    machine_get_icon => IMachineGetIcon;
    machine_set_icon => IMachineSetIcon;
    machine_get_accessible => IMachineGetAccessible;
    machine_get_access_error => IMachineGetAccessError;
    machine_get_name => IMachineGetName;
    machine_set_name => IMachineSetName;
    machine_get_description => IMachineGetDescription;
    machine_set_description => IMachineSetDescription;
    machine_get_id => IMachineGetId;
    machine_get_groups => IMachineGetGroups;
    machine_set_groups => IMachineSetGroups;
    machine_get_os_type_id => IMachineGetOSTypeId;
    machine_set_os_type_id => IMachineSetOSTypeId;
    machine_get_hardware_version => IMachineGetHardwareVersion;
    machine_set_hardware_version => IMachineSetHardwareVersion;
    machine_get_hardware_uuid => IMachineGetHardwareUUID;
    machine_set_hardware_uuid => IMachineSetHardwareUUID;
    machine_get_cpu_count => IMachineGetCPUCount;
    machine_set_cpu_count => IMachineSetCPUCount;
    machine_get_cpu_hot_plug_enabled => IMachineGetCPUHotPlugEnabled;
    machine_set_cpu_hot_plug_enabled => IMachineSetCPUHotPlugEnabled;
    machine_get_cpu_execution_cap => IMachineGetCPUExecutionCap;
    machine_set_cpu_execution_cap => IMachineSetCPUExecutionCap;
    machine_get_cpuid_portability_level => IMachineGetCPUIDPortabilityLevel;
    machine_set_cpuid_portability_level => IMachineSetCPUIDPortabilityLevel;
    machine_get_memory_size => IMachineGetMemorySize;
    machine_set_memory_size => IMachineSetMemorySize;
    machine_get_memory_balloon_size => IMachineGetMemoryBalloonSize;
    machine_set_memory_balloon_size => IMachineSetMemoryBalloonSize;
    machine_get_page_fusion_enabled => IMachineGetPageFusionEnabled;
    machine_set_page_fusion_enabled => IMachineSetPageFusionEnabled;
    machine_get_graphics_adapter => IMachineGetGraphicsAdapter;
    machine_get_bios_settings => IMachineGetBIOSSettings;
    machine_get_recording_settings => IMachineGetRecordingSettings;
    machine_get_firmware_type => IMachineGetFirmwareType;
    machine_set_firmware_type => IMachineSetFirmwareType;
    machine_get_pointing_hid_type => IMachineGetPointingHIDType;
    machine_set_pointing_hid_type => IMachineSetPointingHIDType;
    machine_get_keyboard_hid_type => IMachineGetKeyboardHIDType;
    machine_set_keyboard_hid_type => IMachineSetKeyboardHIDType;
    machine_get_hpet_enabled => IMachineGetHPETEnabled;
    machine_set_hpet_enabled => IMachineSetHPETEnabled;
    machine_get_chipset_type => IMachineGetChipsetType;
    machine_set_chipset_type => IMachineSetChipsetType;
    machine_get_snapshot_folder => IMachineGetSnapshotFolder;
    machine_set_snapshot_folder => IMachineSetSnapshotFolder;
    machine_get_vrde_server => IMachineGetVRDEServer;
    machine_get_emulated_usb_card_reader_enabled => IMachineGetEmulatedUSBCardReaderEnabled;
    machine_set_emulated_usb_card_reader_enabled => IMachineSetEmulatedUSBCardReaderEnabled;
    machine_get_medium_attachments => IMachineGetMediumAttachments;
    machine_get_usb_controllers => IMachineGetUSBControllers;
    machine_get_usb_device_filters => IMachineGetUSBDeviceFilters;
    machine_get_audio_adapter => IMachineGetAudioAdapter;
    machine_get_storage_controllers => IMachineGetStorageControllers;
    machine_get_settings_file_path => IMachineGetSettingsFilePath;
    machine_get_settings_aux_file_path => IMachineGetSettingsAuxFilePath;
    machine_get_settings_modified => IMachineGetSettingsModified;
    machine_get_session_state => IMachineGetSessionState;
    machine_get_session_name => IMachineGetSessionName;
    machine_get_session_pid => IMachineGetSessionPID;
    machine_get_state => IMachineGetState;
    machine_get_last_state_change => IMachineGetLastStateChange;
    machine_get_state_file_path => IMachineGetStateFilePath;
    machine_get_log_folder => IMachineGetLogFolder;
    machine_get_current_snapshot => IMachineGetCurrentSnapshot;
    machine_get_snapshot_count => IMachineGetSnapshotCount;
    machine_get_current_state_modified => IMachineGetCurrentStateModified;
    machine_get_clipboard_mode => IMachineGetClipboardMode;
    machine_set_clipboard_mode => IMachineSetClipboardMode;
    machine_get_teleporter_enabled => IMachineGetTeleporterEnabled;
    machine_set_teleporter_enabled => IMachineSetTeleporterEnabled;
    machine_get_teleporter_port => IMachineGetTeleporterPort;
    machine_set_teleporter_port => IMachineSetTeleporterPort;
    machine_get_teleporter_address => IMachineGetTeleporterAddress;
    machine_set_teleporter_address => IMachineSetTeleporterAddress;
    machine_get_teleporter_password => IMachineGetTeleporterPassword;
    machine_set_teleporter_password => IMachineSetTeleporterPassword;
    machine_get_paravirt_provider => IMachineGetParavirtProvider;
    machine_set_paravirt_provider => IMachineSetParavirtProvider;
    machine_get_rtc_use_utc => IMachineGetRTCUseUTC;
    machine_set_rtc_use_utc => IMachineSetRTCUseUTC;
    machine_get_io_cache_enabled => IMachineGetIOCacheEnabled;
    machine_set_io_cache_enabled => IMachineSetIOCacheEnabled;
    machine_get_io_cache_size => IMachineGetIOCacheSize;
    machine_set_io_cache_size => IMachineSetIOCacheSize;
    machine_get_autostart_enabled => IMachineGetAutostartEnabled;
    machine_set_autostart_enabled => IMachineSetAutostartEnabled;
    machine_get_autostart_delay => IMachineGetAutostartDelay;
    machine_set_autostart_delay => IMachineSetAutostartDelay;
    machine_lock_machine => IMachineLockMachine;
    machine_launch_vm_process => IMachineLaunchVMProcess;
    machine_set_boot_order => IMachineSetBootOrder;
    machine_get_boot_order => IMachineGetBootOrder;
    machine_attach_device => IMachineAttachDevice;
    machine_attach_device_without_medium => IMachineAttachDeviceWithoutMedium;
    machine_detach_device => IMachineDetachDevice;
    machine_passthrough_device => IMachinePassthroughDevice;
    machine_temporary_eject_device => IMachineTemporaryEjectDevice;
    machine_non_rotational_device => IMachineNonRotationalDevice;
    machine_set_auto_discard_for_device => IMachineSetAutoDiscardForDevice;
    machine_set_hot_pluggable_for_device => IMachineSetHotPluggableForDevice;
    machine_unmount_medium => IMachineUnmountMedium;
    machine_mount_medium => IMachineMountMedium;
    machine_get_medium => IMachineGetMedium;
    machine_get_medium_attachments_of_controller => IMachineGetMediumAttachmentsOfController;
    machine_get_medium_attachment => IMachineGetMediumAttachment;
    machine_get_network_adapter => IMachineGetNetworkAdapter;
    machine_add_storage_controller => IMachineAddStorageController;
    machine_get_storage_controller_by_name => IMachineGetStorageControllerByName;
    machine_get_storage_controller_by_instance => IMachineGetStorageControllerByInstance;
    machine_remove_storage_controller => IMachineRemoveStorageController;
    machine_set_storage_controller_bootable => IMachineSetStorageControllerBootable;
    machine_get_serial_port => IMachineGetSerialPort;
    machine_get_parallel_port => IMachineGetParallelPort;
    machine_get_extra_data_keys => IMachineGetExtraDataKeys;
    machine_get_extra_data => IMachineGetExtraData;
    machine_set_extra_data => IMachineSetExtraData;
    machine_get_cpu_property => IMachineGetCPUProperty;
    machine_set_cpu_property => IMachineSetCPUProperty;
    machine_get_hw_virt_ex_property => IMachineGetHWVirtExProperty;
    machine_set_hw_virt_ex_property => IMachineSetHWVirtExProperty;
    machine_save_settings => IMachineSaveSettings;
    machine_discard_settings => IMachineDiscardSettings;
    machine_unregister => IMachineUnregister;
    machine_delete_config => IMachineDeleteConfig;
    machine_find_snapshot => IMachineFindSnapshot;
    machine_create_shared_folder => IMachineCreateSharedFolder;
    machine_remove_shared_folder => IMachineRemoveSharedFolder;
    machine_can_show_console_window => IMachineCanShowConsoleWindow;
    machine_show_console_window => IMachineShowConsoleWindow;
    machine_get_guest_property => IMachineGetGuestProperty;
    machine_get_guest_property_value => IMachineGetGuestPropertyValue;
    machine_get_guest_property_timestamp => IMachineGetGuestPropertyTimestamp;
    machine_set_guest_property => IMachineSetGuestProperty;
    machine_set_guest_property_value => IMachineSetGuestPropertyValue;
    machine_delete_guest_property => IMachineDeleteGuestProperty;
    machine_enumerate_guest_properties => IMachineEnumerateGuestProperties;
    machine_query_saved_guest_screen_info => IMachineQuerySavedGuestScreenInfo;
    machine_read_saved_thumbnail_to_array => IMachineReadSavedThumbnailToArray;
    machine_query_saved_screenshot_info => IMachineQuerySavedScreenshotInfo;
    machine_read_saved_screenshot_to_array => IMachineReadSavedScreenshotToArray;
    machine_hot_plug_cpu => IMachineHotPlugCPU;
    machine_hot_unplug_cpu => IMachineHotUnplugCPU;
    machine_get_cpu_status => IMachineGetCPUStatus;
    machine_query_log_filename => IMachineQueryLogFilename;
    machine_read_log => IMachineReadLog;
    machine_clone_to => IMachineCloneTo;
    machine_save_state => IMachineSaveState;
    machine_take_snapshot => IMachineTakeSnapshot;
    machine_delete_snapshot => IMachineDeleteSnapshot;
    machine_delete_snapshot_and_all_children => IMachineDeleteSnapshotAndAllChildren;
    machine_restore_snapshot => IMachineRestoreSnapshot;
    machine_discard_saved_state => IMachineDiscardSavedState;
    machine_apply_defaults => IMachineApplyDefaults;
    // ISession
    session_get_state => ISessionGetState;
    session_get_type => ISessionGetType;
    session_get_name => ISessionGetName;
    session_set_name => ISessionSetName;
    session_get_machine => ISessionGetMachine;
    session_get_console => ISessionGetConsole;
    session_unlock_machine => ISessionUnlockMachine;
    // IConsole
    console_get_machine => IConsoleGetMachine;
    console_get_state => IConsoleGetState;
    console_get_guest => IConsoleGetGuest;
    console_get_keyboard => IConsoleGetKeyboard;
    console_get_mouse => IConsoleGetMouse;
    console_get_display => IConsoleGetDisplay;
    console_get_event_source => IConsoleGetEventSource;
    console_get_use_host_clipboard => IConsoleGetUseHostClipboard;
    console_set_use_host_clipboard => IConsoleSetUseHostClipboard;
    console_get_vrde_server_info => IConsoleGetVRDEServerInfo;
    console_power_up => IConsolePowerUp;
    console_power_up_paused => IConsolePowerUpPaused;
    console_reset => IConsoleReset;
    console_pause => IConsolePause;
    console_resume => IConsoleResume;
    console_power_button => IConsolePowerButton;
    console_sleep_button => IConsoleSleepButton;
    console_get_power_button_handled => IConsoleGetPowerButtonHandled;
    console_get_guest_entered_acpi_mode => IConsoleGetGuestEnteredACPIMode;
    console_get_device_activity => IConsoleGetDeviceActivity;
    console_power_down => IConsolePowerDown;
    console_attach_usb_device => IConsoleAttachUSBDevice;
    console_detach_usb_device => IConsoleDetachUSBDevice;
    console_create_shared_folder => IConsoleCreateSharedFolder;
    console_remove_shared_folder => IConsoleRemoveSharedFolder;
    console_teleport => IConsoleTeleport;
    console_add_disk_encryption_password => IConsoleAddDiskEncryptionPassword;
    console_remove_disk_encryption_password => IConsoleRemoveDiskEncryptionPassword;
    console_clear_all_disk_encryption_passwords => IConsoleClearAllDiskEncryptionPasswords;
    // IProgress
    progress_get_id => IProgressGetId;
    progress_get_description => IProgressGetDescription;
    progress_get_initiator => IProgressGetInitiator;
    progress_get_cancelable => IProgressGetCancelable;
    progress_get_percent => IProgressGetPercent;
    progress_get_time_remaining => IProgressGetTimeRemaining;
    progress_get_completed => IProgressGetCompleted;
    progress_get_canceled => IProgressGetCanceled;
    progress_get_result_code => IProgressGetResultCode;
    progress_get_error_info => IProgressGetErrorInfo;
    progress_get_operation_count => IProgressGetOperationCount;
    progress_get_operation => IProgressGetOperation;
    progress_get_operation_description => IProgressGetOperationDescription;
    progress_get_operation_percent => IProgressGetOperationPercent;
    progress_get_operation_weight => IProgressGetOperationWeight;
    progress_get_timeout => IProgressGetTimeout;
    progress_set_timeout => IProgressSetTimeout;
    progress_get_event_source => IProgressGetEventSource;
    progress_wait_for_completion => IProgressWaitForCompletion;
    progress_wait_for_operation_completion => IProgressWaitForOperationCompletion;
    progress_cancel => IProgressCancel;
    // IVirtualBoxErrorInfo
    virtualbox_error_info_get_result_code => IVirtualBoxErrorInfoGetResultCode;
    virtualbox_error_info_get_result_detail => IVirtualBoxErrorInfoGetResultDetail;
    virtualbox_error_info_get_interface_id => IVirtualBoxErrorInfoGetInterfaceID;
    virtualbox_error_info_get_component => IVirtualBoxErrorInfoGetComponent;
    virtualbox_error_info_get_text => IVirtualBoxErrorInfoGetText;
    virtualbox_error_info_get_next => IVirtualBoxErrorInfoGetNext;
    // ISnapshot
    snapshot_get_id => ISnapshotGetId;
    snapshot_get_name => ISnapshotGetName;
    snapshot_set_name => ISnapshotSetName;
    snapshot_get_description => ISnapshotGetDescription;
    snapshot_set_description => ISnapshotSetDescription;
    snapshot_get_time_stamp => ISnapshotGetTimeStamp;
    snapshot_get_online => ISnapshotGetOnline;
    snapshot_get_machine => ISnapshotGetMachine;
    snapshot_get_parent => ISnapshotGetParent;
    snapshot_get_children => ISnapshotGetChildren;
    snapshot_get_children_count => ISnapshotGetChildrenCount;
    // IMedium
    medium_get_id => IMediumGetId;
    medium_get_description => IMediumGetDescription;
    medium_set_description => IMediumSetDescription;
    medium_get_state => IMediumGetState;
    medium_get_variant => IMediumGetVariant;
    medium_get_location => IMediumGetLocation;
    medium_get_name => IMediumGetName;
    medium_get_device_type => IMediumGetDeviceType;
    medium_get_host_drive => IMediumGetHostDrive;
    medium_get_size => IMediumGetSize;
    medium_get_format => IMediumGetFormat;
    medium_get_medium_format => IMediumGetMediumFormat;
    medium_get_type => IMediumGetType;
    medium_set_type => IMediumSetType;
    medium_get_allowed_types => IMediumGetAllowedTypes;
    medium_get_parent => IMediumGetParent;
    medium_get_children => IMediumGetChildren;
    medium_get_base => IMediumGetBase;
    medium_get_read_only => IMediumGetReadOnly;
    medium_get_logical_size => IMediumGetLogicalSize;
    medium_get_auto_reset => IMediumGetAutoReset;
    medium_set_auto_reset => IMediumSetAutoReset;
    medium_get_last_access_error => IMediumGetLastAccessError;
    medium_get_machine_ids => IMediumGetMachineIds;
    medium_set_ids => IMediumSetIds;
    medium_refresh_state => IMediumRefreshState;
    medium_get_snapshot_ids => IMediumGetSnapshotIds;
    medium_lock_read => IMediumLockRead;
    medium_lock_write => IMediumLockWrite;
    medium_close => IMediumClose;
    medium_get_property => IMediumGetProperty;
    medium_set_property => IMediumSetProperty;
    medium_get_properties => IMediumGetProperties;
    medium_set_properties => IMediumSetProperties;
    medium_create_base_storage => IMediumCreateBaseStorage;
    medium_delete_storage => IMediumDeleteStorage;
    medium_create_diff_storage => IMediumCreateDiffStorage;
    medium_merge_to => IMediumMergeTo;
    medium_clone_to => IMediumCloneTo;
    medium_clone_to_base => IMediumCloneToBase;
    medium_move_to => IMediumMoveTo;
    medium_compact => IMediumCompact;
    medium_resize => IMediumResize;
    medium_reset => IMediumReset;
    // IStorageController
    storage_controller_get_name => IStorageControllerGetName;
    storage_controller_set_name => IStorageControllerSetName;
    storage_controller_get_max_devices_per_port_count => IStorageControllerGetMaxDevicesPerPortCount;
    storage_controller_get_min_port_count => IStorageControllerGetMinPortCount;
    storage_controller_get_max_port_count => IStorageControllerGetMaxPortCount;
    storage_controller_get_instance => IStorageControllerGetInstance;
    storage_controller_set_instance => IStorageControllerSetInstance;
    storage_controller_get_port_count => IStorageControllerGetPortCount;
    storage_controller_set_port_count => IStorageControllerSetPortCount;
    storage_controller_get_bus => IStorageControllerGetBus;
    storage_controller_get_controller_type => IStorageControllerGetControllerType;
    storage_controller_set_controller_type => IStorageControllerSetControllerType;
    storage_controller_get_use_host_io_cache => IStorageControllerGetUseHostIOCache;
    storage_controller_set_use_host_io_cache => IStorageControllerSetUseHostIOCache;
    storage_controller_get_bootable => IStorageControllerGetBootable;
    // IHost
    host_get_dvd_drives => IHostGetDVDDrives;
    host_get_floppy_drives => IHostGetFloppyDrives;
    host_get_network_interfaces => IHostGetNetworkInterfaces;
    host_get_name_servers => IHostGetNameServers;
    host_get_domain_name => IHostGetDomainName;
    host_get_search_strings => IHostGetSearchStrings;
    host_get_processor_count => IHostGetProcessorCount;
    host_get_processor_online_count => IHostGetProcessorOnlineCount;
    host_get_processor_core_count => IHostGetProcessorCoreCount;
    host_get_processor_online_core_count => IHostGetProcessorOnlineCoreCount;
    host_get_memory_size => IHostGetMemorySize;
    host_get_memory_available => IHostGetMemoryAvailable;
    host_get_operating_system => IHostGetOperatingSystem;
    host_get_os_version => IHostGetOSVersion;
    host_get_utc_time => IHostGetUTCTime;
    host_get_acceleration3_d_available => IHostGetAcceleration3DAvailable;
    host_get_processor_speed => IHostGetProcessorSpeed;
    host_get_processor_feature => IHostGetProcessorFeature;
    host_get_processor_description => IHostGetProcessorDescription;
    host_get_processor_cpuid_leaf => IHostGetProcessorCPUIDLeaf;
    host_create_host_only_network_interface => IHostCreateHostOnlyNetworkInterface;
    host_remove_host_only_network_interface => IHostRemoveHostOnlyNetworkInterface;
    host_find_host_dvd_drive => IHostFindHostDVDDrive;
    host_find_host_floppy_drive => IHostFindHostFloppyDrive;
    host_find_host_network_interface_by_name => IHostFindHostNetworkInterfaceByName;
    host_find_host_network_interface_by_id => IHostFindHostNetworkInterfaceById;
    host_find_host_network_interfaces_of_type => IHostFindHostNetworkInterfacesOfType;
    host_generate_mac_address => IHostGenerateMACAddress;
    // IHostNetworkInterface
    host_network_interface_get_name => IHostNetworkInterfaceGetName;
    host_network_interface_get_short_name => IHostNetworkInterfaceGetShortName;
    host_network_interface_get_id => IHostNetworkInterfaceGetId;
    host_network_interface_get_network_name => IHostNetworkInterfaceGetNetworkName;
    host_network_interface_get_dhcp_enabled => IHostNetworkInterfaceGetDHCPEnabled;
    host_network_interface_get_ip_address => IHostNetworkInterfaceGetIPAddress;
    host_network_interface_get_network_mask => IHostNetworkInterfaceGetNetworkMask;
    host_network_interface_get_ipv6_supported => IHostNetworkInterfaceGetIPV6Supported;
    host_network_interface_get_ipv6_address => IHostNetworkInterfaceGetIPV6Address;
    host_network_interface_get_ipv6_network_mask_prefix_length => IHostNetworkInterfaceGetIPV6NetworkMaskPrefixLength;
    host_network_interface_get_hardware_address => IHostNetworkInterfaceGetHardwareAddress;
    host_network_interface_get_medium_type => IHostNetworkInterfaceGetMediumType;
    host_network_interface_get_status => IHostNetworkInterfaceGetStatus;
    host_network_interface_get_interface_type => IHostNetworkInterfaceGetInterfaceType;
    host_network_interface_get_wireless => IHostNetworkInterfaceGetWireless;
    host_network_interface_enable_static_ip_config => IHostNetworkInterfaceEnableStaticIPConfig;
    host_network_interface_enable_static_ip_config_v6 => IHostNetworkInterfaceEnableStaticIPConfigV6;
    host_network_interface_enable_dynamic_ip_config => IHostNetworkInterfaceEnableDynamicIPConfig;
    host_network_interface_dhcp_rediscover => IHostNetworkInterfaceDHCPRediscover;
    // ISystemProperties
    system_properties_get_min_guest_ram => ISystemPropertiesGetMinGuestRAM;
    system_properties_get_max_guest_ram => ISystemPropertiesGetMaxGuestRAM;
    system_properties_get_min_guest_vram => ISystemPropertiesGetMinGuestVRAM;
    system_properties_get_max_guest_vram => ISystemPropertiesGetMaxGuestVRAM;
    system_properties_get_min_guest_cpu_count => ISystemPropertiesGetMinGuestCPUCount;
    system_properties_get_max_guest_cpu_count => ISystemPropertiesGetMaxGuestCPUCount;
    system_properties_get_max_guest_monitors => ISystemPropertiesGetMaxGuestMonitors;
    system_properties_get_info_vd_size => ISystemPropertiesGetInfoVDSize;
    system_properties_get_serial_port_count => ISystemPropertiesGetSerialPortCount;
    system_properties_get_parallel_port_count => ISystemPropertiesGetParallelPortCount;
    system_properties_get_max_boot_position => ISystemPropertiesGetMaxBootPosition;
    system_properties_get_default_machine_folder => ISystemPropertiesGetDefaultMachineFolder;
    system_properties_set_default_machine_folder => ISystemPropertiesSetDefaultMachineFolder;
    system_properties_get_logging_level => ISystemPropertiesGetLoggingLevel;
    system_properties_set_logging_level => ISystemPropertiesSetLoggingLevel;
    system_properties_get_medium_formats => ISystemPropertiesGetMediumFormats;
    system_properties_get_default_hard_disk_format => ISystemPropertiesGetDefaultHardDiskFormat;
    system_properties_set_default_hard_disk_format => ISystemPropertiesSetDefaultHardDiskFormat;
    system_properties_get_free_disk_space_warning => ISystemPropertiesGetFreeDiskSpaceWarning;
    system_properties_set_free_disk_space_warning => ISystemPropertiesSetFreeDiskSpaceWarning;
    system_properties_get_free_disk_space_percent_warning => ISystemPropertiesGetFreeDiskSpacePercentWarning;
    system_properties_set_free_disk_space_percent_warning => ISystemPropertiesSetFreeDiskSpacePercentWarning;
    system_properties_get_free_disk_space_error => ISystemPropertiesGetFreeDiskSpaceError;
    system_properties_set_free_disk_space_error => ISystemPropertiesSetFreeDiskSpaceError;
    system_properties_get_free_disk_space_percent_error => ISystemPropertiesGetFreeDiskSpacePercentError;
    system_properties_set_free_disk_space_percent_error => ISystemPropertiesSetFreeDiskSpacePercentError;
    system_properties_get_vrde_auth_library => ISystemPropertiesGetVRDEAuthLibrary;
    system_properties_set_vrde_auth_library => ISystemPropertiesSetVRDEAuthLibrary;
    system_properties_get_web_service_auth_library => ISystemPropertiesGetWebServiceAuthLibrary;
    system_properties_set_web_service_auth_library => ISystemPropertiesSetWebServiceAuthLibrary;
    system_properties_get_default_vrde_ext_pack => ISystemPropertiesGetDefaultVRDEExtPack;
    system_properties_set_default_vrde_ext_pack => ISystemPropertiesSetDefaultVRDEExtPack;
    system_properties_get_log_history_count => ISystemPropertiesGetLogHistoryCount;
    system_properties_set_log_history_count => ISystemPropertiesSetLogHistoryCount;
    system_properties_get_autostart_database_path => ISystemPropertiesGetAutostartDatabasePath;
    system_properties_set_autostart_database_path => ISystemPropertiesSetAutostartDatabasePath;
    system_properties_get_default_additions_iso => ISystemPropertiesGetDefaultAdditionsISO;
    system_properties_set_default_additions_iso => ISystemPropertiesSetDefaultAdditionsISO;
    system_properties_get_default_frontend => ISystemPropertiesGetDefaultFrontend;
    system_properties_set_default_frontend => ISystemPropertiesSetDefaultFrontend;
    system_properties_get_max_network_adapters => ISystemPropertiesGetMaxNetworkAdapters;
    system_properties_get_max_network_adapters_of_type => ISystemPropertiesGetMaxNetworkAdaptersOfType;
    system_properties_get_max_devices_per_port_for_storage_bus => ISystemPropertiesGetMaxDevicesPerPortForStorageBus;
    system_properties_get_min_port_count_for_storage_bus => ISystemPropertiesGetMinPortCountForStorageBus;
    system_properties_get_max_port_count_for_storage_bus => ISystemPropertiesGetMaxPortCountForStorageBus;
    system_properties_get_max_instances_of_storage_bus => ISystemPropertiesGetMaxInstancesOfStorageBus;
    system_properties_get_device_types_for_storage_bus => ISystemPropertiesGetDeviceTypesForStorageBus;
    system_properties_get_storage_bus_for_storage_controller_type => ISystemPropertiesGetStorageBusForStorageControllerType;
    system_properties_get_storage_controller_types_for_storage_bus => ISystemPropertiesGetStorageControllerTypesForStorageBus;
    system_properties_get_default_io_cache_setting_for_storage_controller => ISystemPropertiesGetDefaultIoCacheSettingForStorageController;
    // IVRDEServer
    vrde_server_get_enabled => IVRDEServerGetEnabled;
    vrde_server_set_enabled => IVRDEServerSetEnabled;
    vrde_server_get_auth_type => IVRDEServerGetAuthType;
    vrde_server_set_auth_type => IVRDEServerSetAuthType;
    vrde_server_get_auth_timeout => IVRDEServerGetAuthTimeout;
    vrde_server_set_auth_timeout => IVRDEServerSetAuthTimeout;
    vrde_server_get_allow_multi_connection => IVRDEServerGetAllowMultiConnection;
    vrde_server_set_allow_multi_connection => IVRDEServerSetAllowMultiConnection;
    vrde_server_get_reuse_single_connection => IVRDEServerGetReuseSingleConnection;
    vrde_server_set_reuse_single_connection => IVRDEServerSetReuseSingleConnection;
    vrde_server_get_vrde_ext_pack => IVRDEServerGetVRDEExtPack;
    vrde_server_set_vrde_ext_pack => IVRDEServerSetVRDEExtPack;
    vrde_server_get_auth_library => IVRDEServerGetAuthLibrary;
    vrde_server_set_auth_library => IVRDEServerSetAuthLibrary;
    vrde_server_get_vrde_properties => IVRDEServerGetVRDEProperties;
    vrde_server_set_vrde_property => IVRDEServerSetVRDEProperty;
    vrde_server_get_vrde_property => IVRDEServerGetVRDEProperty;
    // INetworkAdapter
    network_adapter_get_adapter_type => INetworkAdapterGetAdapterType;
    network_adapter_set_adapter_type => INetworkAdapterSetAdapterType;
    network_adapter_get_slot => INetworkAdapterGetSlot;
    network_adapter_get_enabled => INetworkAdapterGetEnabled;
    network_adapter_set_enabled => INetworkAdapterSetEnabled;
    network_adapter_get_mac_address => INetworkAdapterGetMACAddress;
    network_adapter_set_mac_address => INetworkAdapterSetMACAddress;
    network_adapter_get_attachment_type => INetworkAdapterGetAttachmentType;
    network_adapter_set_attachment_type => INetworkAdapterSetAttachmentType;
    network_adapter_get_bridged_interface => INetworkAdapterGetBridgedInterface;
    network_adapter_set_bridged_interface => INetworkAdapterSetBridgedInterface;
    network_adapter_get_host_only_interface => INetworkAdapterGetHostOnlyInterface;
    network_adapter_set_host_only_interface => INetworkAdapterSetHostOnlyInterface;
    network_adapter_get_internal_network => INetworkAdapterGetInternalNetwork;
    network_adapter_set_internal_network => INetworkAdapterSetInternalNetwork;
    network_adapter_get_nat_network => INetworkAdapterGetNATNetwork;
    network_adapter_set_nat_network => INetworkAdapterSetNATNetwork;
    network_adapter_get_generic_driver => INetworkAdapterGetGenericDriver;
    network_adapter_set_generic_driver => INetworkAdapterSetGenericDriver;
    network_adapter_get_cable_connected => INetworkAdapterGetCableConnected;
    network_adapter_set_cable_connected => INetworkAdapterSetCableConnected;
    network_adapter_get_line_speed => INetworkAdapterGetLineSpeed;
    network_adapter_set_line_speed => INetworkAdapterSetLineSpeed;
    network_adapter_get_promisc_mode_policy => INetworkAdapterGetPromiscModePolicy;
    network_adapter_set_promisc_mode_policy => INetworkAdapterSetPromiscModePolicy;
    network_adapter_get_trace_enabled => INetworkAdapterGetTraceEnabled;
    network_adapter_set_trace_enabled => INetworkAdapterSetTraceEnabled;
    network_adapter_get_trace_file => INetworkAdapterGetTraceFile;
    network_adapter_set_trace_file => INetworkAdapterSetTraceFile;
    network_adapter_get_nat_engine => INetworkAdapterGetNATEngine;
    network_adapter_get_boot_priority => INetworkAdapterGetBootPriority;
    network_adapter_set_boot_priority => INetworkAdapterSetBootPriority;
    network_adapter_get_bandwidth_group => INetworkAdapterGetBandwidthGroup;
    network_adapter_set_bandwidth_group => INetworkAdapterSetBandwidthGroup;
    network_adapter_get_property => INetworkAdapterGetProperty;
    network_adapter_set_property => INetworkAdapterSetProperty;
    network_adapter_get_properties => INetworkAdapterGetProperties;
    // IGuest
    guest_get_os_type_id => IGuestGetOSTypeId;
    guest_get_additions_run_level => IGuestGetAdditionsRunLevel;
    guest_get_additions_version => IGuestGetAdditionsVersion;
    guest_get_additions_revision => IGuestGetAdditionsRevision;
    guest_get_sessions => IGuestGetSessions;
    guest_get_memory_balloon_size => IGuestGetMemoryBalloonSize;
    guest_set_memory_balloon_size => IGuestSetMemoryBalloonSize;
    guest_get_statistics_update_interval => IGuestGetStatisticsUpdateInterval;
    guest_set_statistics_update_interval => IGuestSetStatisticsUpdateInterval;
    guest_internal_get_statistics => IGuestInternalGetStatistics;
    guest_get_additions_status => IGuestGetAdditionsStatus;
    guest_set_credentials => IGuestSetCredentials;
    guest_create_session => IGuestCreateSession;
    guest_find_session => IGuestFindSession;
    guest_update_guest_additions => IGuestUpdateGuestAdditions;
    // IDisplay
    display_get_screen_resolution => IDisplayGetScreenResolution;
    display_set_video_mode_hint => IDisplaySetVideoModeHint;
    display_set_seamless_mode => IDisplaySetSeamlessMode;
    display_take_screen_shot_to_array => IDisplayTakeScreenShotToArray;
    display_invalidate_and_update => IDisplayInvalidateAndUpdate;
    display_invalidate_and_update_screen => IDisplayInvalidateAndUpdateScreen;
    display_detach_screens => IDisplayDetachScreens;
    display_notify_scale_factor_change => IDisplayNotifyScaleFactorChange;
    // IKeyboard
    keyboard_get_event_source => IKeyboardGetEventSource;
    keyboard_put_scancode => IKeyboardPutScancode;
    keyboard_put_scancodes => IKeyboardPutScancodes;
    keyboard_put_cad => IKeyboardPutCAD;
    keyboard_release_keys => IKeyboardReleaseKeys;
    keyboard_put_usage_code => IKeyboardPutUsageCode;
    // IMouse
    mouse_get_absolute_supported => IMouseGetAbsoluteSupported;
    mouse_get_relative_supported => IMouseGetRelativeSupported;
    mouse_get_multi_touch_supported => IMouseGetMultiTouchSupported;
    mouse_get_needs_host_cursor => IMouseGetNeedsHostCursor;
    mouse_get_event_source => IMouseGetEventSource;
    mouse_put_mouse_event => IMousePutMouseEvent;
    mouse_put_mouse_event_absolute => IMousePutMouseEventAbsolute;
    mouse_put_event_multi_touch => IMousePutEventMultiTouch;
    mouse_put_event_multi_touch_string => IMousePutEventMultiTouchString;
}
