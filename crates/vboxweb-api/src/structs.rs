//! Value types that travel by value instead of as managed object references.
//!
//! Members the server leaves out decode to their default.

use crate::enums::{
    AudioCodecType, AudioControllerType, ChipsetType, DeviceType, FirmwareType,
    GraphicsControllerType, NetworkAdapterType, StorageBus, StorageControllerType,
};
use vboxweb_soap::WireStruct;

/// One medium slot of a machine's storage controller.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(default)]
pub struct IMediumAttachment {
    pub medium: String,
    pub controller: String,
    pub port: i32,
    pub device: i32,
    pub r#type: DeviceType,
    pub passthrough: bool,
    pub temporary_eject: bool,
    pub is_ejected: bool,
    pub non_rotational: bool,
    pub discard: bool,
    pub hot_pluggable: bool,
    pub bandwidth_group: String,
}

/// Recommended settings for a guest operating system family.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(default)]
pub struct IGuestOSType {
    pub family_id: String,
    pub family_description: String,
    pub id: String,
    pub description: String,
    pub is64_bit: bool,
    #[wire(rename = "recommendedIOAPIC")]
    pub recommended_ioapic: bool,
    pub recommended_virt_ex: bool,
    #[wire(rename = "recommendedRAM")]
    pub recommended_ram: u32,
    pub recommended_graphics_controller: GraphicsControllerType,
    #[wire(rename = "recommendedVRAM")]
    pub recommended_vram: u32,
    pub recommended2_d_video_acceleration: bool,
    pub recommended3_d_acceleration: bool,
    #[wire(rename = "recommendedHDD")]
    pub recommended_hdd: i64,
    pub adapter_type: NetworkAdapterType,
    #[wire(rename = "recommendedPAE")]
    pub recommended_pae: bool,
    #[wire(rename = "recommendedDVDStorageController")]
    pub recommended_dvd_storage_controller: StorageControllerType,
    #[wire(rename = "recommendedDVDStorageBus")]
    pub recommended_dvd_storage_bus: StorageBus,
    #[wire(rename = "recommendedHDStorageController")]
    pub recommended_hd_storage_controller: StorageControllerType,
    #[wire(rename = "recommendedHDStorageBus")]
    pub recommended_hd_storage_bus: StorageBus,
    pub recommended_firmware: FirmwareType,
    #[wire(rename = "recommendedUSBHID")]
    pub recommended_usbhid: bool,
    #[wire(rename = "recommendedHPET")]
    pub recommended_hpet: bool,
    #[wire(rename = "recommendedUSBTablet")]
    pub recommended_usb_tablet: bool,
    #[wire(rename = "recommendedRTCUseUTC")]
    pub recommended_rtc_use_utc: bool,
    pub recommended_chipset: ChipsetType,
    pub recommended_audio_controller: AudioControllerType,
    pub recommended_audio_codec: AudioCodecType,
    pub recommended_floppy: bool,
    #[wire(rename = "recommendedUSB")]
    pub recommended_usb: bool,
    #[wire(rename = "recommendedUSB3")]
    pub recommended_usb3: bool,
    #[wire(rename = "recommendedTFReset")]
    pub recommended_tf_reset: bool,
    #[wire(rename = "recommendedX2APIC")]
    pub recommended_x2_apic: bool,
}

/// Runtime state of the remote display server of a running machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(default)]
pub struct IVRDEServerInfo {
    pub active: bool,
    pub port: i32,
    pub number_of_clients: u32,
    pub begin_time: i64,
    pub end_time: i64,
    pub bytes_sent: i64,
    pub bytes_sent_total: i64,
    pub bytes_received: i64,
    pub bytes_received_total: i64,
    pub user: String,
    pub domain: String,
    pub client_name: String,
    #[wire(rename = "clientIP")]
    pub client_ip: String,
    pub client_version: u32,
    pub encryption_style: u32,
}
#[cfg(test)]
mod tests {
    use super::*;
    use vboxweb_xml::parser::{XmlDeserialize, parse};

    #[test]
    fn medium_attachment_decodes_members() {
        let xml = r#"<returnval xmlns="http://www.virtualbox.org/">
            <medium>a1b2c3d4-0001</medium>
            <controller>SATA</controller>
            <port>0</port>
            <device>0</device>
            <type>HardDisk</type>
            <passthrough>false</passthrough>
            <temporaryEject>false</temporaryEject>
            <isEjected>false</isEjected>
            <nonRotational>true</nonRotational>
            <discard>false</discard>
            <hotPluggable>false</hotPluggable>
            <bandwidthGroup></bandwidthGroup>
        </returnval>"#;
        let doc = parse(xml).unwrap();
        let attachment = IMediumAttachment::from_node(doc.root_element()).unwrap();

        assert_eq!(attachment.controller, "SATA");
        assert_eq!(attachment.r#type, DeviceType::HardDisk);
        assert!(attachment.non_rotational);
        assert!(!attachment.is_ejected);
        assert!(attachment.bandwidth_group.is_empty());
    }

    #[test]
    fn missing_members_default() {
        let xml = "<returnval><id>Ubuntu_64</id><is64Bit>true</is64Bit><recommendedRAM>1024</recommendedRAM></returnval>";
        let doc = parse(xml).unwrap();
        let os_type = IGuestOSType::from_node(doc.root_element()).unwrap();

        assert_eq!(os_type.id, "Ubuntu_64");
        assert!(os_type.is64_bit);
        assert_eq!(os_type.recommended_ram, 1024);
        assert_eq!(os_type.recommended_firmware, FirmwareType::Bios);
        assert!(os_type.description.is_empty());
    }

    #[test]
    fn vrde_server_info_decodes_counters() {
        let xml = "<returnval><active>true</active><port>3389</port><numberOfClients>1</numberOfClients><bytesSent>123456789012</bytesSent><clientIP>10.0.0.7</clientIP></returnval>";
        let doc = parse(xml).unwrap();
        let info = IVRDEServerInfo::from_node(doc.root_element()).unwrap();

        assert!(info.active);
        assert_eq!(info.port, 3389);
        assert_eq!(info.bytes_sent, 123_456_789_012);
        assert_eq!(info.client_ip, "10.0.0.7");
    }
}
