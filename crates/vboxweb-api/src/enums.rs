//! Enumerations of the VirtualBox 6.1 API, carried on the wire as their literal names.

vboxweb_soap::define_wire_enum! {
    /// Lifecycle state of a machine.
    pub enum MachineState {
        Null => "Null",
        PoweredOff => "PoweredOff",
        Saved => "Saved",
        Teleported => "Teleported",
        Aborted => "Aborted",
        Running => "Running",
        Paused => "Paused",
        Stuck => "Stuck",
        Teleporting => "Teleporting",
        LiveSnapshotting => "LiveSnapshotting",
        Starting => "Starting",
        Stopping => "Stopping",
        Saving => "Saving",
        Restoring => "Restoring",
        TeleportingPausedVm => "TeleportingPausedVM",
        TeleportingIn => "TeleportingIn",
        DeletingSnapshotOnline => "DeletingSnapshotOnline",
        DeletingSnapshotPaused => "DeletingSnapshotPaused",
        OnlineSnapshotting => "OnlineSnapshotting",
        RestoringSnapshot => "RestoringSnapshot",
        DeletingSnapshot => "DeletingSnapshot",
        SettingUp => "SettingUp",
        Snapshotting => "Snapshotting",
        FirstOnline => "FirstOnline",
        LastOnline => "LastOnline",
        FirstTransient => "FirstTransient",
        LastTransient => "LastTransient",
    }
}

vboxweb_soap::define_wire_enum! {
    /// Lock state of a machine or of a session object.
    pub enum SessionState {
        Null => "Null",
        Unlocked => "Unlocked",
        Locked => "Locked",
        Spawning => "Spawning",
        Unlocking => "Unlocking",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum SessionType {
        Null => "Null",
        WriteLock => "WriteLock",
        Remote => "Remote",
        Shared => "Shared",
    }
}

vboxweb_soap::define_wire_enum! {
    /// How a session locks a machine.
    pub enum LockType {
        Null => "Null",
        Shared => "Shared",
        Write => "Write",
        Vm => "VM",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum DeviceType {
        Null => "Null",
        Floppy => "Floppy",
        Dvd => "DVD",
        HardDisk => "HardDisk",
        Network => "Network",
        Usb => "USB",
        SharedFolder => "SharedFolder",
        Graphics3D => "Graphics3D",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum DeviceActivity {
        Null => "Null",
        Idle => "Idle",
        Reading => "Reading",
        Writing => "Writing",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum StorageBus {
        Null => "Null",
        Ide => "IDE",
        Sata => "SATA",
        Scsi => "SCSI",
        Floppy => "Floppy",
        Sas => "SAS",
        Usb => "USB",
        PcIe => "PCIe",
        VirtioScsi => "VirtioSCSI",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum StorageControllerType {
        Null => "Null",
        LsiLogic => "LsiLogic",
        BusLogic => "BusLogic",
        IntelAhci => "IntelAhci",
        Piix3 => "PIIX3",
        Piix4 => "PIIX4",
        Ich6 => "ICH6",
        I82078 => "I82078",
        LsiLogicSas => "LsiLogicSas",
        Usb => "USB",
        NvMe => "NVMe",
        VirtioScsi => "VirtioSCSI",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum MediumState {
        NotCreated => "NotCreated",
        Created => "Created",
        LockedRead => "LockedRead",
        LockedWrite => "LockedWrite",
        Inaccessible => "Inaccessible",
        Creating => "Creating",
        Deleting => "Deleting",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum MediumType {
        Normal => "Normal",
        Immutable => "Immutable",
        Writethrough => "Writethrough",
        Shareable => "Shareable",
        Readonly => "Readonly",
        MultiAttach => "MultiAttach",
    }
}

vboxweb_soap::define_wire_enum! {
    /// Storage variant flags; arrays of these are combined by the server.
    pub enum MediumVariant {
        Standard => "Standard",
        VmdkSplit2G => "VmdkSplit2G",
        VmdkRawDisk => "VmdkRawDisk",
        VmdkStreamOptimized => "VmdkStreamOptimized",
        VmdkEsx => "VmdkESX",
        VdiZeroExpand => "VdiZeroExpand",
        Fixed => "Fixed",
        Diff => "Diff",
        Formatted => "Formatted",
        NoCreateDir => "NoCreateDir",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum AccessMode {
        ReadOnly => "ReadOnly",
        ReadWrite => "ReadWrite",
    }
}

vboxweb_soap::define_wire_enum! {
    /// What `IMachine_unregister` detaches and returns.
    pub enum CleanupMode {
        UnregisterOnly => "UnregisterOnly",
        DetachAllReturnNone => "DetachAllReturnNone",
        DetachAllReturnHardDisksOnly => "DetachAllReturnHardDisksOnly",
        Full => "Full",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum CloneMode {
        MachineState => "MachineState",
        MachineAndChildStates => "MachineAndChildStates",
        AllStates => "AllStates",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum CloneOptions {
        Link => "Link",
        KeepAllMacs => "KeepAllMACs",
        KeepNatMacs => "KeepNATMACs",
        KeepDiskNames => "KeepDiskNames",
        KeepHwUuids => "KeepHwUUIDs",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum FirmwareType {
        Bios => "BIOS",
        Efi => "EFI",
        Efi32 => "EFI32",
        Efi64 => "EFI64",
        EfiDual => "EFIDUAL",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum ChipsetType {
        Null => "Null",
        Piix3 => "PIIX3",
        Ich9 => "ICH9",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum NetworkAttachmentType {
        Null => "Null",
        Nat => "NAT",
        Bridged => "Bridged",
        Internal => "Internal",
        HostOnly => "HostOnly",
        Generic => "Generic",
        NatNetwork => "NATNetwork",
        Cloud => "Cloud",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum NetworkAdapterType {
        Null => "Null",
        Am79C970A => "Am79C970A",
        Am79C973 => "Am79C973",
        I82540Em => "I82540EM",
        I82543Gc => "I82543GC",
        I82545Em => "I82545EM",
        Virtio => "Virtio",
        Am79C960 => "Am79C960",
        Virtio10 => "Virtio_1_0",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum NetworkAdapterPromiscModePolicy {
        Deny => "Deny",
        AllowNetwork => "AllowNetwork",
        AllowAll => "AllowAll",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum HostNetworkInterfaceMediumType {
        Unknown => "Unknown",
        Ethernet => "Ethernet",
        Ppp => "PPP",
        Slip => "SLIP",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum HostNetworkInterfaceStatus {
        Unknown => "Unknown",
        Up => "Up",
        Down => "Down",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum HostNetworkInterfaceType {
        Bridged => "Bridged",
        HostOnly => "HostOnly",
    }
}

vboxweb_soap::define_wire_enum! {
    /// VRDE client authentication method.
    pub enum AuthType {
        Null => "Null",
        External => "External",
        Guest => "Guest",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum ClipboardMode {
        Disabled => "Disabled",
        HostToGuest => "HostToGuest",
        GuestToHost => "GuestToHost",
        Bidirectional => "Bidirectional",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum CPUPropertyType {
        Null => "Null",
        Pae => "PAE",
        LongMode => "LongMode",
        TripleFaultReset => "TripleFaultReset",
        Apic => "APIC",
        X2Apic => "X2APIC",
        IbpbOnVmExit => "IBPBOnVMExit",
        IbpbOnVmEntry => "IBPBOnVMEntry",
        HwVirt => "HWVirt",
        SpecCtrl => "SpecCtrl",
        SpecCtrlByHost => "SpecCtrlByHost",
        L1DFlushOnEmtScheduling => "L1DFlushOnEMTScheduling",
        L1DFlushOnVmEntry => "L1DFlushOnVMEntry",
        MdsClearOnEmtScheduling => "MDSClearOnEMTScheduling",
        MdsClearOnVmEntry => "MDSClearOnVMEntry",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum HWVirtExPropertyType {
        Null => "Null",
        Enabled => "Enabled",
        Vpid => "VPID",
        NestedPaging => "NestedPaging",
        UnrestrictedExecution => "UnrestrictedExecution",
        LargePages => "LargePages",
        Force => "Force",
        UseNativeApi => "UseNativeApi",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum ProcessorFeature {
        HwVirtEx => "HWVirtEx",
        Pae => "PAE",
        LongMode => "LongMode",
        NestedPaging => "NestedPaging",
        UnrestrictedGuest => "UnrestrictedGuest",
        NestedHwVirt => "NestedHWVirt",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum ParavirtProvider {
        None => "None",
        Default => "Default",
        Legacy => "Legacy",
        Minimal => "Minimal",
        HyperV => "HyperV",
        Kvm => "KVM",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum PointingHIDType {
        None => "None",
        Ps2Mouse => "PS2Mouse",
        UsbMouse => "USBMouse",
        UsbTablet => "USBTablet",
        ComboMouse => "ComboMouse",
        UsbMultiTouch => "USBMultiTouch",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum KeyboardHIDType {
        None => "None",
        Ps2Keyboard => "PS2Keyboard",
        UsbKeyboard => "USBKeyboard",
        ComboKeyboard => "ComboKeyboard",
    }
}

vboxweb_soap::define_wire_enum! {
    /// How far the guest additions have come up.
    pub enum AdditionsRunLevelType {
        None => "None",
        System => "System",
        Userland => "Userland",
        Desktop => "Desktop",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum AdditionsUpdateFlag {
        None => "None",
        WaitForUpdateStartOnly => "WaitForUpdateStartOnly",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum GuestMonitorStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
        Blank => "Blank",
    }
}

vboxweb_soap::define_wire_enum! {
    /// Pixel layout of screenshots and thumbnails.
    pub enum BitmapFormat {
        Opaque => "Opaque",
        Bgr => "BGR",
        Bgr0 => "BGR0",
        Bgra => "BGRA",
        Rgba => "RGBA",
        Png => "PNG",
        Jpeg => "JPEG",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum GraphicsControllerType {
        Null => "Null",
        VBoxVga => "VBoxVGA",
        Vmsvga => "VMSVGA",
        VBoxSvga => "VBoxSVGA",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum AudioControllerType {
        Ac97 => "AC97",
        Sb16 => "SB16",
        Hda => "HDA",
    }
}

vboxweb_soap::define_wire_enum! {
    pub enum AudioCodecType {
        Null => "Null",
        Sb16 => "SB16",
        Stac9700 => "STAC9700",
        Ad1980 => "AD1980",
        Stac9221 => "STAC9221",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vboxweb_soap::cores::TagValue;
    use vboxweb_xml::builder::Element;
    use vboxweb_xml::parser::{XmlDeserialize, parse};

    #[test]
    fn wire_literals_keep_their_spelling() {
        assert_eq!(MachineState::PoweredOff.as_wire_str(), "PoweredOff");
        assert_eq!(LockType::Vm.to_string(), "VM");
        assert_eq!(NetworkAdapterType::Virtio10.as_wire_str(), "Virtio_1_0");
        assert_eq!(CloneOptions::KeepAllMacs.as_wire_str(), "KeepAllMACs");
        assert_eq!("HardDisk".parse::<DeviceType>().unwrap(), DeviceType::HardDisk);
    }

    #[test]
    fn first_variant_is_the_default() {
        assert_eq!(MachineState::default(), MachineState::Null);
        assert_eq!(MediumState::default(), MediumState::NotCreated);
        assert_eq!(AccessMode::default(), AccessMode::ReadOnly);
    }

    #[test]
    fn every_literal_parses_back() {
        for state in MachineState::ALL {
            assert_eq!(&MachineState::from_wire_str(state.as_wire_str()), state);
            assert!(state.is_known());
        }
        for bus in StorageBus::ALL {
            assert_eq!(&bus.as_wire_str().parse::<StorageBus>().unwrap(), bus);
        }
    }

    #[test]
    fn literals_from_newer_servers_are_kept() {
        let doc = parse("<returnval>AbortedSaved</returnval>").unwrap();
        let state = MachineState::from_node(doc.root_element()).unwrap();
        assert_eq!(state, MachineState::Other("AbortedSaved".to_owned()));
        assert!(!state.is_known());
        assert_eq!(state.to_string(), "AbortedSaved");

        let element = state.append_to_element(Element::new("state"));
        assert_eq!(element.text(), Some("AbortedSaved"));

        assert_eq!(
            MachineState::from_wire_str("poweredoff"),
            MachineState::Other("poweredoff".to_owned())
        );
    }

    #[test]
    fn empty_literal_decodes() {
        let doc = parse("<returnval></returnval>").unwrap();
        assert_eq!(
            MachineState::from_node(doc.root_element()).unwrap(),
            MachineState::Other(String::new())
        );
    }

    #[test]
    fn enums_travel_as_element_text() {
        let doc = parse("<returnval> Running </returnval>").unwrap();
        assert_eq!(
            MachineState::from_node(doc.root_element()).unwrap(),
            MachineState::Running
        );

        let element = LockType::Shared.append_to_element(Element::new("lockType"));
        assert_eq!(element.text(), Some("Shared"));
    }
}
