use std::fs;

use vboxweb_api::enums::{DeviceType, LockType, MachineState, MediumVariant};
use vboxweb_api::ops::*;
use tracing_test::traced_test;
use vboxweb_soap::soap::{FaultDetail, decode_envelope, encode_envelope};

const PREFIX: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body>"#
);
const SUFFIX: &str = "</soap:Body></soap:Envelope>";

fn body_of(xml: &str) -> &str {
    xml.strip_prefix(PREFIX)
        .and_then(|rest| rest.strip_suffix(SUFFIX))
        .expect("request should be a complete envelope")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logon_has_no_this_reference() {
        let xml = encode_envelope(IWebsessionManagerLogon {
            username: "admin".to_owned(),
            password: "s3cret & more".to_owned(),
        })
        .unwrap();

        assert_eq!(
            body_of(&xml),
            concat!(
                r#"<IWebsessionManager_logon xmlns="http://www.virtualbox.org/">"#,
                "<username>admin</username><password>s3cret &amp; more</password>",
                "</IWebsessionManager_logon>"
            )
        );
    }

    #[test]
    fn parameters_follow_declaration_order() {
        let xml = encode_envelope(IMachineLockMachine {
            this: "5a3e7d0c9b1f2e44-0000000000000003".to_owned(),
            session: "5a3e7d0c9b1f2e44-0000000000000002".to_owned(),
            lock_type: LockType::Shared,
        })
        .unwrap();

        assert_eq!(
            body_of(&xml),
            concat!(
                r#"<IMachine_lockMachine xmlns="http://www.virtualbox.org/">"#,
                "<_this>5a3e7d0c9b1f2e44-0000000000000003</_this>",
                "<session>5a3e7d0c9b1f2e44-0000000000000002</session>",
                "<lockType>Shared</lockType>",
                "</IMachine_lockMachine>"
            )
        );
    }

    #[test]
    fn arrays_repeat_the_element_and_empty_arrays_vanish() {
        let xml = encode_envelope(IVirtualBoxCreateMachine {
            this: "vbox".to_owned(),
            settings_file: String::new(),
            name: "build-01".to_owned(),
            groups: vec!["/ci".to_owned(), "/linux".to_owned()],
            os_type_id: "Ubuntu_64".to_owned(),
            flags: String::new(),
        })
        .unwrap();
        assert!(body_of(&xml).contains(
            "<settingsFile></settingsFile><name>build-01</name><groups>/ci</groups><groups>/linux</groups><osTypeId>Ubuntu_64</osTypeId><flags></flags>"
        ));

        let xml = encode_envelope(IMediumCreateBaseStorage {
            this: "medium".to_owned(),
            logical_size: 10_737_418_240,
            variant: vec![],
        })
        .unwrap();
        assert!(body_of(&xml).ends_with(
            "<_this>medium</_this><logicalSize>10737418240</logicalSize></IMedium_createBaseStorage>"
        ));

        let xml = encode_envelope(IMediumCreateBaseStorage {
            this: "medium".to_owned(),
            logical_size: 1,
            variant: vec![MediumVariant::Fixed, MediumVariant::VmdkSplit2G],
        })
        .unwrap();
        assert!(body_of(&xml).contains("<variant>Fixed</variant><variant>VmdkSplit2G</variant>"));
    }

    #[test]
    fn keyword_members_keep_their_wire_name() {
        let xml = encode_envelope(IMachineAttachDeviceWithoutMedium {
            this: "m".to_owned(),
            name: "IDE".to_owned(),
            controller_port: 1,
            device: 0,
            r#type: DeviceType::Dvd,
        })
        .unwrap();
        assert!(body_of(&xml).contains(
            "<name>IDE</name><controllerPort>1</controllerPort><device>0</device><type>DVD</type>"
        ));
    }

    #[test]
    fn test_parse_machine_states_response() {
        let xml = fs::read_to_string("tests/resources/get_machine_states_response.xml")
            .expect("Failed to read get_machine_states_response.xml");

        let response = decode_envelope::<IVirtualBoxGetMachineStatesResponse>(&xml)
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(
            response.returnval,
            vec![
                MachineState::PoweredOff,
                MachineState::Running,
                MachineState::Saved
            ]
        );
    }

    #[test]
    fn test_parse_take_snapshot_response() {
        let xml = fs::read_to_string("tests/resources/take_snapshot_response.xml")
            .expect("Failed to read take_snapshot_response.xml");

        let response = decode_envelope::<IMachineTakeSnapshotResponse>(&xml)
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(response.id, "8b6f1f36-4c3e-4c1d-9a55-4c0a2d2f7e10");
        assert_eq!(response.returnval, "5a3e7d0c9b1f2e44-0000000000000012");
    }

    #[test]
    fn test_parse_medium_attachments_response() {
        let xml = fs::read_to_string("tests/resources/medium_attachments_response.xml")
            .expect("Failed to read medium_attachments_response.xml");

        let response = decode_envelope::<IMachineGetMediumAttachmentsResponse>(&xml)
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(response.returnval.len(), 2);
        let disk = &response.returnval[0];
        assert_eq!(disk.controller, "SATA");
        assert_eq!(disk.r#type, DeviceType::HardDisk);
        let dvd = &response.returnval[1];
        assert_eq!(dvd.port, 1);
        assert_eq!(dvd.r#type, DeviceType::Dvd);
        assert!(dvd.medium.is_empty());
    }

    #[test]
    fn test_parse_find_machine_fault() {
        let xml = fs::read_to_string("tests/resources/find_machine_fault.xml")
            .expect("Failed to read find_machine_fault.xml");

        let fault = decode_envelope::<IVirtualBoxFindMachineResponse>(&xml)
            .unwrap()
            .into_result()
            .unwrap_err();

        assert_eq!(fault.fault_code(), Some("SOAP-ENV:Client"));
        assert!(fault.to_string().contains("Could not find a registered machine"));
        assert_eq!(fault.result_code(), Some(-2_135_228_415));
        assert!(matches!(fault.detail(), Some(FaultDetail::RuntimeFault(_))));
    }

    #[test]
    fn empty_response_element_decodes() {
        let xml = concat!(
            r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:vbox="http://www.virtualbox.org/">"#,
            "<SOAP-ENV:Body><vbox:IMachine_saveSettingsResponse/></SOAP-ENV:Body></SOAP-ENV:Envelope>"
        );
        let response = decode_envelope::<IMachineSaveSettingsResponse>(xml)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(response, IMachineSaveSettingsResponse {});
    }

    #[test]
    fn response_without_members_decodes_to_defaults() {
        let xml = concat!(
            r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:vbox="http://www.virtualbox.org/">"#,
            "<SOAP-ENV:Body><vbox:IMachine_getNameResponse/></SOAP-ENV:Body></SOAP-ENV:Envelope>"
        );
        let response = decode_envelope::<IMachineGetNameResponse>(xml)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(response.returnval, "");
    }

    #[test]
    fn state_added_by_a_newer_server_decodes() {
        let xml = concat!(
            r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:vbox="http://www.virtualbox.org/">"#,
            "<SOAP-ENV:Body><vbox:IMachine_getStateResponse><returnval>AbortedSaved</returnval></vbox:IMachine_getStateResponse>",
            "</SOAP-ENV:Body></SOAP-ENV:Envelope>"
        );
        let response = decode_envelope::<IMachineGetStateResponse>(xml)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(
            response.returnval,
            MachineState::Other("AbortedSaved".to_owned())
        );
    }

    #[test]
    fn mismatched_response_element_is_rejected() {
        let xml = concat!(
            r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:vbox="http://www.virtualbox.org/">"#,
            "<SOAP-ENV:Body><vbox:IMachine_getNameResponse><returnval>x</returnval></vbox:IMachine_getNameResponse></SOAP-ENV:Body></SOAP-ENV:Envelope>"
        );
        assert!(decode_envelope::<IMachineGetStateResponse>(xml).is_err());
    }

    #[test]
    #[traced_test]
    fn newer_server_members_are_skipped() {
        let xml = concat!(
            r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:vbox="http://www.virtualbox.org/">"#,
            "<SOAP-ENV:Body><vbox:IMachine_getNameResponse><returnval>MyVM</returnval><extra>1</extra></vbox:IMachine_getNameResponse>",
            "</SOAP-ENV:Body></SOAP-ENV:Envelope>"
        );
        let response = decode_envelope::<IMachineGetNameResponse>(xml)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(response.returnval, "MyVM");
        assert!(logs_contain("ignoring unknown element"));
    }
}
