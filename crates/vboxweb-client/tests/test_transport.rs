mod common;

use std::net::TcpListener;
use std::time::Duration;

use common::{StubResponse, envelope, spawn_http_stub};
use vboxweb_api::enums::MachineState;
use vboxweb_api::ops::{IMachineGetName, IMachineGetNameResponse, IMachineGetState, IMachineSaveSettings};
use vboxweb_client::{BasicAuth, ClientConfig, FaultDetail, KeepAlive, SoapClient, VboxPortType, VboxWebError};
use vboxweb_soap::soap::encode_envelope;

const GET_NAME_RESPONSE: &str =
    "<vbox:IMachine_getNameResponse><returnval>MyVM</returnval></vbox:IMachine_getNameResponse>";

fn get_name() -> IMachineGetName {
    IMachineGetName {
        this: "ref-123".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn machine_get_name_end_to_end() {
        let (url, requests) = spawn_http_stub(StubResponse::ok(envelope(GET_NAME_RESPONSE)));
        let port = VboxPortType::new(SoapClient::new(url, false, None).unwrap());

        let response = port.machine_get_name(get_name()).unwrap();
        assert_eq!(response.returnval, "MyVM");

        let request = requests.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(request.request_line.starts_with("POST / HTTP/1.1"));
        assert_eq!(request.headers["content-type"], r#"text/xml; charset="utf-8""#);
        assert!(!request.headers.contains_key("soapaction"));
        assert!(!request.headers.contains_key("authorization"));
        assert_eq!(request.body, encode_envelope(get_name()).unwrap());
    }

    #[test]
    fn fault_with_http_500_becomes_an_error() {
        let fault = concat!(
            "<SOAP-ENV:Fault><faultcode>SOAP-ENV:Client</faultcode>",
            "<faultstring>Invalid managed object reference \"ref-123\"</faultstring>",
            "<detail><vbox:InvalidObjectFault><badObjectID>ref-123</badObjectID></vbox:InvalidObjectFault></detail>",
            "</SOAP-ENV:Fault>"
        );
        let (url, _requests) = spawn_http_stub(StubResponse::with_status(500, envelope(fault)));
        let client = SoapClient::new(url, false, None).unwrap();

        let err = client
            .call::<_, IMachineGetNameResponse>("", get_name())
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid managed object reference \"ref-123\"");
        let fault = err.as_fault().unwrap();
        assert!(matches!(fault.detail(), Some(FaultDetail::InvalidObjectFault(f)) if f.bad_object_id == "ref-123"));
    }

    #[test]
    fn well_formed_body_decodes_into_the_response() {
        let body = "<vbox:IMachine_getStateResponse><returnval>Running</returnval></vbox:IMachine_getStateResponse>";
        let (url, _requests) = spawn_http_stub(StubResponse::ok(envelope(body)));
        let port = VboxPortType::new(SoapClient::new(url, false, None).unwrap());

        let response = port
            .machine_get_state(IMachineGetState {
                this: "m".to_owned(),
            })
            .unwrap();
        assert_eq!(response.returnval, MachineState::Running);
    }

    #[test]
    #[traced_test]
    fn empty_body_yields_the_default_response() {
        let (url, _requests) = spawn_http_stub(StubResponse::ok(""));
        let client = SoapClient::new(url, false, None).unwrap();

        let response: IMachineGetNameResponse = client.call("", get_name()).unwrap();
        assert_eq!(response, IMachineGetNameResponse::default());
        assert!(logs_contain("empty response"));
    }

    #[test]
    fn void_operation_decodes_an_empty_response_element() {
        let body = "<vbox:IMachine_saveSettingsResponse></vbox:IMachine_saveSettingsResponse>";
        let (url, _requests) = spawn_http_stub(StubResponse::ok(envelope(body)));
        let port = VboxPortType::new(SoapClient::new(url, false, None).unwrap());

        port.machine_save_settings(IMachineSaveSettings {
            this: "m".to_owned(),
        })
        .unwrap();
    }

    #[test]
    fn two_body_elements_are_a_decode_error() {
        let body = format!("{GET_NAME_RESPONSE}{GET_NAME_RESPONSE}");
        let (url, _requests) = spawn_http_stub(StubResponse::ok(envelope(&body)));
        let client = SoapClient::new(url, false, None).unwrap();

        let err = client
            .call::<_, IMachineGetNameResponse>("", get_name())
            .unwrap_err();
        assert!(matches!(err, VboxWebError::Xml(_)), "{err}");
    }

    #[test]
    fn non_xml_error_page_is_a_decode_error() {
        let (url, _requests) =
            spawn_http_stub(StubResponse::with_status(401, "<html><body>401</body>"));
        let client = SoapClient::new(url, false, None).unwrap();

        let err = client
            .call::<_, IMachineGetNameResponse>("", get_name())
            .unwrap_err();
        assert!(matches!(err, VboxWebError::Xml(_)), "{err}");
    }

    #[test]
    fn credentials_go_out_as_basic_authorization() {
        let (url, requests) = spawn_http_stub(StubResponse::ok(envelope(GET_NAME_RESPONSE)));
        let auth = BasicAuth::new("admin", "secret");
        let client = SoapClient::new(url, false, Some(auth)).unwrap();

        let _: IMachineGetNameResponse = client.call("", get_name()).unwrap();

        let request = requests.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(request.headers["authorization"], "Basic YWRtaW46c2VjcmV0");
    }

    #[test]
    fn soap_action_is_quoted_when_given() {
        let (url, requests) = spawn_http_stub(StubResponse::ok(envelope(GET_NAME_RESPONSE)));
        let client = SoapClient::new(url, false, None).unwrap();

        let _: IMachineGetNameResponse = client.call("urn:vbox/getName", get_name()).unwrap();

        let request = requests.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(request.headers["soapaction"], "\"urn:vbox/getName\"");
    }

    #[test]
    fn keep_alive_not_necessary_closes_the_connection() {
        let (url, requests) = spawn_http_stub(StubResponse::ok(envelope(GET_NAME_RESPONSE)));
        let config = ClientConfig::builder()
            .url(url)
            .keep_alive(KeepAlive::NotNecessary)
            .user_agent("vboxctl-test")
            .build();
        let client = SoapClient::from_config(config).unwrap();

        let _: IMachineGetNameResponse = client.call("", get_name()).unwrap();

        let request = requests.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(request.headers["connection"], "close");
        assert_eq!(request.headers["user-agent"], "vboxctl-test");
    }

    #[test]
    fn keep_alive_is_the_default() {
        let (url, requests) = spawn_http_stub(StubResponse::ok(envelope(GET_NAME_RESPONSE)));
        let config = ClientConfig::new(url);
        assert_eq!(config.keep_alive, KeepAlive::Must);
        let client = SoapClient::from_config(config).unwrap();

        let _: IMachineGetNameResponse = client.call("", get_name()).unwrap();

        let request = requests.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_ne!(
            request.headers.get("connection").map(String::as_str),
            Some("close")
        );
        assert!(request.headers["user-agent"].starts_with("vboxweb/"));
    }

    #[test]
    fn fault_with_unexpected_member_still_reports_the_fault() {
        let fault = concat!(
            "<SOAP-ENV:Fault><faultcode>SOAP-ENV:Client</faultcode>",
            "<faultstring>bad ref</faultstring><extra>x</extra>",
            "</SOAP-ENV:Fault>"
        );
        let (url, _requests) = spawn_http_stub(StubResponse::with_status(500, envelope(fault)));
        let client = SoapClient::new(url, false, None).unwrap();

        let err = client
            .call::<_, IMachineGetNameResponse>("", get_name())
            .unwrap_err();

        assert!(matches!(err, VboxWebError::Fault(_)), "{err:?}");
        assert_eq!(err.to_string(), "bad ref");
    }

    #[test]
    fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let config = ClientConfig::builder()
            .url(url)
            .connect_timeout(Duration::from_secs(2))
            .build();
        let client = SoapClient::from_config(config).unwrap();

        let err = client
            .call::<_, IMachineGetNameResponse>("", get_name())
            .unwrap_err();
        assert!(matches!(err, VboxWebError::Transport(_)), "{err}");
    }
}
