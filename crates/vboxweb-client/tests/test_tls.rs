mod common;

use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use common::{CapturedRequest, StubResponse, envelope, serve_one};
use vboxweb_api::ops::{IMachineGetName, IMachineGetNameResponse};
use vboxweb_client::{SoapClient, VboxWebError};

/// HTTPS stub with a freshly generated self-signed certificate.
fn spawn_https_stub(response: StubResponse) -> (String, mpsc::Receiver<CapturedRequest>) {
    let rcgen::CertifiedKey { cert, signing_key } =
        rcgen::generate_simple_self_signed(vec!["localhost".to_owned(), "127.0.0.1".to_owned()])
            .unwrap();
    let identity = native_tls::Identity::from_pkcs8(
        cert.pem().as_bytes(),
        signing_key.serialize_pem().as_bytes(),
    )
    .unwrap();
    let acceptor = native_tls::TlsAcceptor::new(identity).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("https://{}/", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            // A client that refuses the certificate aborts the handshake.
            if let Ok(tls) = acceptor.accept(stream) {
                let _ = tx.send(serve_one(tls, &response));
            }
        }
    });

    (url, rx)
}

fn get_name() -> IMachineGetName {
    IMachineGetName {
        this: "ref-123".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_tls_verify_accepts_self_signed_certificate() {
        let body = "<vbox:IMachine_getNameResponse><returnval>MyVM</returnval></vbox:IMachine_getNameResponse>";
        let (url, requests) = spawn_https_stub(StubResponse::ok(envelope(body)));
        let client = SoapClient::new(url, true, None).unwrap();

        let response: IMachineGetNameResponse = client.call("", get_name()).unwrap();

        assert_eq!(response.returnval, "MyVM");
        assert!(requests.recv_timeout(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn verification_rejects_self_signed_certificate() {
        let (url, _requests) = spawn_https_stub(StubResponse::ok(""));
        let client = SoapClient::new(url, false, None).unwrap();

        let err = client
            .call::<_, IMachineGetNameResponse>("", get_name())
            .unwrap_err();

        assert!(matches!(err, VboxWebError::Transport(_)), "{err}");
    }
}
