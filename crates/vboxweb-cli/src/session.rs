use anyhow::{Context, bail};
use tracing::{debug, info, warn};
use vboxweb_api::ops::{
    IProgressGetErrorInfo, IProgressGetResultCode, IProgressWaitForCompletion,
    IVirtualBoxErrorInfoGetText, IVirtualBoxFindMachine, IWebsessionManagerGetSessionObject,
    IWebsessionManagerLogoff, IWebsessionManagerLogon,
};
use vboxweb_client::VboxPortType;

/// A logged-on web session and the `IVirtualBox` reference it handed out.
pub struct WebSession<'p> {
    port: &'p VboxPortType,
    vbox: String,
}

impl WebSession<'_> {
    pub fn port(&self) -> &VboxPortType {
        self.port
    }

    pub fn vbox(&self) -> String {
        self.vbox.clone()
    }

    pub fn find_machine(&self, name_or_id: &str) -> anyhow::Result<String> {
        let machine = self
            .port
            .virtualbox_find_machine(IVirtualBoxFindMachine {
                this: self.vbox(),
                name_or_id: name_or_id.to_owned(),
            })
            .with_context(|| format!("machine '{name_or_id}' not found"))?;
        Ok(machine.returnval)
    }

    /// The `ISession` object of this web session.
    pub fn session_object(&self) -> anyhow::Result<String> {
        let session = self
            .port
            .websession_manager_get_session_object(IWebsessionManagerGetSessionObject {
                ref_i_virtual_box: self.vbox(),
            })?;
        Ok(session.returnval)
    }

    /// Blocks until `progress` completes and turns a failed result code into an error.
    pub fn wait_for(&self, progress: &str, what: &str) -> anyhow::Result<()> {
        info!(what, "waiting for completion");
        self.port
            .progress_wait_for_completion(IProgressWaitForCompletion {
                this: progress.to_owned(),
                timeout: -1,
            })?;

        let result_code = self
            .port
            .progress_get_result_code(IProgressGetResultCode {
                this: progress.to_owned(),
            })?
            .returnval;
        if result_code == 0 {
            debug!(what, "completed");
            return Ok(());
        }

        let error_info = self
            .port
            .progress_get_error_info(IProgressGetErrorInfo {
                this: progress.to_owned(),
            })?
            .returnval;
        let text = if error_info.is_empty() {
            String::new()
        } else {
            self.port
                .virtualbox_error_info_get_text(IVirtualBoxErrorInfoGetText { this: error_info })?
                .returnval
        };
        bail!("{what} failed (result code {result_code:#010x}): {text}")
    }
}

/// Logs on, runs `f`, and logs off again whatever `f` returned.
pub fn with_session<T>(
    port: &VboxPortType,
    user: &str,
    password: &str,
    f: impl FnOnce(&WebSession<'_>) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    let vbox = port
        .websession_manager_logon(IWebsessionManagerLogon {
            username: user.to_owned(),
            password: password.to_owned(),
        })
        .context("logon failed")?
        .returnval;
    debug!("logged on");

    let session = WebSession { port, vbox };
    let result = f(&session);

    if let Err(e) = port.websession_manager_logoff(IWebsessionManagerLogoff {
        ref_i_virtual_box: session.vbox,
    }) {
        warn!(error = %e, "logoff failed");
    }

    result
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    use vboxweb_client::SoapClient;

    use super::*;

    fn envelope(body: &str) -> String {
        format!(
            r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:vbox="http://www.virtualbox.org/"><SOAP-ENV:Body>{body}</SOAP-ENV:Body></SOAP-ENV:Envelope>"#
        )
    }

    /// Answers one request per entry of `bodies`, sending back each request body.
    fn spawn_stub(bodies: Vec<(u16, String)>) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for (status, body) in bodies {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                let mut reader = BufReader::new(stream);
                let mut length = 0;
                loop {
                    let mut line = String::new();
                    reader.read_line(&mut line).unwrap();
                    if line.trim_end().is_empty() {
                        break;
                    }
                    if let Some((name, value)) = line.split_once(':')
                        && name.eq_ignore_ascii_case("content-length")
                    {
                        length = value.trim().parse().unwrap();
                    }
                }
                let mut request = vec![0; length];
                reader.read_exact(&mut request).unwrap();
                let answer = format!(
                    "HTTP/1.1 {status} X\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                reader.get_mut().write_all(answer.as_bytes()).unwrap();
                let _ = tx.send(String::from_utf8(request).unwrap());
            }
        });

        (url, rx)
    }

    #[test]
    fn logs_off_when_the_command_fails() {
        let fault = "<SOAP-ENV:Fault><faultcode>SOAP-ENV:Client</faultcode><faultstring>Could not find a registered machine named 'nope'</faultstring></SOAP-ENV:Fault>";
        let (url, requests) = spawn_stub(vec![
            (
                200,
                envelope("<vbox:IWebsessionManager_logonResponse><returnval>vbox-1</returnval></vbox:IWebsessionManager_logonResponse>"),
            ),
            (500, envelope(fault)),
            (
                200,
                envelope("<vbox:IWebsessionManager_logoffResponse/>"),
            ),
        ]);
        let port = VboxPortType::new(SoapClient::new(url, false, None).unwrap());

        let err = with_session(&port, "admin", "secret", |session| session.find_machine("nope"))
            .unwrap_err();
        assert!(err.to_string().contains("machine 'nope' not found"));

        let sent: Vec<String> = requests.iter().take(3).collect();
        assert!(sent[0].contains("<IWebsessionManager_logon "));
        assert!(sent[1].contains("<IVirtualBox_findMachine "));
        assert!(sent[2].contains("<IWebsessionManager_logoff "));
        assert!(sent[2].contains("<refIVirtualBox>vbox-1</refIVirtualBox>"));
    }

    #[test]
    fn failed_progress_reports_the_error_text() {
        let (url, _requests) = spawn_stub(vec![
            (
                200,
                envelope("<vbox:IProgress_waitForCompletionResponse/>"),
            ),
            (
                200,
                envelope("<vbox:IProgress_getResultCodeResponse><returnval>-2147467259</returnval></vbox:IProgress_getResultCodeResponse>"),
            ),
            (
                200,
                envelope("<vbox:IProgress_getErrorInfoResponse><returnval>err-1</returnval></vbox:IProgress_getErrorInfoResponse>"),
            ),
            (
                200,
                envelope("<vbox:IVirtualBoxErrorInfo_getTextResponse><returnval>VT-x is not available</returnval></vbox:IVirtualBoxErrorInfo_getTextResponse>"),
            ),
        ]);
        let port = VboxPortType::new(SoapClient::new(url, false, None).unwrap());
        let session = WebSession {
            port: &port,
            vbox: "vbox-1".to_owned(),
        };

        let err = session.wait_for("progress-1", "power up").unwrap_err();
        assert_eq!(
            err.to_string(),
            "power up failed (result code 0x80004005): VT-x is not available"
        );
    }
}
