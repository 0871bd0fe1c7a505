use std::io::Read;
use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};
use vboxweb_soap::cores::{TagName, TagValue};
use vboxweb_soap::soap::{decode_envelope, encode_envelope};
use vboxweb_xml::parser::XmlDeserialize;

use crate::auth::BasicAuth;
use crate::config::{ClientConfig, KeepAlive};
use crate::error::VboxWebError;

const CONTENT_TYPE: &str = "text/xml; charset=\"utf-8\"";

/// One web service endpoint.
///
/// The connection pool is built once and shared by every call; the client is
/// cheap to clone and can be used from several threads.
#[derive(Debug, Clone)]
pub struct SoapClient {
    url: String,
    auth: Option<BasicAuth>,
    keep_alive: KeepAlive,
    agent: ureq::Agent,
}

impl SoapClient {
    /// Binds `url` without touching the network.
    pub fn new(
        url: impl Into<String>,
        skip_tls_verify: bool,
        auth: Option<BasicAuth>,
    ) -> Result<Self, VboxWebError> {
        let mut config = ClientConfig::new(url);
        config.skip_tls_verify = skip_tls_verify;
        config.auth = auth;
        Self::from_config(config)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, VboxWebError> {
        let ClientConfig {
            url,
            skip_tls_verify,
            auth,
            connect_timeout,
            timeout,
            keep_alive,
            user_agent,
        } = config;

        let parsed = url::Url::parse(&url).map_err(|e| VboxWebError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(VboxWebError::InvalidUrl {
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
                url,
            });
        }

        if skip_tls_verify {
            warn!(%url, "TLS certificate verification is disabled");
        }
        let tls = native_tls::TlsConnector::builder()
            .danger_accept_invalid_certs(skip_tls_verify)
            .danger_accept_invalid_hostnames(skip_tls_verify)
            .build()?;

        let mut builder = ureq::AgentBuilder::new()
            .timeout_connect(connect_timeout)
            .user_agent(&user_agent)
            .tls_connector(Arc::new(tls));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        debug!(
            %url,
            has_auth = auth.is_some(),
            ?keep_alive,
            ?connect_timeout,
            ?timeout,
            "SOAP client configured"
        );

        Ok(Self {
            url,
            auth,
            keep_alive,
            agent: builder.build(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends `request` and decodes the response element expected for it.
    ///
    /// `soap_action` goes out as the quoted `SOAPAction` header unless it is
    /// empty. The body is read whatever the HTTP status, because faults come
    /// back with `500`. An empty body yields `Resp::default()`.
    #[instrument(
        name = "soap.call",
        level = "info",
        skip(self, request),
        fields(operation = Req::TAG_NAME, url = %self.url),
        err
    )]
    pub fn call<Req, Resp>(&self, soap_action: &str, request: Req) -> Result<Resp, VboxWebError>
    where
        Req: for<'a> TagValue<'a> + TagName,
        Resp: for<'a> XmlDeserialize<'a> + TagName + Default,
    {
        let body = encode_envelope(request)?;

        let mut http = self.agent.post(&self.url).set("Content-Type", CONTENT_TYPE);
        if !soap_action.is_empty() {
            http = http.set("SOAPAction", &format!("\"{soap_action}\""));
        }
        if let Some(auth) = &self.auth {
            http = http.set("Authorization", &auth.header_value());
        }
        if self.keep_alive == KeepAlive::NotNecessary {
            http = http.set("Connection", "close");
        }

        debug!(
            body_length = body.len(),
            has_auth = self.auth.is_some(),
            "sending request"
        );

        let response = match http.send_string(&body) {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                debug!(status, "received status response");
                response
            }
            Err(e) => {
                error!(error = %e, "request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        let mut text = String::new();
        response.into_reader().read_to_string(&mut text)?;

        info!(
            status,
            response_body_length = text.len(),
            "response received"
        );

        if text.is_empty() {
            warn!(status, "empty response");
            return Ok(Resp::default());
        }

        decode_envelope::<Resp>(&text)?
            .into_result()
            .map_err(|fault| {
                info!(
                    fault_code = fault.fault_code().unwrap_or_default(),
                    result_code = ?fault.result_code(),
                    "server returned a fault"
                );
                VboxWebError::Fault(fault)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_url() {
        let err = SoapClient::new("not a url", false, None).unwrap_err();
        assert!(matches!(err, VboxWebError::InvalidUrl { .. }), "{err}");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = SoapClient::new("ftp://vbox.example.org/", false, None).unwrap_err();
        match err {
            VboxWebError::InvalidUrl { url, reason } => {
                assert_eq!(url, "ftp://vbox.example.org/");
                assert!(reason.contains("ftp"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn construction_does_no_io() {
        let client = SoapClient::new("https://vbox.invalid:18083/", true, None).unwrap();
        assert_eq!(client.url(), "https://vbox.invalid:18083/");
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SoapClient>();
    }
}
