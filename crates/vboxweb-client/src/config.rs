use std::time::Duration;

use crate::auth::BasicAuth;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Whether consecutive calls may share a pooled connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeepAlive {
    #[default]
    Must,
    /// Every request asks the server to close the connection afterwards.
    NotNecessary,
}

fn default_user_agent() -> String {
    format!("vboxweb/{}", env!("CARGO_PKG_VERSION"))
}

/// Everything a [`SoapClient`](crate::SoapClient) needs to reach one endpoint.
///
/// ```
/// use std::time::Duration;
/// use vboxweb_client::{BasicAuth, ClientConfig, KeepAlive};
///
/// let config = ClientConfig::builder()
///     .url("https://vbox.example.org:18083/")
///     .skip_tls_verify(true)
///     .auth(BasicAuth::new("admin", "secret"))
///     .timeout(Duration::from_secs(120))
///     .build();
///
/// assert_eq!(config.connect_timeout, Duration::from_secs(30));
/// assert_eq!(config.keep_alive, KeepAlive::Must);
/// ```
#[derive(Debug, Clone, typed_builder::TypedBuilder)]
pub struct ClientConfig {
    #[builder(setter(into))]
    pub url: String,
    #[builder(default)]
    pub skip_tls_verify: bool,
    #[builder(default, setter(strip_option))]
    pub auth: Option<BasicAuth>,
    #[builder(default = DEFAULT_CONNECT_TIMEOUT)]
    pub connect_timeout: Duration,
    /// Bound on the whole request, unbounded when `None`.
    #[builder(default, setter(strip_option))]
    pub timeout: Option<Duration>,
    #[builder(default)]
    pub keep_alive: KeepAlive,
    #[builder(default = default_user_agent(), setter(into))]
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self::builder().url(url).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new("http://localhost:18083/");
        assert!(!config.skip_tls_verify);
        assert!(config.auth.is_none());
        assert!(config.timeout.is_none());
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(config.keep_alive, KeepAlive::Must);
        assert!(config.user_agent.starts_with("vboxweb/"));
    }
}
