use base64::Engine;

/// HTTP Basic credentials, sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub login: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// `Basic <base64(login:password)>`.
    /// WARNING: never log the resulting header value.
    pub(crate) fn header_value(&self) -> String {
        let creds = format!("{}:{}", self.login, self.password);
        let b64 = base64::engine::general_purpose::STANDARD.encode(creds.as_bytes());
        format!("Basic {b64}")
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_value_is_base64_of_login_and_password() {
        let auth = BasicAuth::new("admin", "secret");
        assert_eq!(auth.header_value(), "Basic YWRtaW46c2VjcmV0");
    }

    #[test]
    fn debug_hides_the_password() {
        let auth = BasicAuth::new("admin", "secret");
        let debug = format!("{auth:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret"));
    }
}
