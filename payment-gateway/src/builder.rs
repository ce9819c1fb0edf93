use std::time::Duration;

use crate::{error::Error, Client, PRODUCTION_SNAP_URL, SANDBOX_SNAP_URL};

static DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`Client`].
///
/// The Snap base URL follows [`ClientBuilder::production`] unless it is
/// overridden with [`ClientBuilder::snap_url`], which is how tests point the
/// client at a mock server.
#[derive(Default)]
pub struct ClientBuilder {
    server_key: Option<String>,
    production: bool,
    snap_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn server_key(mut self, server_key: &str) -> Self {
        self.server_key = Some(server_key.to_string());
        self
    }

    pub fn production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    pub fn snap_url(mut self, snap_url: &str) -> Self {
        self.snap_url = Some(snap_url.trim_end_matches('/').to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let server_key = match self.server_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(Error::MissingServerKey),
        };

        let snap_url = self.snap_url.unwrap_or_else(|| {
            if self.production {
                PRODUCTION_SNAP_URL.to_string()
            } else {
                SANDBOX_SNAP_URL.to_string()
            }
        });

        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        Ok(Client::from_parts(http, server_key, snap_url, self.production))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Client, Error, PRODUCTION_SNAP_URL, SANDBOX_SNAP_URL};

    #[test]
    fn defaults_to_sandbox_url() {
        let client = Client::builder().server_key("key").build().unwrap();

        assert_eq!(client.snap_url(), SANDBOX_SNAP_URL);
        assert!(!client.is_production());
    }

    #[test]
    fn uses_production_url_when_enabled() {
        let client = Client::builder()
            .server_key("key")
            .production(true)
            .build()
            .unwrap();

        assert_eq!(client.snap_url(), PRODUCTION_SNAP_URL);
    }

    #[test]
    fn snap_url_override_strips_trailing_slash() {
        let client = Client::builder()
            .server_key("key")
            .snap_url("http://127.0.0.1:1234/")
            .build()
            .unwrap();

        assert_eq!(client.snap_url(), "http://127.0.0.1:1234");
    }

    #[test]
    fn fails_without_server_key() {
        let result = Client::builder().build();

        assert!(matches!(result, Err(Error::MissingServerKey)));
    }
}
