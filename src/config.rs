//! Client configuration.
//!
//! The base URL selects between a locally proxied composite service and a
//! deployed absolute host; everything else is HTTP plumbing with sensible
//! defaults.

use std::collections::HashMap;
use std::time::Duration;

use uuid::Uuid;

use crate::error::ClientError;

/// Environment variable naming the composite service base URL.
pub const ENV_API_URL: &str = "UNIBOX_API_URL";
/// Environment override for the provisional UUID test user id.
pub const ENV_TEST_USER_ID: &str = "UNIBOX_TEST_USER_ID";
/// Environment override for the provisional integer test user id.
pub const ENV_TEST_USER_ID_INT: &str = "UNIBOX_TEST_USER_ID_INT";

pub(crate) mod defaults {
    use std::time::Duration;
    use uuid::Uuid;

    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const USER_AGENT: &str = concat!("unibox/", env!("CARGO_PKG_VERSION"));

    /// User the integrations service provisions for pre-auth testing.
    pub const TEST_USER_ID: Uuid = uuid::uuid!("3aab3fba-9f4d-48ee-bee5-c1df257c33cc");
    /// The actions service keys the same user by integer.
    pub const TEST_USER_ID_INT: i64 = 1;
}

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the composite service, without a trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Option<Duration>,
    /// Connection timeout.
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// Default headers applied to all requests.
    pub headers: HashMap<String, String>,
    /// Provisional test user id for the UUID-keyed services.
    // TODO: drop the provisional test ids once every service resolves the
    // user from the session cookie instead.
    pub test_user_id: Uuid,
    /// Provisional test user id for the integer-keyed actions service.
    pub test_user_id_int: i64,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            timeout: Some(defaults::REQUEST_TIMEOUT),
            connect_timeout: Some(defaults::CONNECT_TIMEOUT),
            user_agent: Some(defaults::USER_AGENT.to_owned()),
            headers: HashMap::new(),
            test_user_id: defaults::TEST_USER_ID,
            test_user_id_int: defaults::TEST_USER_ID_INT,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// `UNIBOX_API_URL` is required; the test-identifier overrides are
    /// optional and validated when present.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var(ENV_API_URL)
            .map_err(|_| ClientError::Config(format!("{ENV_API_URL} is not set")))?;
        let mut config = Self::new(base_url);
        if let Ok(raw) = std::env::var(ENV_TEST_USER_ID) {
            config.test_user_id = raw
                .parse()
                .map_err(|e| ClientError::Config(format!("invalid {ENV_TEST_USER_ID}: {e}")))?;
        }
        if let Ok(raw) = std::env::var(ENV_TEST_USER_ID_INT) {
            config.test_user_id_int = raw
                .parse()
                .map_err(|e| ClientError::Config(format!("invalid {ENV_TEST_USER_ID_INT}: {e}")))?;
        }
        Ok(config)
    }

    /// Returns a builder for constructing a configuration.
    pub fn builder(base_url: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(base_url),
        }
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.config.connect_timeout = connect_timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.config.user_agent = user_agent.map(|s| s.into());
        self
    }

    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.config.headers.insert(key.into(), value.into());
        self
    }

    pub fn test_user_id(mut self, id: Uuid) -> Self {
        self.config.test_user_id = id;
        self
    }

    pub fn test_user_id_int(mut self, id: i64) -> Self {
        self.config.test_user_id_int = id;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
