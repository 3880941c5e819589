//! HTTP settings shared by daemon and wallet handles.

use std::time::Duration;

/// Transport settings for a client handle.
///
/// The default sets no timeouts: a call waits until the service answers or
/// the connection fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Limit for the whole request, from connect to the last body byte.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_timeouts() {
        let config = ClientConfig::default();
        assert!(config.timeout.is_none());
        assert!(config.connect_timeout.is_none());
    }

    #[test]
    fn builders_set_fields() {
        let config = ClientConfig::default()
            .with_timeout(Duration::from_secs(30))
            .with_connect_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
    }
}
