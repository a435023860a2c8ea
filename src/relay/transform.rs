//! Relay URL construction.

use url::form_urlencoded;

use crate::config::RelayConfig;

const ENCODED_PLACEHOLDER: &str = "{url}";
const RAW_PLACEHOLDER: &str = "{raw}";

/// Wraps a target URL into a relay request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relay {
    name: String,
    template: String,
}

impl Relay {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn request_url(&self, target: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
        self.template
            .replace(ENCODED_PLACEHOLDER, &encoded)
            .replace(RAW_PLACEHOLDER, target)
    }
}

impl From<&RelayConfig> for Relay {
    fn from(config: &RelayConfig) -> Self {
        Self::new(config.name.clone(), config.url_template.clone())
    }
}
