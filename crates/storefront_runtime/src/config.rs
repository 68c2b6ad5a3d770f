//! Build-time storefront configuration.
//!
//! `build.rs` validates `storefront.toml` and embeds it as JSON; this module parses it once.

use std::{sync::OnceLock, time::Duration};

use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/storefront_config_generated.rs"));

/// Contact panel details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactConfig {
    /// WhatsApp number in international format without `+`.
    pub whatsapp_number: String,
    /// Contact email address.
    pub email: String,
    /// Shipping information bullet points.
    pub shipping_notes: Vec<String>,
}

impl ContactConfig {
    /// `wa.me` chat link for the configured number.
    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number)
    }

    /// `mailto:` link for the configured email.
    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// One navigation control.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavEntry {
    /// Category key (or the reserved `contact` key).
    pub key: String,
    /// Display label.
    pub label: String,
}

/// Runtime storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorefrontConfig {
    /// Config schema version.
    pub schema_version: u32,
    /// URL of the catalog JSON document.
    pub data_url: String,
    /// Delay between a successful load and revealing the gallery.
    pub reveal_delay_ms: u64,
    /// Length of the detail overlay exit animation.
    pub modal_exit_ms: u64,
    /// How long the offline banner stays visible.
    pub offline_banner_ms: u64,
    /// Debounce applied to search input.
    pub search_debounce_ms: u64,
    /// Minimum downward pull, in CSS pixels, that triggers a refresh.
    pub pull_refresh_threshold_px: i32,
    /// Service worker script URL.
    pub service_worker_url: String,
    /// Placeholder image service base URL.
    pub placeholder_base: String,
    /// Contact panel details.
    pub contact: ContactConfig,
    /// Navigation controls in display order.
    pub nav: Vec<NavEntry>,
}

impl StorefrontConfig {
    /// Returns the embedded configuration.
    pub fn builtin() -> &'static Self {
        static CONFIG: OnceLock<StorefrontConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            serde_json::from_str(STOREFRONT_CONFIG_JSON)
                .expect("generated storefront config should parse")
        })
    }

    /// Reveal delay as a [`Duration`].
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Modal exit animation length as a [`Duration`].
    pub fn modal_exit(&self) -> Duration {
        Duration::from_millis(self.modal_exit_ms)
    }

    /// Offline banner lifetime as a [`Duration`].
    pub fn offline_banner(&self) -> Duration {
        Duration::from_millis(self.offline_banner_ms)
    }

    /// Search debounce as a [`Duration`].
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Returns the generated configuration JSON payload.
pub fn builtin_config_json() -> &'static str {
    STOREFRONT_CONFIG_JSON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_parses_and_carries_required_nav_keys() {
        let config = StorefrontConfig::builtin();
        assert_eq!(config.schema_version, 1);
        assert!(!config.data_url.is_empty());
        assert!(config.nav.iter().any(|entry| entry.key == "all"));
        assert!(config.nav.iter().any(|entry| entry.key == "contact"));
    }

    #[test]
    fn contact_links_are_derived_from_config() {
        let contact = ContactConfig {
            whatsapp_number: "620000".to_string(),
            email: "toko@example.com".to_string(),
            shipping_notes: Vec::new(),
        };
        assert_eq!(contact.whatsapp_url(), "https://wa.me/620000");
        assert_eq!(contact.mailto_url(), "mailto:toko@example.com");
    }

    #[test]
    fn generated_json_is_exposed_verbatim() {
        let value: serde_json::Value =
            serde_json::from_str(builtin_config_json()).expect("json payload");
        assert_eq!(value["modal_exit_ms"], serde_json::json!(300));
    }
}
