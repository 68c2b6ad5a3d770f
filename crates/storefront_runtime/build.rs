use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContactConfig {
    whatsapp_number: String,
    email: String,
    shipping_notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NavEntry {
    key: String,
    label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorefrontConfig {
    schema_version: u32,
    data_url: String,
    reveal_delay_ms: u64,
    modal_exit_ms: u64,
    offline_banner_ms: u64,
    search_debounce_ms: u64,
    pull_refresh_threshold_px: i32,
    service_worker_url: String,
    placeholder_base: String,
    contact: ContactConfig,
    nav: Vec<NavEntry>,
}

fn validate(config: &StorefrontConfig, path: &str) {
    if config.schema_version != 1 {
        panic!(
            "config schema mismatch in {path}: expected 1 found {}",
            config.schema_version
        );
    }
    if config.data_url.trim().is_empty() {
        panic!("config {path}: `data_url` must not be empty");
    }
    if config.pull_refresh_threshold_px <= 0 {
        panic!("config {path}: `pull_refresh_threshold_px` must be positive");
    }
    let mut seen = BTreeSet::new();
    for entry in &config.nav {
        if !seen.insert(entry.key.as_str()) {
            panic!("config {path}: duplicate nav key `{}`", entry.key);
        }
    }
    for required in ["all", "contact"] {
        if !seen.contains(required) {
            panic!("config {path}: nav must contain a `{required}` entry");
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("storefront.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: StorefrontConfig = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&config, &path.display().to_string());

    let json = serde_json::to_string_pretty(&config).expect("serialize storefront config");
    let generated = format!(
        "/// Build-time generated storefront configuration JSON.\n\
pub const STOREFRONT_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("storefront_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
