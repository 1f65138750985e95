//! Env-driven configuration for the service and the `cardctl` CLI.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. Storage credentials are required, everything else has a
//! development default.
use std::env;

use crate::error::{AppError, AppResult};

pub const DEFAULT_BUCKET: &str = "sunnybot";
pub const DEFAULT_OAUTH_URL: &str = "https://slack.com/api/oauth.v2.access";

#[derive(Clone, Debug)]
pub struct Config {
    pub storage_url: String,
    pub storage_key: String,
    pub storage_secret: String,
    pub storage_region: String,
    pub storage_force_path_style: bool,
    pub storage_bucket: String,
    pub slack_client_id: String,
    pub slack_client_secret: String,
    /// Read but never used to verify inbound requests.
    pub slack_signing_secret: Option<String>,
    pub slack_oauth_url: String,
    pub font_path: String,
    pub static_dir: String,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::Config(format!("{} must be set", name)))
        };
        let or_default =
            |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Ok(Config {
            storage_url: required("STORAGE_URL")?.trim_end_matches('/').to_string(),
            storage_key: required("STORAGE_KEY")?,
            storage_secret: required("STORAGE_SECRET")?,
            storage_region: or_default("STORAGE_REGION", "us-east-1"),
            storage_force_path_style: lookup("STORAGE_FORCE_PATH_STYLE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            storage_bucket: or_default("STORAGE_BUCKET", DEFAULT_BUCKET),
            slack_client_id: or_default("SLACK_CLIENT_ID", ""),
            slack_client_secret: or_default("SLACK_CLIENT_SECRET", ""),
            slack_signing_secret: lookup("SLACK_SIGNING_SECRET"),
            slack_oauth_url: or_default("SLACK_OAUTH_URL", DEFAULT_OAUTH_URL),
            font_path: or_default("FONT_PATH", "./assets/fonts/DejaVuSans.ttf"),
            static_dir: or_default("STATIC_DIR", "./static"),
            api_host: or_default("API_HOST", "127.0.0.1"),
            api_port: or_default("API_PORT", "8080"),
        })
    }

    pub fn print_env_vars() {
        let plain = [
            "STORAGE_URL",
            "STORAGE_REGION",
            "STORAGE_BUCKET",
            "SLACK_OAUTH_URL",
            "FONT_PATH",
            "STATIC_DIR",
            "API_HOST",
            "API_PORT",
        ];
        let secret = [
            "STORAGE_KEY",
            "STORAGE_SECRET",
            "SLACK_CLIENT_ID",
            "SLACK_CLIENT_SECRET",
            "SLACK_SIGNING_SECRET",
        ];
        for name in plain {
            println!("{}: {}", name, env::var(name).unwrap_or_else(|_| "<unset>".to_string()));
        }
        for name in secret {
            let shown = if env::var(name).is_ok() { "<set>" } else { "<unset>" };
            println!("{}: {}", name, shown);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_fill_optional_values() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("STORAGE_URL", "https://nyc3.example.com/"),
            ("STORAGE_KEY", "key"),
            ("STORAGE_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(cfg.storage_url, "https://nyc3.example.com");
        assert_eq!(cfg.storage_bucket, DEFAULT_BUCKET);
        assert_eq!(cfg.storage_region, "us-east-1");
        assert!(!cfg.storage_force_path_style);
        assert_eq!(cfg.slack_oauth_url, DEFAULT_OAUTH_URL);
        assert!(cfg.slack_signing_secret.is_none());
        assert_eq!(cfg.api_port, "8080");
    }

    #[test]
    fn missing_storage_credentials_are_reported() {
        let err = Config::from_lookup(lookup_from(&[("STORAGE_URL", "http://localhost:9000")]))
            .unwrap_err();
        assert!(err.to_string().contains("STORAGE_KEY"));
    }

    #[test]
    fn path_style_flag_parses() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("STORAGE_URL", "http://localhost:9000"),
            ("STORAGE_KEY", "key"),
            ("STORAGE_SECRET", "secret"),
            ("STORAGE_FORCE_PATH_STYLE", "1"),
            ("SLACK_SIGNING_SECRET", "abc"),
        ]))
        .unwrap();
        assert!(cfg.storage_force_path_style);
        assert_eq!(cfg.slack_signing_secret.as_deref(), Some("abc"));
    }
}
