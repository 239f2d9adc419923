use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGIN_URL: &str = "https://pastebin.com/api/api_login.php";
pub const DEFAULT_POST_URL: &str = "https://pastebin.com/api/api_post.php";
pub const DEFAULT_RAW_URL: &str = "https://pastebin.com/api/api_raw.php";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Developer API key sent with every request
    #[serde(default)]
    pub dev_key: String,
    #[serde(default = "default_login_url")]
    pub login_url: String,
    #[serde(default = "default_post_url")]
    pub post_url: String,
    #[serde(default = "default_raw_url")]
    pub raw_url: String,
    #[serde(default)]
    pub insecure_skip_verify: bool,
}

fn default_login_url() -> String {
    DEFAULT_LOGIN_URL.to_string()
}

fn default_post_url() -> String {
    DEFAULT_POST_URL.to_string()
}

fn default_raw_url() -> String {
    DEFAULT_RAW_URL.to_string()
}

impl Config {
    pub fn new(dev_key: impl Into<String>) -> Self {
        Self {
            dev_key: dev_key.into(),
            ..Self::default()
        }
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Defaults overlaid with `PASTEBIN_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dev_key) = lookup("PASTEBIN_DEV_KEY") {
            config.dev_key = dev_key;
        }
        if let Some(url) = lookup("PASTEBIN_LOGIN_URL") {
            config.login_url = url;
        }
        if let Some(url) = lookup("PASTEBIN_POST_URL") {
            config.post_url = url;
        }
        if let Some(url) = lookup("PASTEBIN_RAW_URL") {
            config.raw_url = url;
        }
        config
    }

    /// Point all three endpoints at another host, keeping the service paths
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        self.login_url = format!("{}/api/api_login.php", base_url);
        self.post_url = format!("{}/api/api_post.php", base_url);
        self.raw_url = format!("{}/api/api_raw.php", base_url);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dev_key: String::new(),
            login_url: default_login_url(),
            post_url: default_post_url(),
            raw_url: default_raw_url(),
            insecure_skip_verify: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"dev_key": "abc"}"#).unwrap();
        assert_eq!(config.dev_key, "abc");
        assert_eq!(config.post_url, DEFAULT_POST_URL);
        assert_eq!(config.login_url, DEFAULT_LOGIN_URL);
        assert!(!config.insecure_skip_verify);
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PASTEBIN_DEV_KEY", "dev"),
            ("PASTEBIN_POST_URL", "http://localhost:9000/post"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.dev_key, "dev");
        assert_eq!(config.post_url, "http://localhost:9000/post");
        assert_eq!(config.raw_url, DEFAULT_RAW_URL);
    }

    #[test]
    fn test_with_base_url() {
        let config = Config::new("k").with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.login_url, "http://127.0.0.1:8080/api/api_login.php");
        assert_eq!(config.post_url, "http://127.0.0.1:8080/api/api_post.php");
        assert_eq!(config.raw_url, "http://127.0.0.1:8080/api/api_raw.php");
        assert_eq!(config.dev_key, "k");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("/nonexistent/pastebin.json").is_err());
    }
}
