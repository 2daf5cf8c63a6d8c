use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    #[serde(alias = "apikey", default)]
    pub api_key: String,
    #[serde(alias = "baseurl", default = "default_base_url")]
    pub base_url: String,
    #[serde(alias = "imagebaseurl", default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Environment variable that overrides `tmdb.api_key`.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let mut config = Self::from_yaml(path, &content)?;
        config.override_api_key(std::env::var(API_KEY_ENV).ok());
        config.validate()?;

        Ok(config)
    }

    fn from_yaml(path: &str, content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(path.to_string(), e))
    }

    /// Replace the credential when `key` is set and non-empty.
    pub fn override_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.tmdb.api_key = key.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tmdb.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("No TMDb API key configured (set tmdb.api_key or TMDB_API_KEY)")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config = Config::from_yaml("test.yaml", "tmdb:\n  api_key: abc\n").unwrap();
        assert_eq!(config.listen.port, "8080");
        assert_eq!(config.listen.address, None);
        assert_eq!(config.tmdb.api_key, "abc");
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb.image_base_url, "https://image.tmdb.org/t/p/w500");
        assert_eq!(config.tmdb.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
listen:
  address: 127.0.0.1
  port: "9000"
tmdb:
  apikey: secret
  baseurl: http://localhost:1234/3
  timeout_secs: 3
"#;
        let config = Config::from_yaml("test.yaml", yaml).unwrap();
        assert_eq!(config.listen.address.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.listen.port, "9000");
        assert_eq!(config.tmdb.api_key, "secret");
        assert_eq!(config.tmdb.base_url, "http://localhost:1234/3");
        assert_eq!(config.tmdb.timeout_secs, 3);
    }

    #[test]
    fn test_missing_api_key() {
        let config = Config::from_yaml("test.yaml", "listen:\n  port: \"8080\"\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_override_api_key() {
        let mut config = Config::default();
        config.tmdb.api_key = "from-file".to_string();

        config.override_api_key(None);
        assert_eq!(config.tmdb.api_key, "from-file");

        config.override_api_key(Some("  ".to_string()));
        assert_eq!(config.tmdb.api_key, "from-file");

        config.override_api_key(Some("from-env".to_string()));
        assert_eq!(config.tmdb.api_key, "from-env");
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_yaml("bad.yaml", "listen: [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(ref p, _) if p == "bad.yaml"));
    }
}
