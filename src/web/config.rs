use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid PORT value: {0}")]
    Port(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub ephemeris: EphemerisConfig,
    #[serde(default)]
    pub horoscope: HoroscopeConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:5000".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EphemerisConfig {
    /// YAML orbital element table; the embedded table is used when unset.
    pub elements_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HoroscopeConfig {
    #[serde(default = "default_horoscope_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    #[serde(default = "default_horoscope_app_url")]
    pub horoscope_app_url: String,
    #[serde(default = "default_aztro_url")]
    pub aztro_url: String,
    #[serde(default = "default_burc_yorumlari_url")]
    pub burc_yorumlari_url: String,
}

impl Default for HoroscopeConfig {
    fn default() -> Self {
        Self {
            timeout: default_horoscope_timeout(),
            horoscope_app_url: default_horoscope_app_url(),
            aztro_url: default_aztro_url(),
            burc_yorumlari_url: default_burc_yorumlari_url(),
        }
    }
}

fn default_horoscope_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_horoscope_app_url() -> String {
    "https://horoscope-app-api.vercel.app".to_string()
}

fn default_aztro_url() -> String {
    "https://aztro.sameerkumar.website".to_string()
}

fn default_burc_yorumlari_url() -> String {
    "https://burc-yorumlari.vercel.app".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_translation_url")]
    pub base_url: String,
    #[serde(default = "default_translation_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_translation_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            base_url: default_translation_url(),
            model: default_translation_model(),
            api_key_env: default_api_key_env(),
            timeout: default_translation_timeout(),
        }
    }
}

fn default_translation_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_translation_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_translation_timeout() -> Duration {
    Duration::from_secs(30)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// `PORT` replaces the port of the bind address.
    pub fn apply_port(&mut self, port: Option<String>) -> Result<(), ConfigError> {
        if let Some(port) = port {
            let port: u16 = port.trim().parse().map_err(|_| ConfigError::Port(port.clone()))?;
            let host = self
                .web
                .bind
                .rsplit_once(':')
                .map(|(host, _)| host.to_string())
                .unwrap_or_else(|| "0.0.0.0".to_string());
            self.web.bind = format!("{}:{}", host, port);
        }
        Ok(())
    }

    pub fn translation_api_key(&self) -> Option<String> {
        std::env::var(&self.translation.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}
