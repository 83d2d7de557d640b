//! Application configuration and environment variable handling.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Application configuration, loaded once at startup by the caller and
/// injected into the components that need it.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Server bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path to the serialized model file.
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    /// Path to the category mapping JSON file.
    #[serde(default = "default_mappings_path")]
    pub mappings_path: PathBuf,
    /// Path to the airport coordinates CSV file.
    #[serde(default = "default_airports_path")]
    pub airports_path: PathBuf,
    /// API key for the flight search service.
    pub search_api_key: String,
    /// Base URL of the flight search service.
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_model_path() -> PathBuf {
    PathBuf::from("data/model.json")
}

fn default_mappings_path() -> PathBuf {
    PathBuf::from("data/all_mappings.json")
}

fn default_airports_path() -> PathBuf {
    PathBuf::from("data/iata-icao.csv")
}

fn default_search_base_url() -> String {
    "https://serpapi.com/search".to_string()
}

impl AppConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `SERPAPI_KEY` (required): flight search API key
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 8080): bind port
    /// - `DELAYCAST_MODEL` (optional, default: data/model.json)
    /// - `DELAYCAST_MAPPINGS` (optional, default: data/all_mappings.json)
    /// - `DELAYCAST_AIRPORTS` (optional, default: data/iata-icao.csv)
    /// - `DELAYCAST_SEARCH_URL` (optional, default: the SerpApi endpoint)
    ///
    /// # Errors
    /// Returns an error if required variables are not set or malformed.
    pub fn from_env() -> Result<Self, String> {
        let search_api_key = env::var("SERPAPI_KEY")
            .map_err(|_| "SERPAPI_KEY environment variable not set".to_string())?;
        let host = env::var("HOST").unwrap_or_else(|_| default_host());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| "PORT must be a valid port number".to_string())?,
            Err(_) => default_port(),
        };

        Ok(Self {
            host,
            port,
            model_path: env_path("DELAYCAST_MODEL").unwrap_or_else(default_model_path),
            mappings_path: env_path("DELAYCAST_MAPPINGS").unwrap_or_else(default_mappings_path),
            airports_path: env_path("DELAYCAST_AIRPORTS").unwrap_or_else(default_airports_path),
            search_api_key,
            search_base_url: env::var("DELAYCAST_SEARCH_URL")
                .unwrap_or_else(|_| default_search_base_url()),
        })
    }

    /// Load a configuration from a TOML file.
    ///
    /// All fields except `search_api_key` fall back to the same defaults
    /// as [`AppConfig::from_env`].
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read config file {:?}: {}", path, e))?;
        toml::from_str(&text).map_err(|e| format!("invalid config file {:?}: {}", path, e))
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key).ok().map(PathBuf::from)
}
