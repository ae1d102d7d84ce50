//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `CVMATCH_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_SEQ_LEN, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_MODEL_ID};

/// Which text encoder the server runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncoderMode {
    /// The pretrained MiniLM sentence encoder (local directory or Hugging Face Hub).
    #[default]
    MiniLm,
    /// Hashed bag-of-words; no model files, not semantic.
    Stub,
}

impl std::str::FromStr for EncoderMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "minilm" | "model" => Ok(EncoderMode::MiniLm),
            "stub" => Ok(EncoderMode::Stub),
            _ => Err(ConfigError::InvalidEncoder {
                value: value.to_string(),
            }),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `CVMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Encoder selection. Default: [`EncoderMode::MiniLm`]; `stub` must be asked for.
    pub encoder: EncoderMode,

    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    ///
    /// When unset the model is fetched from the Hub by [`Config::model_id`].
    pub model_path: Option<PathBuf>,

    /// Hub repository used when no local model directory is configured.
    pub model_id: String,

    /// Tokens kept per encoded text. Default: `256`.
    pub max_seq_len: usize,

    /// Largest accepted request body in bytes. Default: 10 MiB.
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            encoder: EncoderMode::default(),
            model_path: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "CVMATCH_PORT";
    pub const ENV_BIND_ADDR: &'static str = "CVMATCH_BIND_ADDR";
    pub const ENV_ENCODER: &'static str = "CVMATCH_ENCODER";
    pub const ENV_MODEL_PATH: &'static str = "CVMATCH_MODEL_PATH";
    pub const ENV_MODEL_ID: &'static str = "CVMATCH_MODEL_ID";
    pub const ENV_MAX_SEQ_LEN: &'static str = "CVMATCH_MAX_SEQ_LEN";
    pub const ENV_MAX_UPLOAD_BYTES: &'static str = "CVMATCH_MAX_UPLOAD_BYTES";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let encoder = match env::var(Self::ENV_ENCODER) {
            Ok(value) => value.parse()?,
            Err(_) => defaults.encoder,
        };
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let model_id = env::var(Self::ENV_MODEL_ID)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.model_id);
        let max_seq_len = Self::parse_limit_from_env(Self::ENV_MAX_SEQ_LEN, defaults.max_seq_len)?;
        let max_upload_bytes =
            Self::parse_limit_from_env(Self::ENV_MAX_UPLOAD_BYTES, defaults.max_upload_bytes)?;

        Ok(Self {
            port,
            bind_addr,
            encoder,
            model_path,
            model_id,
            max_seq_len,
            max_upload_bytes,
        })
    }

    /// Validates paths and limits (does not load the model).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.max_seq_len == 0 {
            return Err(ConfigError::InvalidLimit {
                name: Self::ENV_MAX_SEQ_LEN,
                value: "0".to_string(),
            });
        }

        if self.max_upload_bytes == 0 {
            return Err(ConfigError::InvalidLimit {
                name: Self::ENV_MAX_UPLOAD_BYTES,
                value: "0".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_limit_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(name) {
            Ok(value) => match value.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => Ok(limit),
                _ => Err(ConfigError::InvalidLimit { name, value }),
            },
            Err(_) => Ok(default),
        }
    }
}
