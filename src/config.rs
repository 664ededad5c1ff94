//! Session configuration.
//!
//! Values are layered with figment: built-in defaults, then `CMDLINE_*`
//! environment variables, then command-line flags. There is no config file.

use encoding_rs::Encoding;
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};

/// Prefix of the environment variables read at startup.
pub const ENV_PREFIX: &str = "CMDLINE_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// WHATWG label of the console encoding, e.g. `utf-8` or `windows-1251`.
    pub encoding: String,
    /// WHATWG label used to decode files printed by CAT.
    pub file_encoding: String,
    pub prompt: String,
    /// Print the two welcome lines before the first prompt.
    pub banner: bool,
    /// Default `env_logger` filter, `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            file_encoding: "utf-8".to_string(),
            prompt: "> ".to_string(),
            banner: true,
            log_level: "warn".to_string(),
        }
    }
}

/// Values given on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Build the figment for the given command-line overrides.
    pub fn figment(overrides: &ConfigOverrides) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
    }

    /// Load the configuration and check that both encoding labels are known.
    pub fn load(overrides: &ConfigOverrides) -> ShellResult<Self> {
        let config: Config = Self::figment(overrides).extract()?;
        config.console_encoding()?;
        config.file_encoding()?;
        Ok(config)
    }

    /// Resolve the file encoding label. Files are decoded as a stream, so
    /// any encoding is accepted.
    pub fn file_encoding(&self) -> ShellResult<&'static Encoding> {
        Encoding::for_label(self.file_encoding.trim().as_bytes())
            .ok_or_else(|| ShellError::UnknownEncoding(self.file_encoding.clone()))
    }

    /// Resolve the encoding label. Lines are split on `\n` bytes, so
    /// encodings like UTF-16 are refused.
    pub fn console_encoding(&self) -> ShellResult<&'static Encoding> {
        let encoding = Encoding::for_label(self.encoding.trim().as_bytes())
            .ok_or_else(|| ShellError::UnknownEncoding(self.encoding.clone()))?;
        if !encoding.is_ascii_compatible() {
            return Err(ShellError::UnsupportedEncoding(self.encoding.clone()));
        }
        Ok(encoding)
    }
}
