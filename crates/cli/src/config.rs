//! Configuration file management
//!
//! The config file is optional TOML. Anything set on the command line or in
//! the environment wins over the file.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use shorturl::{Alphabet, BigInt, Charset};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Complete configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Explicit symbols, in digit order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,
    /// Name of a predefined charset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    /// Radix for the canonical 0-9A-Za-z alphabet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radix: Option<usize>,
    /// Cursor start for the sequence subcommand, as decimal digits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Where the alphabet should come from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlphabetSource {
    pub alphabet: Option<String>,
    pub charset: Option<String>,
    pub radix: Option<usize>,
}

impl AlphabetSource {
    pub fn is_empty(&self) -> bool {
        self.alphabet.is_none() && self.charset.is_none() && self.radix.is_none()
    }

    /// Build the alphabet, defaulting to base62 when nothing was given
    pub fn resolve(&self) -> Result<Alphabet> {
        let given = [
            self.alphabet.is_some(),
            self.charset.is_some(),
            self.radix.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();
        if given > 1 {
            bail!("Specify only one of alphabet, charset or radix");
        }

        let alphabet = if let Some(symbols) = &self.alphabet {
            Alphabet::new(symbols).context("Invalid alphabet")?
        } else if let Some(name) = &self.charset {
            let charset: Charset = name.parse()?;
            charset.alphabet()?
        } else if let Some(radix) = self.radix {
            Alphabet::with_radix(radix)?
        } else {
            Charset::Base62.alphabet()?
        };

        Ok(alphabet)
    }
}

impl Config {
    /// Alphabet source from the file, used when the command line gives none
    pub fn alphabet_source(&self) -> AlphabetSource {
        AlphabetSource {
            alphabet: self.alphabet.clone(),
            charset: self.charset.clone(),
            radix: self.radix,
        }
    }

    pub fn start(&self) -> Result<Option<BigInt>> {
        self.start
            .as_deref()
            .map(|s| {
                s.trim()
                    .parse::<BigInt>()
                    .with_context(|| format!("Invalid start value in config: {:?}", s))
            })
            .transpose()
    }
}

/// Get the config directory path
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = directories::ProjectDirs::from("com", "parapluou", "shorturl")
        .context("Could not determine config directory")?
        .config_dir()
        .to_path_buf();

    Ok(config_dir)
}

/// Get the config file path
pub fn config_file_path() -> Result<PathBuf> {
    let mut path = config_dir()?;
    path.push("config.toml");
    Ok(path)
}

/// Load the configuration
///
/// An explicit `path` must exist. The default location is optional and a
/// missing file yields the default config.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {:?}", path);
            }
            path.to_path_buf()
        }
        None => {
            let default_path = config_file_path()?;
            if !default_path.exists() {
                // Return default config if file doesn't exist
                return Ok(Config::default());
            }
            default_path
        }
    };

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

    debug!(path = ?config_path, "Loaded config");

    Ok(config)
}
