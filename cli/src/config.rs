//! Optional YAML configuration for `cmdtree`.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to change. Command-line flags override values loaded here.
//!
//! # Example YAML
//!
//! ```yaml
//! format: json
//! usage_on_miss: false
//! strict: true
//! ```

use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Format for reports written to stdout.
    pub format: OutputFormat,
    /// Print the usage block of the deepest command when resolution fails.
    pub usage_on_miss: bool,
    /// Exit non-zero when resolution fails.
    pub strict: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            usage_on_miss: true,
            strict: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::error::CliError::Io) if the file cannot be read,
    /// or [`Yaml`](crate::error::CliError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::error::CliError::Io) if the file cannot be
    /// written, or [`Yaml`](crate::error::CliError::Yaml) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_yaml::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
