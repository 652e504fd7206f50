use crate::commands::ValidationPolicy;
use crate::error::{CardfileError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_NAME: &str = "contacts.vcf";

/// Configuration for a contact book, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardfileConfig {
    /// Name of the card file inside the data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Require E.164 phone numbers and well-formed emails
    #[serde(default)]
    pub strict_validation: bool,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for CardfileConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            strict_validation: false,
        }
    }
}

impl CardfileConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CardfileError::Io)?;
        let config: CardfileConfig =
            serde_json::from_str(&content).map_err(CardfileError::Serialization)?;
        config.check()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        self.check()?;
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CardfileError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CardfileError::Serialization)?;
        fs::write(config_path, content).map_err(CardfileError::Io)?;
        Ok(())
    }

    /// Path of the card file for a given data directory
    pub fn contacts_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.file_name)
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            strict: self.strict_validation,
        }
    }

    // The file must stay inside the data directory.
    fn check(&self) -> Result<()> {
        let name = self.file_name.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(CardfileError::Config(format!(
                "file_name must be a plain file name, got {:?}",
                self.file_name
            )));
        }
        Ok(())
    }
}
