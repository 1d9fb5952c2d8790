//! core::config::schema
//!
//! Configuration schema types.
//!
//! Both the global and the project file use [`ConfigFile`]; every field is
//! optional so a file only needs to name what it overrides.
//!
//! # Validation
//!
//! Values are validated after parsing: paths and prefixes must be
//! non-empty, and the markup extension is given without a leading dot.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// One configuration file.
///
/// # Example
///
/// ```toml
/// [source]
/// dir = "resources/latin"
/// output = "latin_verses.json"
/// id_prefix = "L"
///
/// [translation]
/// dir = "resources/dryden"
/// output = "english_verses.json"
/// id_prefix = "E"
///
/// [markup]
/// extension = "xml"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Source-language collection settings
    pub source: Option<CollectionConfig>,

    /// Translation collection settings
    pub translation: Option<CollectionConfig>,

    /// Input document settings
    pub markup: Option<MarkupConfig>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(source) = &self.source {
            source.validate("source")?;
        }
        if let Some(translation) = &self.translation {
            translation.validate("translation")?;
        }
        if let Some(markup) = &self.markup {
            markup.validate()?;
        }
        Ok(())
    }
}

/// Settings for one collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CollectionConfig {
    /// Directory holding the collection's documents
    pub dir: Option<String>,

    /// Artifact file written by `build` and read by `check`
    pub output: Option<String>,

    /// Prefix of the verse identifiers in the artifact
    pub id_prefix: Option<String>,
}

impl CollectionConfig {
    fn validate(&self, table: &str) -> Result<(), ConfigError> {
        for (key, value) in [
            ("dir", &self.dir),
            ("output", &self.output),
            ("id_prefix", &self.id_prefix),
        ] {
            if value.as_deref().is_some_and(str::is_empty) {
                return Err(ConfigError::InvalidValue(format!(
                    "{}.{} cannot be empty",
                    table, key
                )));
            }
        }
        Ok(())
    }
}

/// Settings for input documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MarkupConfig {
    /// File extension of documents, without the dot
    pub extension: Option<String>,
}

impl MarkupConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(extension) = &self.extension {
            if extension.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "markup.extension cannot be empty".to_string(),
                ));
            }
            if extension.starts_with('.') {
                return Err(ConfigError::InvalidValue(format!(
                    "markup.extension '{}' must not start with '.'",
                    extension
                )));
            }
        }
        Ok(())
    }
}
