//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! versealign has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Settings next to the collections being aligned
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Chosen by [`GlobalConfigSource`]. The default search order is:
//! 1. `$VERSEALIGN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/versealign/config.toml`
//! 3. `~/.versealign/config.toml`
//!
//! # Project Config Locations
//!
//! Searched in order:
//! 1. `versealign.toml` (canonical)
//! 2. `.versealign/config.toml` (compatibility, warns)
//!
//! # Example
//!
//! ```no_run
//! use versealign::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/project"))).unwrap();
//! let config = result.config;
//!
//! println!("Source documents: {}", config.source_dir());
//! println!("Translation artifact: {}", config.translation_output());
//! ```

pub mod schema;

pub use schema::{CollectionConfig, ConfigFile, MarkupConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::artifact::IdPrefixes;

/// Name of the canonical project config file.
pub const PROJECT_CONFIG_FILE: &str = "versealign.toml";

const DEFAULT_SOURCE_DIR: &str = "resources/latin";
const DEFAULT_SOURCE_OUTPUT: &str = "latin_verses.json";
const DEFAULT_SOURCE_PREFIX: &str = "L";
const DEFAULT_TRANSLATION_DIR: &str = "resources/dryden";
const DEFAULT_TRANSLATION_OUTPUT: &str = "english_verses.json";
const DEFAULT_TRANSLATION_PREFIX: &str = "E";
const DEFAULT_EXTENSION: &str = "xml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Where the global config file comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GlobalConfigSource {
    /// Search the standard user locations.
    #[default]
    Search,
    /// Use this file if it exists.
    File(PathBuf),
    /// Skip the global scope.
    Disabled,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence automatically: project overrides global,
/// global overrides the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: ConfigFile,
    /// Project configuration (if found)
    pub project: Option<ConfigFile>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_root` is provided, also loads project config.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed, or if
    /// the merged values are inconsistent. Missing files are not an error.
    pub fn load(project_root: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        Self::load_from(project_root, &GlobalConfigSource::Search)
    }

    /// Load configuration, taking the global scope from `global`.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(
        project_root: Option<&Path>,
        global: &GlobalConfigSource,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (global, global_path) = match global {
            GlobalConfigSource::Search => Self::load_global()?,
            GlobalConfigSource::File(path) => Self::load_global_file(path)?,
            GlobalConfigSource::Disabled => (ConfigFile::default(), None),
        };

        let (project, project_path) = match project_root {
            Some(root) => Self::load_project(root, &mut warnings)?,
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        let config = Config {
            global,
            project,
            global_path,
            project_path,
        };
        config.validate_merged()?;

        Ok(ConfigLoadResult { config, warnings })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(ConfigFile, Option<PathBuf>), ConfigError> {
        if let Ok(path) = std::env::var("VERSEALIGN_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("versealign/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".versealign/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((ConfigFile::default(), None))
    }

    /// Load the global configuration from one explicit file.
    fn load_global_file(path: &Path) -> Result<(ConfigFile, Option<PathBuf>), ConfigError> {
        if !path.exists() {
            return Ok((ConfigFile::default(), None));
        }
        let config = Self::read_config(path)?;
        Ok((config, Some(path.to_path_buf())))
    }

    /// Load project configuration from the project root.
    fn load_project(
        root: &Path,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(Option<ConfigFile>, Option<PathBuf>), ConfigError> {
        let canonical = root.join(PROJECT_CONFIG_FILE);
        if canonical.exists() {
            let config = Self::read_config(&canonical)?;
            return Ok((Some(config), Some(canonical)));
        }

        let compat = root.join(".versealign/config.toml");
        if compat.exists() {
            warnings.push(ConfigWarning {
                message: format!(
                    "Using deprecated config location. Please move to '{}'",
                    canonical.display()
                ),
                path: compat.clone(),
            });
            let config = Self::read_config(&compat)?;
            return Ok((Some(config), Some(compat)));
        }

        Ok((None, None))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Checks that only make sense once both scopes are merged.
    fn validate_merged(&self) -> Result<(), ConfigError> {
        if self.source_id_prefix() == self.translation_id_prefix() {
            return Err(ConfigError::InvalidValue(format!(
                "source and translation id prefixes must differ (both '{}')",
                self.source_id_prefix()
            )));
        }
        if self.source_output() == self.translation_output() {
            return Err(ConfigError::InvalidValue(format!(
                "source and translation outputs must differ (both '{}')",
                self.source_output()
            )));
        }
        Ok(())
    }

    /// Resolve one setting: project, then global, then `default`.
    fn pick<'a>(&'a self, get: impl Fn(&'a ConfigFile) -> Option<&'a str>, default: &'a str) -> &'a str {
        self.project
            .as_ref()
            .and_then(&get)
            .or_else(|| get(&self.global))
            .unwrap_or(default)
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Directory of the source-language documents.
    ///
    /// Defaults to `resources/latin`.
    pub fn source_dir(&self) -> &str {
        self.pick(
            |c| c.source.as_ref().and_then(|s| s.dir.as_deref()),
            DEFAULT_SOURCE_DIR,
        )
    }

    /// Artifact path for the source collection.
    ///
    /// Defaults to `latin_verses.json`.
    pub fn source_output(&self) -> &str {
        self.pick(
            |c| c.source.as_ref().and_then(|s| s.output.as_deref()),
            DEFAULT_SOURCE_OUTPUT,
        )
    }

    /// Identifier prefix for source verses.
    ///
    /// Defaults to `L`.
    pub fn source_id_prefix(&self) -> &str {
        self.pick(
            |c| c.source.as_ref().and_then(|s| s.id_prefix.as_deref()),
            DEFAULT_SOURCE_PREFIX,
        )
    }

    /// Directory of the translation documents.
    ///
    /// Defaults to `resources/dryden`.
    pub fn translation_dir(&self) -> &str {
        self.pick(
            |c| c.translation.as_ref().and_then(|s| s.dir.as_deref()),
            DEFAULT_TRANSLATION_DIR,
        )
    }

    /// Artifact path for the translation collection.
    ///
    /// Defaults to `english_verses.json`.
    pub fn translation_output(&self) -> &str {
        self.pick(
            |c| c.translation.as_ref().and_then(|s| s.output.as_deref()),
            DEFAULT_TRANSLATION_OUTPUT,
        )
    }

    /// Identifier prefix for translation verses.
    ///
    /// Defaults to `E`.
    pub fn translation_id_prefix(&self) -> &str {
        self.pick(
            |c| c.translation.as_ref().and_then(|s| s.id_prefix.as_deref()),
            DEFAULT_TRANSLATION_PREFIX,
        )
    }

    /// File extension of input documents.
    ///
    /// Defaults to `xml`.
    pub fn markup_extension(&self) -> &str {
        self.pick(
            |c| c.markup.as_ref().and_then(|m| m.extension.as_deref()),
            DEFAULT_EXTENSION,
        )
    }

    /// Both identifier prefixes.
    pub fn id_prefixes(&self) -> IdPrefixes {
        IdPrefixes {
            source: self.source_id_prefix().to_string(),
            translation: self.translation_id_prefix().to_string(),
        }
    }

    /// The fully resolved configuration, as a file would spell it.
    pub fn effective(&self) -> ConfigFile {
        ConfigFile {
            source: Some(CollectionConfig {
                dir: Some(self.source_dir().to_string()),
                output: Some(self.source_output().to_string()),
                id_prefix: Some(self.source_id_prefix().to_string()),
            }),
            translation: Some(CollectionConfig {
                dir: Some(self.translation_dir().to_string()),
                output: Some(self.translation_output().to_string()),
                id_prefix: Some(self.translation_id_prefix().to_string()),
            }),
            markup: Some(MarkupConfig {
                extension: Some(self.markup_extension().to_string()),
            }),
        }
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
