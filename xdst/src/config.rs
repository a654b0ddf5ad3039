//! Loading of the YAML configuration that lists the translation jobs.
//!
//! ```yaml
//! rootPath: "../app/src/main"
//! translations:
//!   - from:
//!       - res/values/strings.xml
//!       - fallback.strings
//!     to:
//!       - ios/en.lproj/Localizable.strings
//! ```
//!
//! A relative `rootPath` is resolved against the directory that contains
//! the configuration file; every `from` / `to` path is relative to the
//! resolved root unless it is absolute itself.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::Error;

/// File name looked up in the working directory when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "XMLDotStringConfig.yaml";

/// One translation job: merge every `from` file, write into every `to` file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub from: Option<Vec<String>>,
    #[serde(default)]
    pub to: Option<Vec<String>>,
}

impl Translation {
    pub fn sources(&self) -> &[String] {
        self.from.as_deref().unwrap_or_default()
    }

    pub fn destinations(&self) -> &[String] {
        self.to.as_deref().unwrap_or_default()
    }
}

/// The whole configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RootConfig {
    #[serde(rename = "rootPath")]
    pub root_path: PathBuf,
    #[serde(default)]
    pub translations: Option<Vec<Translation>>,
}

impl RootConfig {
    /// Parses a configuration document. `root_path` is taken as written.
    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        serde_yaml::from_str(text)
            .map_err(|e| Error::IllegalConfig(format!("could not read the yaml config: {}", e)))
    }

    /// Loads the configuration at `path` and resolves a relative `rootPath`
    /// against the directory containing that file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FileNotFound(format!(
                "Could not find config file under:\n\t{}",
                path.display()
            )));
        }

        let mut config = Self::from_yaml(&fs::read_to_string(path)?)?;
        if config.root_path.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.root_path = base.join(&config.root_path);
        }
        Ok(config)
    }

    pub fn translations(&self) -> &[Translation] {
        self.translations.as_deref().unwrap_or_default()
    }

    /// Resolves a path from a translation job against the root path.
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.root_path.join(file)
    }
}
