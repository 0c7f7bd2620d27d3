// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ast::{Document, SectionView, Value};
use crate::parser::{ParseOptions, Parser};
use crate::TomlError;

mod access;
mod validation;
mod conversion;
mod helpers;

/// A parsed config together with the text it came from.
///
/// The raw text is kept so typed-access and validation errors can point at
/// the line where the offending key was written.
pub struct TomlConfig {
    document: Document,
    raw_content: String,
    source: Option<PathBuf>,
}

impl TomlConfig {
    /// Load and parse a config file. A leading `~/` expands to the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = TomlConfig::from_file("~/.config/app/config.toml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TomlError> {
        Self::from_file_with_options(path, ParseOptions::default())
    }

    pub fn from_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self, TomlError> {
        let path = helpers::expand_home(path.as_ref())?;

        let content = fs::read_to_string(&path).map_err(|e| TomlError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        let mut config = Self::from_str_with_options(&content, options)?;
        debug!(path = %path.display(), "loaded config file");
        config.source = Some(path);
        Ok(config)
    }

    /// Load a config file with fallback support
    ///
    /// Tries the primary path first. Only a file error (missing or
    /// unreadable) moves on to the fallback; a parse error in the primary
    /// file is returned as is.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, TomlError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(TomlError::FileError { .. }) => {
                debug!(
                    primary = %primary.as_ref().display(),
                    fallback = %fallback.as_ref().display(),
                    "primary config unavailable, trying fallback"
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    TomlError::FileError { message, .. } => TomlError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(301),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Parse a config from a string (no file I/O)
    pub fn from_str(content: &str) -> Result<Self, TomlError> {
        Self::from_str_with_options(content, ParseOptions::default())
    }

    pub fn from_str_with_options(content: &str, options: ParseOptions) -> Result<Self, TomlError> {
        let document = Parser::with_options(content, options).parse_document()?;

        Ok(Self {
            document,
            raw_content: content.to_string(),
            source: None,
        })
    }

    /// Conventional location for an application's config:
    /// `<config dir>/<app_name>/config.toml`.
    pub fn default_path(app_name: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(app_name).join("config.toml"))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn get_global(&self, key: &str) -> Option<&Value> {
        self.document.get_global(key)
    }

    pub fn section(&self, name: &str) -> SectionView<'_> {
        self.document.section(name)
    }
}
