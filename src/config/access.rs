use super::*;

impl TomlConfig {
    /// Get a typed value using `key` for globals or `section.key` for
    /// section entries.
    ///
    /// Both `snake_case` and `kebab-case` spellings of the key are accepted.
    ///
    /// # Examples
    /// ```no_run
    /// # use microtoml::TomlConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = TomlConfig::from_file("config.toml")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// `MissingKey` if the path doesn't exist, `TypeError` if the value
    /// can't be converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, TomlError>
    where
        T: TryFrom<Value, Error = TomlError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| self.with_line_info(e, path))
    }

    /// Like [`get`](Self::get), but an absent key is `Ok(None)`.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, TomlError>
    where
        T: TryFrom<Value, Error = TomlError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(TomlError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// ```no_run
    /// # use microtoml::TomlConfig;
    /// # let config = TomlConfig::from_file("config.toml").unwrap();
    /// let timeout = config.get_or("server.timeout", 30u64);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = TomlError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get the raw `Value` at `path`.
    pub fn get_value(&self, path: &str) -> Result<Value, TomlError> {
        self.lookup(path).cloned().ok_or_else(|| TomlError::MissingKey {
            path: path.to_string(),
            hint: Some("Check that the key exists in your config file".into()),
            code: Some(304),
        })
    }

    /// Keys of a section, in the order they first appeared.
    pub fn get_keys(&self, section: &str) -> Result<Vec<String>, TomlError> {
        let view = self.document.section(section);
        if !view.exists() {
            return Err(TomlError::MissingKey {
                path: section.to_string(),
                hint: Some(format!("No [{}] section in config", section)),
                code: Some(305),
            });
        }
        Ok(view.keys().map(str::to_string).collect())
    }

    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        self.resolve(path).map(|(_, value)| value)
    }

    /// Find the value for `path` and where it came from. Candidates are
    /// tried global first, then shortest section name first, exact key
    /// spelling before its `_`/`-` variants.
    pub(super) fn resolve<'p>(&self, path: &'p str) -> Option<(helpers::KeyLocation<'p>, &Value)> {
        helpers::split_candidates(path)
            .into_iter()
            .find_map(|(section, key)| {
                helpers::key_variants(key).into_iter().find_map(|k| {
                    let value = match section {
                        None => self.document.get_global(&k),
                        Some(name) => self.document.section(name).get(&k),
                    }?;
                    Some((helpers::KeyLocation { section, key: k }, value))
                })
            })
    }

    /// Attach the config line of `path` to type and validation errors.
    pub(super) fn with_line_info(&self, e: TomlError, path: &str) -> TomlError {
        let (line, snippet) = match self.resolve(path) {
            Some((location, _)) => helpers::find_config_line(&location, &self.raw_content),
            None => return e,
        };
        match e {
            TomlError::TypeError { message, hint, code, .. } if line > 0 => TomlError::TypeError {
                message: format!("{}\n  → {}", message, snippet),
                line,
                hint,
                code,
            },
            TomlError::ValidationError { message, hint, code, .. } if line > 0 => {
                TomlError::ValidationError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                    code,
                }
            }
            other => other,
        }
    }
}
