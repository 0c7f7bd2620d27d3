use super::*;

impl TomlConfig {
    /// Get a value and check it with `validator`. On rejection the error
    /// names the config line and the `valid_values` description.
    pub fn get_validated<T, F>(&self, path: &str, validator: F, valid_values: &str) -> Result<T, TomlError>
    where
        T: TryFrom<Value, Error = TomlError>,
        F: FnOnce(&T) -> bool,
    {
        let typed_value: T = self.get(path)?;

        if !validator(&typed_value) {
            return Err(self.with_line_info(
                TomlError::ValidationError {
                    message: format!("Invalid value for `{}`\nExpected: {}", path, valid_values),
                    line: 0,
                    hint: Some(format!("Valid values are: {}", valid_values)),
                    code: Some(450),
                },
                path,
            ));
        }

        Ok(typed_value)
    }

    /// Get a string value and validate it's one of the allowed values
    /// (case-insensitive).
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> Result<String, TomlError> {
        let value: String = self.get(path)?;

        if !allowed_values.iter().any(|v| v.eq_ignore_ascii_case(&value)) {
            return Err(self.with_line_info(
                TomlError::ValidationError {
                    message: format!("Invalid value '{}' for `{}`", value, path),
                    line: 0,
                    hint: Some(format!("Expected one of: {}", allowed_values.join(", "))),
                    code: Some(451),
                },
                path,
            ));
        }

        Ok(value)
    }

    /// Get a number and check `min <= value <= max`.
    pub fn get_in_range<T>(&self, path: &str, min: T, max: T) -> Result<T, TomlError>
    where
        T: TryFrom<Value, Error = TomlError> + PartialOrd + std::fmt::Display,
    {
        let description = format!("a number between {} and {}", min, max);
        self.get_validated(path, |v: &T| *v >= min && *v <= max, &description)
    }

    /// Line number where `path` is assigned in the source, if it can be found.
    pub fn line_of(&self, path: &str) -> Option<usize> {
        let (location, _) = self.resolve(path)?;
        let (line, _) = helpers::find_config_line(&location, &self.raw_content);
        (line > 0).then_some(line)
    }
}
