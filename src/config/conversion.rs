// Author: Dustin Pilgrim
// License: MIT

use crate::{TomlError, Value};

fn type_error(expected: &str, value: &Value, hint: &str, code: u32) -> TomlError {
    TomlError::TypeError {
        message: format!("Expected {}, got {} {}", expected, value.type_name(), value),
        line: 0,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = TomlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value, "Quote the value in your config", 401)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = TomlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            Value::Integer(n) => Ok(n as f64),
            _ => Err(type_error("number", &value, "Use a number value in your config", 402)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = TomlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = f64::try_from(value)?;
        let narrowed = n as f32;
        if n.is_finite() && !narrowed.is_finite() {
            return Err(TomlError::TypeError {
                message: format!("Number {} out of range for f32", n),
                line: 0,
                hint: Some(format!("Use a number between {} and {}", f32::MIN, f32::MAX)),
                code: Some(407),
            });
        }
        Ok(narrowed)
    }
}

impl TryFrom<Value> for i64 {
    type Error = TomlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            Value::Float(_) => Err(type_error(
                "integer",
                &value,
                "Write the value without a decimal point",
                403,
            )),
            _ => Err(type_error("integer", &value, "Use an unquoted integer in your config", 402)),
        }
    }
}

/// Integer targets narrower than `i64`, checked for range.
macro_rules! impl_try_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = TomlError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| TomlError::TypeError {
                        message: format!("Number {} out of range for {}", n, stringify!($ty)),
                        line: 0,
                        hint: Some(format!(
                            "Use a number between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some(407),
                    })
                }
            }
        )*
    };
}

impl_try_from_integer!(i32, u8, u16, u32, u64, usize);

/// Booleans are not a value type of their own; `true`/`false` arrive as
/// strings, quoted or bare.
impl TryFrom<Value> for bool {
    type Error = TomlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match &value {
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
            Value::String(s) => Err(TomlError::TypeError {
                message: format!("Invalid boolean value '{}'", s),
                line: 0,
                hint: Some("Use 'true' or 'false'".into()),
                code: Some(404),
            }),
            _ => Err(type_error("boolean", &value, "Use 'true' or 'false'", 404)),
        }
    }
}
