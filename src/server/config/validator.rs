//! Primitive string validators and JSON value combinators.
//!
//! Every validator takes the path of the field it validates so failures can name it.
//! Validators are pure functions; composite validators collect every failure of their
//! members before returning.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::server::error::config::ConfigError;

/// Shape of a Discord snowflake: 17 to 19 decimal digits.
pub const SNOWFLAKE_PATTERN: &str = "^[0-9]{17,19}$";

/// Shape of an opaque credential or tag: one or more non-whitespace characters.
pub const TOKEN_PATTERN: &str = r"^\S+$";

static SNOWFLAKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SNOWFLAKE_PATTERN).expect("snowflake regex"));

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("token regex"));

/// Validates a snowflake identifier.
///
/// # Arguments
/// - `field` - Path of the field being validated
/// - `value` - Raw value
///
/// # Returns
/// - `Ok(String)` - The value, unchanged
/// - `Err(ConfigError::Format)` - The value is not 17 to 19 decimal digits
pub fn snowflake(field: &str, value: &str) -> Result<String, ConfigError> {
    matches(&SNOWFLAKE_RE, SNOWFLAKE_PATTERN, field, value)
}

/// Validates an opaque token (credentials, environment tags, connection strings).
///
/// # Arguments
/// - `field` - Path of the field being validated
/// - `value` - Raw value
///
/// # Returns
/// - `Ok(String)` - The value, unchanged
/// - `Err(ConfigError::Format)` - The value is empty or contains whitespace
pub fn token(field: &str, value: &str) -> Result<String, ConfigError> {
    matches(&TOKEN_RE, TOKEN_PATTERN, field, value)
}

fn matches(
    re: &Regex,
    pattern: &'static str,
    field: &str,
    value: &str,
) -> Result<String, ConfigError> {
    if re.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ConfigError::Format {
            field: field.to_string(),
            pattern,
        })
    }
}

/// Validates a JSON string value with a string validator.
pub fn string_value<T>(
    field: &str,
    value: &Value,
    validate: impl Fn(&str, &str) -> Result<T, ConfigError>,
) -> Result<T, ConfigError> {
    match value.as_str() {
        Some(raw) => validate(field, raw),
        None => Err(ConfigError::Malformed {
            field: field.to_string(),
            reason: format!("expected a string, got {}", kind(value)),
        }),
    }
}

/// Builds a validator for a JSON array whose items all pass `validate_item`.
///
/// Items are tagged `field[index]` and every failing item is reported in one
/// `ConfigError::Structural`.
pub fn list<T>(
    validate_item: impl Fn(&str, &Value) -> Result<T, ConfigError>,
) -> impl Fn(&str, &Value) -> Result<Vec<T>, ConfigError> {
    move |field: &str, value: &Value| {
        let Some(items) = value.as_array() else {
            return Err(ConfigError::Malformed {
                field: field.to_string(),
                reason: format!("expected an array, got {}", kind(value)),
            });
        };

        let mut errors = Vec::new();
        let mut validated = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            match validate_item(&format!("{field}[{index}]"), item) {
                Ok(item) => validated.push(item),
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(validated)
        } else {
            Err(ConfigError::Structural {
                field: field.to_string(),
                errors,
            })
        }
    }
}

/// Decodes a raw environment value holding serialized JSON.
pub fn json(field: &str, raw: &str) -> Result<Value, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::Malformed {
        field: field.to_string(),
        reason: format!("invalid JSON: {e}"),
    })
}

/// Human readable name of a JSON value's type, for error messages.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests that 17 to 19 digit strings are accepted unchanged.
    #[test]
    fn snowflake_accepts_valid_lengths() {
        for value in [
            "12345678901234567",
            "123456789012345678",
            "1234567890123456789",
            "81384788765712384",
            "00000000000000000",
        ] {
            assert_eq!(snowflake("ID", value).unwrap(), value);
        }
    }

    /// Tests that any non-digit character or wrong length is rejected.
    ///
    /// Expected: Err(Format) naming the field and the snowflake pattern
    #[test]
    fn snowflake_rejects_malformed_values() {
        for value in [
            "",
            "1234567890123456",
            "12345678901234567890",
            "1234567890123456a",
            "12345678901234567 ",
            " 12345678901234567",
            "123456789-12345678",
            "１２３４５６７８９０１２３４５６７",
        ] {
            assert_eq!(
                snowflake("ID", value).unwrap_err(),
                ConfigError::Format {
                    field: "ID".to_string(),
                    pattern: SNOWFLAKE_PATTERN,
                }
            );
        }
    }

    /// Tests that tokens accept any non-whitespace run and reject whitespace.
    #[test]
    fn token_rejects_whitespace() {
        assert_eq!(token("T", "abc.DEF-123_x").unwrap(), "abc.DEF-123_x");
        assert!(token("T", "").is_err());
        assert!(token("T", "two words").is_err());
        assert!(token("T", "trailing\n").is_err());
    }

    /// Tests that a list reports every failing item, tagged with its index.
    ///
    /// Expected: Err(Structural) with exactly the two bad items
    #[test]
    fn list_collects_every_item_error() {
        let validate = list(|field, value| string_value(field, value, snowflake));
        let value = json!(["12345678901234567", "nope", 42]);

        let err = validate("DEFAULT_ROLES", &value).unwrap_err();
        let fields: Vec<&str> = err.leaves().iter().filter_map(|e| e.field()).collect();

        assert_eq!(fields, vec!["DEFAULT_ROLES[1]", "DEFAULT_ROLES[2]"]);
    }

    /// Tests that an empty list is valid.
    #[test]
    fn list_accepts_empty_array() {
        let validate = list(|field, value| string_value(field, value, snowflake));
        assert!(validate("DEFAULT_ROLES", &json!([])).unwrap().is_empty());
    }

    /// Tests that undecodable JSON is reported as malformed.
    #[test]
    fn json_reports_decode_failure() {
        assert!(matches!(
            json("SECTORS_ROLES", "{not json"),
            Err(ConfigError::Malformed { .. })
        ));
    }
}
