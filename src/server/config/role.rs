//! Ordered role entries: a configured Discord role with its sort position.

use serde::Serialize;
use serde_json::Value;
use serenity::all::RoleId;

use crate::server::{
    config::validator::{kind, snowflake, string_value},
    error::{config::ConfigError, AppError},
    util::parse::parse_role_id,
};

/// One configured Discord role together with its display and priority position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderedRole {
    /// Sort position, lower first. Defaults to 0 when not configured.
    pub index: i64,
    /// Snowflake ID of the Discord role.
    pub id: String,
}

impl OrderedRole {
    /// Converts the configured ID into a Serenity role ID.
    ///
    /// # Returns
    /// - `Ok(RoleId)` - The role ID
    /// - `Err(AppError::InternalErr(ParseStringId))` - ID does not fit in a `u64`
    /// - `Err(AppError::InternalErr(ZeroId))` - ID is all zeros
    pub fn role_id(&self) -> Result<RoleId, AppError> {
        parse_role_id(&self.id)
    }
}

/// Validates an ordered role entry `{ "index": <integer>?, "id": <snowflake> }`.
///
/// Both keys are checked before returning so every problem in the entry is reported.
///
/// # Arguments
/// - `field` - Path of the entry being validated
/// - `value` - Raw JSON value of the entry
///
/// # Returns
/// - `Ok(OrderedRole)` - The validated entry, `index` defaulted to 0 when absent
/// - `Err(ConfigError::Malformed)` - The entry is not a JSON object
/// - `Err(ConfigError::Structural)` - One or more keys are missing or invalid
pub fn ordered_role(field: &str, value: &Value) -> Result<OrderedRole, ConfigError> {
    let Some(object) = value.as_object() else {
        return Err(ConfigError::Malformed {
            field: field.to_string(),
            reason: format!("expected an object, got {}", kind(value)),
        });
    };

    let mut errors = Vec::new();

    let id_field = format!("{field}.id");
    let id = match object.get("id") {
        Some(raw) => string_value(&id_field, raw, snowflake)
            .map_err(|e| errors.push(e))
            .ok(),
        None => {
            errors.push(ConfigError::MissingField(id_field));
            None
        }
    };

    let index = match object.get("index") {
        None => Some(0),
        Some(raw) => match raw.as_i64() {
            Some(index) => Some(index),
            None => {
                errors.push(ConfigError::Malformed {
                    field: format!("{field}.index"),
                    reason: format!("expected an integer, got {}", kind(raw)),
                });
                None
            }
        },
    };

    match (index, id) {
        (Some(index), Some(id)) if errors.is_empty() => Ok(OrderedRole { index, id }),
        _ => Err(ConfigError::Structural {
            field: field.to_string(),
            errors,
        }),
    }
}
