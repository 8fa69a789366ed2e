use chrono::{DateTime, Utc};
use serenity::all::{RoleId, Timestamp};
use std::num::NonZeroU64;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a Discord role ID from a snowflake string
///
/// The snowflake validator accepts all-zero strings, which Serenity cannot represent,
/// so zero is rejected here instead of panicking in `RoleId::new`.
///
/// # Arguments
/// - `value` - Snowflake string of the role
///
/// # Returns
/// - `Ok(RoleId)` - The role ID
/// - `Err(AppError::InternalErr(ParseStringId))` - Not a valid `u64`
/// - `Err(AppError::InternalErr(ZeroId))` - The ID is zero
pub fn parse_role_id(value: &str) -> Result<RoleId, AppError> {
    let id = parse_u64_from_string(value.to_string())?;
    let id = NonZeroU64::new(id).ok_or_else(|| InternalError::ZeroId {
        value: value.to_string(),
    })?;

    Ok(RoleId::from(id))
}

/// Converts a Discord timestamp into a chrono UTC date time
///
/// # Arguments
/// - `timestamp` - Timestamp received from Discord
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The same instant, truncated to whole seconds
/// - `Err(AppError::InternalErr(InvalidTimestamp))` - Out of chrono's range
pub fn timestamp_to_utc(timestamp: Timestamp) -> Result<DateTime<Utc>, AppError> {
    let seconds = timestamp.unix_timestamp();

    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| InternalError::InvalidTimestamp { timestamp: seconds }.into())
}
