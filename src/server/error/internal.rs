use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Replied to the invoking user with a generic message, details are only logged.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A snowflake string parsed to zero, which Discord never issues as an ID
    #[error("ID '{value}' is zero and cannot identify a Discord object")]
    ZeroId {
        /// The string value that parsed to zero
        value: String,
    },

    /// A stored vocabulary tag no longer matches any known member.
    ///
    /// Occurs when a record was written with a tag that has since been removed or
    /// renamed in the vocabulary definitions.
    #[error("Stored value '{value}' in column '{column}' is not a known tag")]
    UnknownStoredTag {
        /// Column the tag was read from
        column: &'static str,
        /// The stored value
        value: String,
    },

    /// Failure to convert a Discord timestamp into a UTC date time
    #[error("Failed to convert Unix timestamp {timestamp} to a UTC date time")]
    InvalidTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
    },
}
