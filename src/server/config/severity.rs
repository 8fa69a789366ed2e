//! Minimum log severity, accepted by name or by numeric ordinal.
//!
//! Deployments configured for the numeric level encoding of the previous logging
//! framework set `LOG_LEVEL=40` instead of `LOG_LEVEL=Warn`; both forms resolve to the
//! same severity through the explicit ordinal table below.

use tracing::level_filters::LevelFilter;

use crate::{
    model::vocabulary::{vocabulary, Vocabulary},
    server::error::config::ConfigError,
};

vocabulary! {
    /// Named log severities, most verbose first.
    pub enum LogSeverity {
        Trace => "Trace",
        Debug => "Debug",
        Info => "Info",
        Warn => "Warn",
        Error => "Error",
        Fatal => "Fatal",
    }
}

/// Severity ordinals, kept explicit rather than derived from declaration order.
const ORDINALS: [(LogSeverity, u8); 6] = [
    (LogSeverity::Trace, 10),
    (LogSeverity::Debug, 20),
    (LogSeverity::Info, 30),
    (LogSeverity::Warn, 40),
    (LogSeverity::Error, 50),
    (LogSeverity::Fatal, 60),
];

impl LogSeverity {
    /// Numeric ordinal of this severity.
    pub fn ordinal(self) -> u8 {
        ORDINALS
            .iter()
            .find(|(severity, _)| *severity == self)
            .map(|(_, ordinal)| *ordinal)
            .unwrap_or_default()
    }

    /// Validates a raw `LOG_LEVEL` value.
    ///
    /// Accepts either the case-sensitive name of a severity or the exact decimal string
    /// of its ordinal, so `"Warn"` and `"40"` produce the same severity while `"+40"`
    /// and `"040"` are rejected.
    ///
    /// # Arguments
    /// - `field` - Path of the field being validated
    /// - `value` - Raw value
    ///
    /// # Returns
    /// - `Ok(LogSeverity)` - The matching severity
    /// - `Err(ConfigError::UnknownEnumMember)` - Neither a name nor a known ordinal
    pub fn parse_level(field: &str, value: &str) -> Result<Self, ConfigError> {
        if let Some(severity) = Self::from_tag(value) {
            return Ok(severity);
        }

        ORDINALS
            .iter()
            .find(|(_, ordinal)| ordinal.to_string() == value)
            .map(|(severity, _)| *severity)
            .ok_or_else(|| ConfigError::UnknownEnumMember {
                field: field.to_string(),
                value: value.to_string(),
                allowed: Self::accepted(),
            })
    }

    /// Maps the severity onto the tracing subscriber's level filter.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::TRACE,
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Error | Self::Fatal => LevelFilter::ERROR,
        }
    }

    fn accepted() -> Vec<&'static str> {
        const NUMERIC: [&str; 6] = ["10", "20", "30", "40", "50", "60"];

        Self::tags().into_iter().chain(NUMERIC).collect()
    }
}
