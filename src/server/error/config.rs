use thiserror::Error;

/// Configuration validation failure.
///
/// Leaf variants describe a single field; `Structural` groups every failure found
/// inside one composite value and `Fatal` groups every failure found in the whole
/// environment. Validators never stop at the first problem, so an operator can fix
/// a configuration in a single pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Required key of a nested configuration object is absent.
    #[error("{0}: missing required key")]
    MissingField(String),

    /// Value does not match the shape required for its field.
    ///
    /// The offending value itself is not included, as the field may hold a credential.
    #[error("{field}: does not match the expected pattern {pattern}")]
    Format {
        /// Path of the offending field
        field: String,
        /// Pattern the value must match
        pattern: &'static str,
    },

    /// Value is not a member of the field's closed vocabulary.
    #[error("{field}: unknown value '{value}', expected one of: {}", .allowed.join(", "))]
    UnknownEnumMember {
        /// Path of the offending field
        field: String,
        /// The value that was received
        value: String,
        /// Every accepted value
        allowed: Vec<&'static str>,
    },

    /// Value has the wrong type or cannot be decoded at all.
    #[error("{field}: {reason}")]
    Malformed {
        /// Path of the offending field
        field: String,
        /// What was expected instead
        reason: String,
    },

    /// One or more members of a composite value failed validation.
    #[error("{field}: {} invalid", count_entries(.errors))]
    Structural {
        /// Path of the composite value
        field: String,
        /// Every failure found inside the value
        errors: Vec<ConfigError>,
    },

    /// The environment as a whole is invalid; the process must not continue.
    #[error("{}", report(.0))]
    Fatal(Vec<ConfigError>),
}

impl ConfigError {
    /// Flattens nested `Structural` and `Fatal` errors into their leaf failures.
    ///
    /// # Returns
    /// - `Vec<&ConfigError>` - Every leaf failure in report order
    pub fn leaves(&self) -> Vec<&ConfigError> {
        match self {
            Self::Structural { errors, .. } | Self::Fatal(errors) => {
                errors.iter().flat_map(ConfigError::leaves).collect()
            }
            leaf => vec![leaf],
        }
    }
}

#[cfg(test)]
impl ConfigError {
    /// Field path the error is attached to, if any.
    pub(crate) fn field(&self) -> Option<&str> {
        match self {
            Self::MissingEnvVar(field) | Self::MissingField(field) => Some(field),
            Self::Format { field, .. }
            | Self::UnknownEnumMember { field, .. }
            | Self::Malformed { field, .. }
            | Self::Structural { field, .. } => Some(field),
            Self::Fatal(_) => None,
        }
    }
}

fn count_entries(errors: &[ConfigError]) -> String {
    match errors.len() {
        1 => "1 entry".to_string(),
        n => format!("{n} entries"),
    }
}

/// Renders the aggregated report printed before the process exits.
fn report(errors: &[ConfigError]) -> String {
    let leaves: Vec<&ConfigError> = errors.iter().flat_map(ConfigError::leaves).collect();

    let mut report = format!(
        "Invalid configuration, {} problem{} found:",
        leaves.len(),
        if leaves.len() == 1 { "" } else { "s" }
    );
    for leaf in leaves {
        report.push_str("\n  - ");
        report.push_str(&leaf.to_string());
    }

    report
}
