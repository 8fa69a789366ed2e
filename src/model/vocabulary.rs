//! Closed vocabularies of organizational tags.
//!
//! A vocabulary is a fixed, ordered set of string tags (sectors, committees, jobs, ...)
//! represented as a plain Rust enum. Membership is exact, case-sensitive string equality
//! against the tags declared with the [`vocabulary!`] macro; nothing is registered at
//! runtime.

use crate::server::error::config::ConfigError;

/// A closed enumeration whose members are identified by exact string tags.
pub trait Vocabulary: Copy + Eq + Ord + std::hash::Hash + std::fmt::Debug + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Returns the exact tag of this member.
    fn as_str(&self) -> &'static str;

    /// Tags of every member, in declaration order.
    fn tags() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }

    /// Looks up the member whose tag equals `tag` exactly.
    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == tag)
    }

    /// Validates a raw configuration value against this vocabulary.
    ///
    /// # Arguments
    /// - `field` - Path of the value being validated, used in the error report
    /// - `value` - Raw string to match against the vocabulary's tags
    ///
    /// # Returns
    /// - `Ok(Self)` - The member whose tag equals `value`
    /// - `Err(ConfigError::UnknownEnumMember)` - `value` is not one of the tags
    fn parse(field: &str, value: &str) -> Result<Self, ConfigError> {
        Self::from_tag(value).ok_or_else(|| ConfigError::UnknownEnumMember {
            field: field.to_string(),
            value: value.to_string(),
            allowed: Self::tags(),
        })
    }
}

/// Declares a vocabulary enum together with its [`Vocabulary`] and `Display` impls.
///
/// ```rust,ignore
/// vocabulary! {
///     pub enum Shift {
///         Day => "Day",
///         Night => "Night",
///     }
/// }
/// ```
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $crate::model::vocabulary::Vocabulary for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::model::vocabulary::Vocabulary::as_str(self))
            }
        }
    };
}

pub(crate) use vocabulary;

#[cfg(test)]
mod tests {
    use super::*;

    vocabulary! {
        enum Letter {
            A => "A",
            B => "B",
            C => "C",
        }
    }

    /// Tests that every declared tag parses to its own member.
    ///
    /// Expected: Ok with the exact member for each tag
    #[test]
    fn parses_every_member() {
        for letter in Letter::ALL {
            let parsed = Letter::parse("LETTER", letter.as_str()).unwrap();
            assert_eq!(parsed, *letter);
        }
    }

    /// Tests that membership is exact and case-sensitive.
    ///
    /// Expected: Err(UnknownEnumMember) naming the value and the allowed tags
    #[test]
    fn rejects_values_outside_vocabulary() {
        for value in ["a", "D", "", " A", "AB"] {
            let err = Letter::parse("LETTER", value).unwrap_err();
            match err {
                ConfigError::UnknownEnumMember {
                    field,
                    value: received,
                    allowed,
                } => {
                    assert_eq!(field, "LETTER");
                    assert_eq!(received, value);
                    assert_eq!(allowed, vec!["A", "B", "C"]);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    /// Tests that `ALL` keeps declaration order and `Display` prints the tag.
    #[test]
    fn keeps_declaration_order() {
        assert_eq!(Letter::tags(), vec!["A", "B", "C"]);
        assert_eq!(Letter::B.to_string(), "B");
        assert!(Letter::A < Letter::C);
    }
}
