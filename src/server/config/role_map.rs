//! Total mappings from a vocabulary to configured values.
//!
//! [`keyed`] turns a vocabulary and a value validator into a validator for a JSON
//! object that must hold exactly one valid value for every member of the vocabulary.
//! The resulting [`RoleMap`] can only be built through that validator, so it always
//! holds exactly one entry per vocabulary member.

use serde_json::Value;
use serenity::all::RoleId;
use std::collections::BTreeMap;

use crate::{
    model::vocabulary::Vocabulary,
    server::{
        config::{role::OrderedRole, validator::kind},
        error::config::ConfigError,
    },
};

/// Mapping from every member of the vocabulary `K` to one validated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMap<K: Vocabulary, V> {
    entries: BTreeMap<K, V>,
}

impl<K: Vocabulary, V> RoleMap<K, V> {
    /// Iterates entries in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }
}

impl<K: Vocabulary> RoleMap<K, OrderedRole> {
    /// Resolves every vocabulary member whose role is among `role_ids`.
    ///
    /// # Arguments
    /// - `role_ids` - Discord role IDs held by a guild member
    ///
    /// # Returns
    /// - `Vec<K>` - Matching members sorted by their configured `index`
    pub fn matching(&self, role_ids: &[RoleId]) -> Vec<K> {
        let mut matched: Vec<(i64, K)> = self
            .iter()
            .filter(|(_, role)| role.role_id().is_ok_and(|id| role_ids.contains(&id)))
            .map(|(key, role)| (role.index, key))
            .collect();
        matched.sort();

        matched.into_iter().map(|(_, key)| key).collect()
    }
}

/// Builds a validator for a JSON object keyed by every member of the vocabulary `K`.
///
/// The returned validator enumerates `K::ALL` and reports, in one
/// `ConfigError::Structural`:
/// - every member missing from the object, as `MissingField("<field>.<member>")`
/// - every value rejected by `validate_value`, which receives `"<field>.<member>"`
/// - every key that is not a member of `K`, as `UnknownEnumMember`
///
/// # Arguments
/// - `validate_value` - Validator applied to each member's value
///
/// # Returns
/// - Validator producing a `RoleMap<K, V>`
pub fn keyed<K, V>(
    validate_value: impl Fn(&str, &Value) -> Result<V, ConfigError>,
) -> impl Fn(&str, &Value) -> Result<RoleMap<K, V>, ConfigError>
where
    K: Vocabulary,
{
    move |field: &str, value: &Value| {
        let Some(object) = value.as_object() else {
            return Err(ConfigError::Malformed {
                field: field.to_string(),
                reason: format!("expected an object, got {}", kind(value)),
            });
        };

        let mut errors = Vec::new();
        let mut entries = BTreeMap::new();

        for member in K::ALL {
            let member_field = format!("{field}.{}", member.as_str());

            match object.get(member.as_str()) {
                Some(raw) => match validate_value(&member_field, raw) {
                    Ok(validated) => {
                        entries.insert(*member, validated);
                    }
                    Err(e) => errors.push(e),
                },
                None => errors.push(ConfigError::MissingField(member_field)),
            }
        }

        for key in object.keys() {
            if let Err(e) = K::parse(field, key) {
                errors.push(e);
            }
        }

        if errors.is_empty() {
            Ok(RoleMap { entries })
        } else {
            Err(ConfigError::Structural {
                field: field.to_string(),
                errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::vocabulary::vocabulary, server::config::role::ordered_role};
    use serde_json::json;

    vocabulary! {
        enum Letter {
            A => "A",
            B => "B",
            C => "C",
        }
    }

    const ID_A: &str = "100000000000000001";
    const ID_B: &str = "100000000000000002";
    const ID_C: &str = "100000000000000003";

    fn letters() -> impl Fn(&str, &Value) -> Result<RoleMap<Letter, OrderedRole>, ConfigError> {
        keyed::<Letter, _>(ordered_role)
    }

    fn failing_fields(err: &ConfigError) -> Vec<String> {
        err.leaves()
            .iter()
            .filter_map(|e| e.field().map(str::to_string))
            .collect()
    }

    /// Tests a complete mapping.
    ///
    /// Expected: Ok with one entry per member, each with its configured values
    #[test]
    fn accepts_complete_mapping() {
        let raw = json!({
            "A": { "index": 2, "id": ID_A },
            "B": { "id": ID_B },
            "C": { "index": 1, "id": ID_C },
        });

        let map = letters()("LETTERS", &raw).unwrap();
        let entries: Vec<(Letter, i64, &str)> = map
            .iter()
            .map(|(key, role)| (key, role.index, role.id.as_str()))
            .collect();

        assert_eq!(
            entries,
            vec![(Letter::A, 2, ID_A), (Letter::B, 0, ID_B), (Letter::C, 1, ID_C)]
        );
    }

    /// Tests that a missing member is named in the aggregated error.
    ///
    /// Expected: Err(Structural) naming exactly `LETTERS.B` as missing
    #[test]
    fn names_missing_member() {
        let raw = json!({
            "A": { "id": ID_A },
            "C": { "id": ID_C },
        });

        let err = letters()("LETTERS", &raw).unwrap_err();

        assert_eq!(
            err.leaves(),
            vec![&ConfigError::MissingField("LETTERS.B".to_string())]
        );
    }

    /// Tests that only the member with an invalid value is reported.
    ///
    /// Expected: Err(Structural) whose only failing path is under `LETTERS.C`
    #[test]
    fn names_only_the_invalid_member() {
        let raw = json!({
            "A": { "id": ID_A },
            "B": { "id": ID_B },
            "C": { "id": "not-a-snowflake" },
        });

        let err = letters()("LETTERS", &raw).unwrap_err();

        assert_eq!(failing_fields(&err), vec!["LETTERS.C.id".to_string()]);
    }

    /// Tests that missing, invalid and unknown keys are all reported together.
    #[test]
    fn aggregates_every_problem() {
        let raw = json!({
            "A": { "id": "1" },
            "C": { "id": ID_C },
            "D": { "id": ID_A },
        });

        let err = letters()("LETTERS", &raw).unwrap_err();

        assert_eq!(
            failing_fields(&err),
            vec![
                "LETTERS.A.id".to_string(),
                "LETTERS.B".to_string(),
                "LETTERS".to_string(),
            ]
        );
        assert!(matches!(
            err.leaves()[2],
            ConfigError::UnknownEnumMember { value, .. } if value == "D"
        ));
    }

    /// Tests that the builder works with any value validator.
    #[test]
    fn accepts_arbitrary_value_validator() {
        let validate = keyed::<Letter, _>(|field: &str, value: &Value| {
            value.as_u64().ok_or_else(|| ConfigError::Malformed {
                field: field.to_string(),
                reason: "expected a number".to_string(),
            })
        });

        let map = validate("COUNTS", &json!({ "A": 1, "B": 2, "C": 3 })).unwrap();
        let values: Vec<u64> = map.iter().map(|(_, value)| *value).collect();

        assert_eq!(values, vec![1, 2, 3]);
    }

    /// Tests resolving members from the roles a guild member holds.
    ///
    /// Expected: matches sorted by index, unknown and zero IDs never match
    #[test]
    fn resolves_members_from_role_ids() {
        let raw = json!({
            "A": { "index": 2, "id": ID_A },
            "B": { "index": 0, "id": ID_B },
            "C": { "index": 1, "id": "00000000000000000" },
        });
        let map = letters()("LETTERS", &raw).unwrap();

        let held = |ids: &[&str]| -> Vec<RoleId> {
            ids.iter().map(|id| RoleId::new(id.parse().unwrap())).collect()
        };

        assert_eq!(map.matching(&held(&[ID_A, ID_B])), vec![Letter::B, Letter::A]);
        assert_eq!(map.matching(&held(&[ID_C])), Vec::<Letter>::new());
        assert_eq!(map.matching(&[]), Vec::<Letter>::new());
    }
}
