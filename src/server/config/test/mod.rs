use crate::{
    model::{
        organization::{Committee, Sector, System},
        vocabulary::Vocabulary,
    },
    server::{
        config::{Config, COMMITTEES_ROLES, DISCORD_TOKEN, SECTORS_ROLES},
        error::config::ConfigError,
    },
};
use serde_json::{json, Map, Value};
use std::collections::HashMap;


const TOKEN: &str = "MTA5ODc2NTQzMjEwOTg3NjU0.GhIjKl.super-secret-token";

/// Builds the snowflake used for the `position`-th entry of a role map.
pub(crate) fn role_id(group: u64, position: usize) -> String {
    (100_000_000_000_000_000 + group * 1_000 + position as u64).to_string()
}

/// Serializes a role map giving every member of `K` a distinct role and index.
fn role_map_json<K: Vocabulary>(group: u64) -> String {
    let entries: Map<String, Value> = K::ALL
        .iter()
        .enumerate()
        .map(|(position, member)| {
            (
                member.as_str().to_string(),
                json!({ "index": position, "id": role_id(group, position) }),
            )
        })
        .collect();

    Value::Object(entries).to_string()
}

/// Environment snapshot in which every variable is present and valid.
pub(crate) fn valid_vars() -> HashMap<String, String> {
    HashMap::from([
        ("ENVIRONMENT".to_string(), "production".to_string()),
        ("DISCORD_TOKEN".to_string(), TOKEN.to_string()),
        (
            "DATABASE_URL".to_string(),
            "sqlite://hierarchy.db?mode=rwc".to_string(),
        ),
        ("LOG_LEVEL".to_string(), "Info".to_string()),
        (
            "DEFAULT_ROLES".to_string(),
            json!([role_id(9, 0), role_id(9, 1)]).to_string(),
        ),
        ("SECTORS_ROLES".to_string(), role_map_json::<Sector>(1)),
        ("SYSTEMS_ROLES".to_string(), role_map_json::<System>(2)),
        ("COMMITTEES_ROLES".to_string(), role_map_json::<Committee>(3)),
    ])
}

/// Field paths of every leaf failure in a configuration error.
fn failing_fields(err: &ConfigError) -> Vec<String> {
    err.leaves()
        .iter()
        .filter_map(|e| e.field().map(str::to_string))
        .collect()
}
