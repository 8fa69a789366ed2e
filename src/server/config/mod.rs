//! Environment-based application configuration.
//!
//! The environment is validated exactly once at startup into an immutable [`Config`].
//! Every variable is checked before returning, and all failures are gathered into a
//! single `ConfigError::Fatal` so an operator sees every problem at once. The caller
//! is expected to terminate the process on failure; a partially configured bot never
//! starts.
//!
//! | Variable | Shape |
//! |---|---|
//! | `ENVIRONMENT` | token |
//! | `DISCORD_TOKEN` | token |
//! | `DATABASE_URL` | token |
//! | `LOG_LEVEL` | severity name or numeric ordinal |
//! | `DEFAULT_ROLES` | JSON array of snowflakes |
//! | `SECTORS_ROLES` | JSON object, one ordered role per sector |
//! | `SYSTEMS_ROLES` | JSON object, one ordered role per system |
//! | `COMMITTEES_ROLES` | JSON object, one ordered role per committee |

pub mod role;
pub mod role_map;
pub mod severity;
pub mod validator;

#[cfg(test)]
pub(crate) mod test;

use std::collections::HashMap;
use std::fmt;

use crate::{
    model::organization::{Committee, Sector, System},
    server::{
        config::{
            role::{ordered_role, OrderedRole},
            role_map::{keyed, RoleMap},
            severity::LogSeverity,
            validator::{json, list, snowflake, string_value, token},
        },
        error::{config::ConfigError, AppError},
    },
};

pub const ENVIRONMENT: &str = "ENVIRONMENT";
pub const DISCORD_TOKEN: &str = "DISCORD_TOKEN";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const DEFAULT_ROLES: &str = "DEFAULT_ROLES";
pub const SECTORS_ROLES: &str = "SECTORS_ROLES";
pub const SYSTEMS_ROLES: &str = "SYSTEMS_ROLES";
pub const COMMITTEES_ROLES: &str = "COMMITTEES_ROLES";

/// Validated process configuration.
///
/// Built once by [`Config::from_env`] and shared read-only (behind an `Arc`) with every
/// component that needs it.
#[derive(Clone)]
pub struct Config {
    /// Deployment tag, e.g. `production` or `development`.
    pub environment: String,
    /// Bot token used to authenticate with the Discord gateway. Never logged.
    pub discord_token: String,
    /// SeaORM connection string.
    pub database_url: String,
    /// Minimum severity of emitted log events.
    pub log_level: LogSeverity,
    /// Role IDs granted to every member joining the guild.
    pub default_roles: Vec<String>,
    /// Role of every sector, one entry per member of [`Sector`].
    pub sectors_roles: RoleMap<Sector, OrderedRole>,
    /// Role of every administrative system, one entry per member of [`System`].
    pub systems_roles: RoleMap<System, OrderedRole>,
    /// Role of every committee, one entry per member of [`Committee`].
    pub committees_roles: RoleMap<Committee, OrderedRole>,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// Reads a snapshot of every environment variable (after `.env` has been loaded by
    /// the caller) and validates it with [`Config::from_vars`].
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable is present and valid
    /// - `Err(AppError::ConfigErr(ConfigError::Fatal))` - Report of every invalid variable
    pub fn from_env() -> Result<Self, AppError> {
        let vars: HashMap<String, String> = std::env::vars().collect();

        Ok(Self::from_vars(&vars)?)
    }

    /// Validates a snapshot of environment variables.
    ///
    /// # Arguments
    /// - `vars` - Environment variable names mapped to their raw values
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable is present and valid
    /// - `Err(ConfigError::Fatal)` - Every failure found, in variable order
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();

        let environment = check(&mut errors, require(vars, ENVIRONMENT, token));
        let discord_token = check(&mut errors, require(vars, DISCORD_TOKEN, token));
        let database_url = check(&mut errors, require(vars, DATABASE_URL, token));
        let log_level = check(
            &mut errors,
            require(vars, LOG_LEVEL, LogSeverity::parse_level),
        );
        let default_roles = check(
            &mut errors,
            require_json(
                vars,
                DEFAULT_ROLES,
                list(|field: &str, value: &serde_json::Value| {
                    string_value(field, value, snowflake)
                }),
            ),
        );
        let sectors_roles = check(
            &mut errors,
            require_json(vars, SECTORS_ROLES, keyed::<Sector, _>(ordered_role)),
        );
        let systems_roles = check(
            &mut errors,
            require_json(vars, SYSTEMS_ROLES, keyed::<System, _>(ordered_role)),
        );
        let committees_roles = check(
            &mut errors,
            require_json(vars, COMMITTEES_ROLES, keyed::<Committee, _>(ordered_role)),
        );

        match (
            environment,
            discord_token,
            database_url,
            log_level,
            default_roles,
            sectors_roles,
            systems_roles,
            committees_roles,
        ) {
            (
                Some(environment),
                Some(discord_token),
                Some(database_url),
                Some(log_level),
                Some(default_roles),
                Some(sectors_roles),
                Some(systems_roles),
                Some(committees_roles),
            ) if errors.is_empty() => Ok(Self {
                environment,
                discord_token,
                database_url,
                log_level,
                default_roles,
                sectors_roles,
                systems_roles,
                committees_roles,
            }),
            _ => Err(ConfigError::Fatal(errors)),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("discord_token", &"<redacted>")
            .field("database_url", &"<redacted>")
            .field("log_level", &self.log_level)
            .field("default_roles", &self.default_roles)
            .field("sectors_roles", &self.sectors_roles)
            .field("systems_roles", &self.systems_roles)
            .field("committees_roles", &self.committees_roles)
            .finish()
    }
}

/// Records a failed validation, keeping the successful value for assembly.
fn check<T>(errors: &mut Vec<ConfigError>, result: Result<T, ConfigError>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}

/// Looks up a required variable and validates its raw value.
fn require<T>(
    vars: &HashMap<String, String>,
    name: &str,
    validate: impl Fn(&str, &str) -> Result<T, ConfigError>,
) -> Result<T, ConfigError> {
    let raw = vars
        .get(name)
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?;

    validate(name, raw)
}

/// Looks up a required variable holding serialized JSON and validates the decoded value.
fn require_json<T>(
    vars: &HashMap<String, String>,
    name: &str,
    validate: impl Fn(&str, &serde_json::Value) -> Result<T, ConfigError>,
) -> Result<T, ConfigError> {
    require(vars, name, |field, raw| validate(field, &json(field, raw)?))
}
