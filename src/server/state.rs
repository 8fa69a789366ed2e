//! Bot state shared across all event handlers.
//!
//! This module defines the `BotState` struct which holds every shared dependency the
//! event handlers and commands need. The state is built once during startup and cloned
//! into the handler; components receive it explicitly instead of reaching for global
//! singletons.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::config::Config;

/// Shared resources handed to every event handler and command.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<Config>` shares the read-only configuration
#[derive(Clone)]
pub struct BotState {
    /// Database connection pool for the member and promotion collections.
    pub db: DatabaseConnection,

    /// Validated configuration, never mutated after startup.
    pub config: Arc<Config>,
}

impl BotState {
    /// Creates a new bot state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Configuration loaded at startup
    ///
    /// # Returns
    /// - `BotState` - Initialized state ready to hand to the Discord client
    pub fn new(db: DatabaseConnection, config: Arc<Config>) -> Self {
        Self { db, config }
    }
}
