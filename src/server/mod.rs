//! Bot runtime: configuration, Discord integration and business logic.
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Bot** (`bot/`) - Discord event handlers and slash commands
//! - **Service Layer** (`service/`) - Business logic orchestration between commands and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and command reply mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config/`) - Validated environment-based configuration
//! - **State** (`state`) - Shared bot state (DB, configuration)
//! - **Startup** (`startup`) - Initialization of logging and the database

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
