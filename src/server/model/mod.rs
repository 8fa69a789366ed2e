//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary, keeping SeaORM types out of the bot and service
//! layers.

pub mod member;
pub mod promotion;
