//! Database repository layer for the bot's record collections.
//!
//! This module contains repository structs that handle database operations for each
//! collection. Repositories use SeaORM entity models internally and return domain
//! models to keep the data layer separate from business logic. All database queries,
//! inserts, updates, and deletes are performed through these repositories.

pub mod member;
pub mod promotion;

#[cfg(test)]
mod test;
