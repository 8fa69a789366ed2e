//! SeaORM entity models for the hierarchy bot's two record collections.

pub mod prelude;

pub mod member;
pub mod promotion;
