//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot's commands and the data (repository) layer. They are
//! responsible for:
//!
//! - **Business Logic**: Implementing rules such as the promotion delay table
//! - **Orchestration**: Coordinating calls across both record collections
//! - **Domain Models**: Working with domain models rather than entity models

pub mod maintenance;
pub mod promotion;
