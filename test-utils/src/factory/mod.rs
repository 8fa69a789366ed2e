//! Factory methods for creating test data.
//!
//! Each record collection has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::member::MemberFactory::new(&db)
//!     .job("Sergeant")
//!     .build()
//!     .await?;
//! let promotion = factory::create_promotion(&db, &member.discord_id).await?;
//! ```

pub mod helpers;
pub mod member;
pub mod promotion;

pub use member::create_member;
pub use promotion::create_promotion;
