//! Organization-wide domain vocabularies and constants.
//!
//! Everything in this module is fixed at compile time: the closed sets of sectors,
//! systems, committees, jobs and notification channels, the promotion delay table,
//! and the embed colour palette.

pub mod embed;
pub mod notification;
pub mod organization;
pub mod vocabulary;
