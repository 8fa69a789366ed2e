//! Discord bot integration for member onboarding and hierarchy commands.
//!
//! The bot listens to the gateway for three kinds of events: the ready event (which
//! registers the slash commands), new guild members (which receive the default roles and
//! an entry-rank record) and slash command interactions. Every handler receives the
//! shared `BotState` explicitly.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and channel information used to resolve notification channels
//! - `GUILD_MEMBERS` - Receive events about members joining the guild (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
