//! Notification channel keys and the guild channel names they resolve to.

use crate::model::vocabulary::vocabulary;

vocabulary! {
    /// Kind of notification the bot posts into a dedicated guild channel.
    pub enum NotificationChannel {
        Promotions => "Promotions",
        Leaves => "Leaves",
        Renewals => "Renewals",
        Warnings => "Warnings",
        Logs => "Logs",
    }
}

impl NotificationChannel {
    /// Name of the guild text channel notifications of this kind are posted to.
    pub fn channel_name(self) -> &'static str {
        match self {
            Self::Promotions => "promotions",
            Self::Leaves => "leaves",
            Self::Renewals => "renewals",
            Self::Warnings => "warnings",
            Self::Logs => "bot-logs",
        }
    }
}
