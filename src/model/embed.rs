//! Embed colour palette shared by every bot reply.

/// Colour applied to an embed according to the nature of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedColor {
    Info,
    Success,
    Warning,
    Danger,
}

impl EmbedColor {
    /// RGB value as expected by Discord's embed colour field.
    pub fn value(self) -> u32 {
        match self {
            Self::Info => 0x5865F2,
            Self::Success => 0x57F287,
            Self::Warning => 0xFEE75C,
            Self::Danger => 0xED4245,
        }
    }
}
