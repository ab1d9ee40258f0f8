use super::opt_var;
use crate::error::AppError;

/// Restricts game commands to a single chat channel when set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelConfig {
    pub allowed_channel: Option<i64>,
}

impl ChannelConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            allowed_channel: opt_var("BINGO_ALLOWED_CHANNEL")?,
        })
    }

    pub fn restricted_to(channel_id: i64) -> Self {
        Self {
            allowed_channel: Some(channel_id),
        }
    }

    /// Unrestricted configs accept every channel, including an absent one.
    pub fn permits(&self, channel_id: Option<i64>) -> bool {
        match self.allowed_channel {
            None => true,
            Some(allowed) => channel_id == Some(allowed),
        }
    }
}
