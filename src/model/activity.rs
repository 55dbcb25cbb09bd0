//! Activity tiers reported by the `chatstatus` command.

/// Bucketed view of how long a channel has been quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTier {
    /// Last message under 5 minutes ago.
    VeryActive,
    /// Last message under 30 minutes ago.
    Active,
    /// Last message under an hour ago.
    GettingQuiet,
    /// An hour or more without a message.
    Inactive,
}

impl ActivityTier {
    /// Buckets elapsed minutes into a tier.
    ///
    /// Boundaries are exclusive on the upper end: exactly 5 minutes is
    /// `Active`, exactly 60 minutes is `Inactive`.
    pub fn from_minutes(minutes: f64) -> Self {
        if minutes < 5.0 {
            Self::VeryActive
        } else if minutes < 30.0 {
            Self::Active
        } else if minutes < 60.0 {
            Self::GettingQuiet
        } else {
            Self::Inactive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryActive => "🔥 Very Active",
            Self::Active => "💬 Active",
            Self::GettingQuiet => "😴 Getting Quiet",
            Self::Inactive => "💀 Inactive",
        }
    }

    /// Embed colour as hex integer.
    pub fn color(&self) -> u32 {
        match self {
            Self::VeryActive => 0x2ecc71,
            Self::Active => 0x3498db,
            Self::GettingQuiet => 0xe67e22,
            Self::Inactive => 0xe74c3c,
        }
    }
}
