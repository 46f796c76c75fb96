use serde::{Deserialize, Serialize};

/// Window sizes offered by the range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowPreset {
    Year,
    Month,
    Week,
    FortyEightHours,
    ThirtySixHours,
}

impl WindowPreset {
    pub const ALL: [Self; 5] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::FortyEightHours,
        Self::ThirtySixHours,
    ];

    /// Months count as 30 days and a year as 12 such months.
    #[must_use]
    pub const fn hours(self) -> usize {
        match self {
            Self::Year => 24 * 30 * 12,
            Self::Month => 24 * 30,
            Self::Week => 24 * 7,
            Self::FortyEightHours => 48,
            Self::ThirtySixHours => 36,
        }
    }

    /// Preset whose size equals `hours`, used to highlight the active selector.
    #[must_use]
    pub fn from_hours(hours: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.hours() == hours)
    }
}
