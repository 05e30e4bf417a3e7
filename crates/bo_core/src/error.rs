use thiserror::Error;

#[derive(Error, Debug)]
pub enum BattingError {
    /// `index` is 0-based; the message shows the 1-based slot
    #[error("No batsman slot {} in a roster of {roster_size}", .index + 1)]
    SlotOutOfRange { index: usize, roster_size: usize },

    #[error("Roster is empty")]
    EmptyRoster,

    #[error("Batsman {slot} has no name")]
    BlankName { slot: usize },

    #[error("Roster too large: {requested} players (max 11)")]
    RosterTooLarge { requested: usize },

    #[error("Invalid generator snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BattingError {
    /// Stable error code used by the JSON API
    pub fn code(&self) -> &'static str {
        match self {
            BattingError::SlotOutOfRange { .. } => "SLOT_OUT_OF_RANGE",
            BattingError::EmptyRoster => "EMPTY_ROSTER",
            BattingError::BlankName { .. } => "BLANK_NAME",
            BattingError::RosterTooLarge { .. } => "ROSTER_TOO_LARGE",
            BattingError::InvalidSnapshot(_) => "INVALID_SNAPSHOT",
            BattingError::Json(_) => "PARSE_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, BattingError>;
