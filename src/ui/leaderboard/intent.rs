use crate::service::LeaderboardEntry;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum LeaderboardIntent {
    /// Screen opened (or refreshed); a query is being issued.
    Open,
    Loaded { entries: Vec<LeaderboardEntry> },
    Failed,
    Close,
}

impl Intent for LeaderboardIntent {}
