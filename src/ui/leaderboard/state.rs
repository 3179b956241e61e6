use crate::service::LeaderboardEntry;
use crate::ui::mvi::UiState;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load leaderboard";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LeaderboardState {
    #[default]
    Hidden,
    Loading,
    Loaded {
        entries: Vec<LeaderboardEntry>,
    },
    Failed {
        message: String,
    },
}

impl UiState for LeaderboardState {}

impl LeaderboardState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Rank column text: medals for the podium, 1-based numbers after.
pub fn rank_label(position: usize) -> String {
    match position {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => (n + 1).to_string(),
    }
}
