//! Read-only leaderboard screen.

mod intent;
mod reducer;
mod state;

pub use intent::LeaderboardIntent;
pub use reducer::LeaderboardReducer;
pub use state::{rank_label, LeaderboardState, LOAD_FAILED_MESSAGE};
