//! Name entry screen shown until a display name is known.

mod intent;
mod reducer;
mod state;

pub use intent::NameEntryIntent;
pub use reducer::NameEntryReducer;
pub use state::NameEntryState;
