pub mod app;
pub mod counter;
pub mod events;
pub mod feedback;
pub mod footer;
pub mod gesture;
pub mod header;
pub mod input;
pub mod layout;
pub mod leaderboard;
pub mod mvi;
pub mod name_entry;
pub mod observer;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod timer;
