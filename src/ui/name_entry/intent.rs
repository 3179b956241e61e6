use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum NameEntryIntent {
    Insert(char),
    Backspace,
    /// Submit was pressed with a blank name.
    Reject,
    ShakeExpired { generation: u64 },
}

impl Intent for NameEntryIntent {}
