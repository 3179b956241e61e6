use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameEntryState {
    pub input: String,
    /// True while the rejection shake is showing.
    pub shaking: bool,
    pub generation: u64,
}

impl UiState for NameEntryState {}

impl NameEntryState {
    /// The submittable name, if the input is not blank.
    pub fn submission(&self) -> Option<&str> {
        let name = self.input.trim();
        (!name.is_empty()).then_some(name)
    }
}
