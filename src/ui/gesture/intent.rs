//! Intents for the gesture classifier.

use crate::ui::mvi::Intent;
use tokio::time::Instant;

/// Input modality a press came from. All modalities drive the same session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Pointer,
    Touch,
    Keyboard,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GestureIntent {
    /// Button went down. Ignored while another press is armed.
    PressStart { source: InputSource, at: Instant },

    /// Button released.
    PressEnd,

    /// Press aborted (pointer left the hit area, input cancelled).
    PressCancel,

    /// Long-press threshold elapsed for the press with this generation.
    ThresholdElapsed { generation: u64 },
}

impl Intent for GestureIntent {}
