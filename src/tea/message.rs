//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function - they come from external
//! sources like keyboard events or classification task completions.

use crossterm::event::KeyEvent;

use crate::classifier::Prediction;

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    // Keyboard/terminal events
    Key(KeyEvent),
    Resize(u16, u16),

    // Classification task callbacks
    /// The classifier returned a prediction. The label has not been parsed
    /// yet; that happens in `update` so the unrecognized-label path goes
    /// through the same state transition as everything else.
    ClassificationCompleted(Prediction),
    /// Pipeline construction or the prediction call failed.
    ClassificationFailed(String),
}
