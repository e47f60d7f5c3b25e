//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model is pure application state - no channels, no handles, no runtime
//! infrastructure.

use crate::config::Config;
use crate::render::{next_version, RenderState};
use crate::sentiment::Sentiment;

/// Pure application state - the single source of truth.
pub struct Model {
    /// The text buffer. Mutated on every keystroke, read only when a
    /// classification is triggered.
    pub input_buffer: String,

    /// The current classification result. Replaced wholesale on each
    /// successful classification, never partially updated, and cleared only
    /// by app restart. Failed attempts leave it untouched, so a stale result
    /// stays on screen.
    pub result: Option<Sentiment>,

    /// Number of classification requests in flight. Overlapping requests are
    /// not guarded against; this only drives the "classifying" note.
    pub classifying: u32,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Config (immutable after init)
    pub config: Config,
}

impl Model {
    pub fn new(config: Config) -> Self {
        Self {
            input_buffer: String::new(),
            result: None,
            classifying: 0,
            dirty: true,
            config,
        }
    }

    /// Create an immutable snapshot for the render thread.
    ///
    /// Each snapshot gets a monotonically increasing version number,
    /// enabling the render thread to detect state changes and skip
    /// redundant renders.
    pub fn snapshot(&self) -> RenderState {
        RenderState {
            version: next_version(),
            input_buffer: self.input_buffer.clone(),
            result: self.result,
            classifying: self.classifying > 0,
        }
    }
}
