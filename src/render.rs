use std::sync::atomic::{AtomicU64, Ordering};

use crate::sentiment::Sentiment;

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Immutable snapshot handed to the render thread.
///
/// The logic thread produces these after state updates; the render thread
/// never sees the live model. `version` lets the renderer skip frames when
/// nothing changed.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    /// The text buffer as typed so far.
    pub input_buffer: String,
    /// Last successful classification, if any. Failures never clear this.
    pub result: Option<Sentiment>,
    /// Whether at least one classification request is in flight.
    pub classifying: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            input_buffer: String::new(),
            result: None,
            classifying: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_counter_increments() {
        let v1 = next_version();
        let v2 = next_version();
        let v3 = next_version();
        assert!(v2 > v1, "Version should increment");
        assert!(v3 > v2, "Version should increment monotonically");
    }

    #[test]
    fn test_render_state_default() {
        let state = RenderState::default();
        assert_eq!(state.version, 0);
        assert!(state.input_buffer.is_empty());
        assert!(state.result.is_none());
        assert!(!state.classifying);
    }
}
