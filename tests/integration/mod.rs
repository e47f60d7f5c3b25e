//! Integration test suite for mood.
//!
//! These tests exercise the classification flow end-to-end: keyboard input
//! through the update function, classifier completions, and the rendered
//! screen. The classifier itself is simulated by injecting the completion
//! messages its task would send, so no model weights are fetched and the
//! suite is safe to run in CI environments.

mod classify_flow;
