//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - they represent side
//! effects to be executed by the runtime.

/// Output commands from the update function.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the text through the classifier. The pipeline is constructed
    /// anew for every request.
    Classify { text: String },

    // App lifecycle
    Quit,
}
