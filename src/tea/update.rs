//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model,
//! and returns a list of commands to execute.
//!
//! The classification state machine is deliberately small: {no result} →
//! classify succeeds → {result shown}, and further successes replace the
//! result wholesale. Failures of any kind (pipeline construction,
//! prediction, unrecognized label) leave the automaton where it is and emit
//! a diagnostic log line; no error state ever reaches the display.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::sentiment::Sentiment;
use crate::{mlog_debug, mlog_warn};

use super::command::Command;
use super::message::Message;
use super::model::Model;

/// Pure update function: Model + Message → Commands
///
/// This function:
/// 1. Takes the current model and an input message
/// 2. Mutates the model state (and sets dirty flag)
/// 3. Returns a list of commands (side effects) to execute
///
/// The function itself has no side effects - all I/O happens via returned
/// Commands.
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            model.dirty = true; // Keyboard input always triggers render
            handle_key(model, key, &mut cmds);
        }

        Message::Resize(_, _) => {
            model.dirty = true; // Resize triggers re-render
        }

        Message::ClassificationCompleted(prediction) => {
            model.classifying = model.classifying.saturating_sub(1);
            model.dirty = true;
            match Sentiment::from_label(&prediction.label) {
                Some(sentiment) => {
                    mlog_debug!(
                        "Classified as {} (score {:.3})",
                        sentiment,
                        prediction.score
                    );
                    model.result = Some(sentiment);
                }
                None => {
                    // Parse yields absence, not a fault. The previous
                    // result, if any, stays on screen.
                    mlog_warn!(
                        "Unrecognized label from classifier: {:?}",
                        prediction.label
                    );
                }
            }
        }

        Message::ClassificationFailed(err) => {
            model.classifying = model.classifying.saturating_sub(1);
            model.dirty = true;
            mlog_warn!("Classification failed: {}", err);
        }
    }

    cmds
}

fn handle_key(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Esc => {
            cmds.push(Command::Quit);
        }

        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            cmds.push(Command::Quit);
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            model.input_buffer.clear();
        }

        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            // The input region is multi-line
            model.input_buffer.push('\n');
        }

        KeyCode::Enter => {
            // Trigger classification. Empty input is legal and forwarded
            // as-is; the model decides what an empty sentence feels like.
            model.classifying += 1;
            cmds.push(Command::Classify {
                text: model.input_buffer.clone(),
            });
        }

        KeyCode::Backspace => {
            model.input_buffer.pop();
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            model.input_buffer.push(c);
        }

        _ => {}
    }
}
