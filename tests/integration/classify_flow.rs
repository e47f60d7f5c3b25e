//! End-to-end classification flow tests.
//!
//! Each test drives the TEA update loop the way the logic thread does:
//! keyboard messages in, commands out, classifier completions back in, and
//! the resulting snapshot rendered against a TestBackend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;

use mood::classifier::Prediction;
use mood::config::Config;
use mood::tea::{update, Command, Message, Model};
use mood::{ui, Sentiment};

fn test_model() -> Model {
    Model::new(Config::default())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

/// Type a string into the model, one key at a time.
fn type_text(model: &mut Model, text: &str) {
    for c in text.chars() {
        update(model, Message::Key(key(KeyCode::Char(c))));
    }
}

/// Press Enter and return the classify command's text payload.
fn trigger_classify(model: &mut Model) -> String {
    let cmds = update(model, Message::Key(key(KeyCode::Enter)));
    match cmds.as_slice() {
        [Command::Classify { text }] => text.clone(),
        other => panic!("Expected a single Classify command, got {:?}", other),
    }
}

/// Deliver a completed prediction, as the classification task would.
fn deliver(model: &mut Model, label: &str) {
    update(
        model,
        Message::ClassificationCompleted(Prediction {
            label: label.to_string(),
            score: 0.97,
        }),
    );
}

fn render(model: &Model) -> Terminal<TestBackend> {
    let snapshot = model.snapshot();
    let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
    terminal.draw(|f| ui::draw(f, &snapshot)).unwrap();
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn screen_has_bg(terminal: &Terminal<TestBackend>, color: Color) -> bool {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .any(|cell| cell.style().bg == Some(color))
}

/// Given "I love this!" typed into the buffer
/// When classification completes with label "POSITIVE"
/// Then the screen shows "POSITIVE 😃" on a green banner
#[test]
fn test_positive_sentence_shows_green_banner() {
    let mut model = test_model();
    type_text(&mut model, "I love this!");

    let text = trigger_classify(&mut model);
    assert_eq!(text, "I love this!");

    deliver(&mut model, "POSITIVE");
    assert_eq!(model.result, Some(Sentiment::Positive));

    let terminal = render(&model);
    let screen = screen_text(&terminal);
    assert!(screen.contains("POSITIVE"));
    assert!(screen.contains("😃"));
    assert!(screen_has_bg(&terminal, Color::Green));
}

/// Given an empty buffer
/// When classification completes with label "NEUTRAL"
/// Then the screen shows "NEUTRAL 😑" on a gray banner
#[test]
fn test_empty_input_is_classified() {
    let mut model = test_model();

    let text = trigger_classify(&mut model);
    assert_eq!(text, "", "Empty input is forwarded as-is");

    deliver(&mut model, "NEUTRAL");
    assert_eq!(model.result, Some(Sentiment::Neutral));

    let terminal = render(&model);
    let screen = screen_text(&terminal);
    assert!(screen.contains("NEUTRAL"));
    assert!(screen.contains("😑"));
    assert!(screen_has_bg(&terminal, Color::Gray));
}

/// Given a displayed result
/// When the classifier task fails
/// Then the screen keeps showing the previous result, with no error surface
#[test]
fn test_failure_keeps_previous_result_on_screen() {
    let mut model = test_model();
    type_text(&mut model, "great stuff");
    trigger_classify(&mut model);
    deliver(&mut model, "POSITIVE");

    // A second attempt that fails outright
    trigger_classify(&mut model);
    update(
        &mut model,
        Message::ClassificationFailed("weights missing".to_string()),
    );

    assert_eq!(model.result, Some(Sentiment::Positive));
    let terminal = render(&model);
    let screen = screen_text(&terminal);
    assert!(screen.contains("POSITIVE"), "Stale result persists");
    assert!(
        !screen.contains("weights missing"),
        "Failures never reach the display"
    );
}

/// Given a displayed result
/// When the classifier returns an unrecognized label
/// Then the result is unchanged and nothing crashes
#[test]
fn test_unrecognized_label_is_silently_dropped() {
    let mut model = test_model();
    type_text(&mut model, "hmm");
    trigger_classify(&mut model);
    deliver(&mut model, "NEGATIVE");

    trigger_classify(&mut model);
    deliver(&mut model, "MAYBE");

    assert_eq!(model.result, Some(Sentiment::Negative));
    let screen = screen_text(&render(&model));
    assert!(screen.contains("NEGATIVE"));
    assert!(!screen.contains("MAYBE"));
}

/// Given no result yet
/// When the first attempt fails
/// Then there is still no result and no banner
#[test]
fn test_first_attempt_failure_shows_nothing() {
    let mut model = test_model();
    trigger_classify(&mut model);
    update(
        &mut model,
        Message::ClassificationFailed("device init".to_string()),
    );

    assert!(model.result.is_none());
    let terminal = render(&model);
    assert!(!screen_has_bg(&terminal, Color::Green));
    assert!(!screen_has_bg(&terminal, Color::Red));
}

/// Given two rapid classifications in flight
/// When their completions arrive out of invocation order
/// Then the last arrival wins
#[test]
fn test_overlapping_completions_last_arrival_wins() {
    let mut model = test_model();
    type_text(&mut model, "so so");
    trigger_classify(&mut model);
    trigger_classify(&mut model);
    assert_eq!(model.classifying, 2);

    deliver(&mut model, "MIXED");
    deliver(&mut model, "NEUTRAL");

    assert_eq!(model.result, Some(Sentiment::Neutral));
    assert_eq!(model.classifying, 0);
}

/// Given the same text classified twice by a deterministic model
/// Then both passes produce the same result
#[test]
fn test_deterministic_model_is_idempotent() {
    let mut model = test_model();
    type_text(&mut model, "It's fine.");

    trigger_classify(&mut model);
    deliver(&mut model, "NEUTRAL");
    let first = model.result;

    trigger_classify(&mut model);
    deliver(&mut model, "NEUTRAL");

    assert_eq!(model.result, first);
}

/// The in-flight note appears while classifying and disappears after a
/// failed attempt, without disturbing the rest of the screen.
#[test]
fn test_in_flight_note_lifecycle() {
    let mut model = test_model();
    trigger_classify(&mut model);

    let busy = screen_text(&render(&model));
    assert!(busy.contains("classifying"));

    update(
        &mut model,
        Message::ClassificationFailed("oops".to_string()),
    );
    let idle = screen_text(&render(&model));
    assert!(!idle.contains("classifying"));
}

/// Editing keys shape the buffer that eventually gets classified.
#[test]
fn test_edited_buffer_is_what_gets_classified() {
    let mut model = test_model();
    type_text(&mut model, "bad!");
    update(&mut model, Message::Key(key(KeyCode::Backspace)));
    update(
        &mut model,
        Message::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)),
    );
    type_text(&mut model, "really bad");

    let text = trigger_classify(&mut model);
    assert_eq!(text, "bad\nreally bad");
}
