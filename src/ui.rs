//! Terminal UI rendering for the mood TUI.
//!
//! Design philosophy:
//! - Minimal chrome: no box drawing, no ASCII borders, no decorative labels
//! - Whitespace as structure: position and spacing create hierarchy
//! - One full-width color surface: the result banner, tinted by sentiment
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates application state. This enables the decoupled game loop.
//!
//! The sentiment → (glyph, color) projection lives here as a pure lookup
//! table, kept out of the `Sentiment` data definition so it can be tested
//! on its own.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::render::RenderState;
use crate::sentiment::Sentiment;

// Color tokens
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;

// Banner colors, one per sentiment category. The terminal palette has no
// orange, so MIXED gets an RGB value.
const COLOR_POSITIVE: Color = Color::Green;
const COLOR_NEGATIVE: Color = Color::Red;
const COLOR_MIXED: Color = Color::Rgb(255, 165, 0);
const COLOR_NEUTRAL: Color = Color::Gray;

// Layout constants
const BANNER_HEIGHT: u16 = 3;

/// Pure lookup from a sentiment category to its display glyph and banner
/// color.
pub fn badge(sentiment: Sentiment) -> (&'static str, Color) {
    match sentiment {
        Sentiment::Positive => ("😃", COLOR_POSITIVE),
        Sentiment::Negative => ("😡", COLOR_NEGATIVE),
        Sentiment::Mixed => ("🤔", COLOR_MIXED),
        Sentiment::Neutral => ("😑", COLOR_NEUTRAL),
    }
}

/// The banner text for a sentiment: label followed by glyph.
pub fn banner_text(sentiment: Sentiment) -> String {
    let (glyph, _) = badge(sentiment);
    format!("{} {}", sentiment.as_str(), glyph)
}

/// Main render function - entry point for all UI drawing.
/// Takes an immutable RenderState snapshot.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();

    // Degenerate terminals: show the input line only
    if area.height < 6 {
        render_input(frame, state, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1),             // header
        Constraint::Length(1),             // spacing
        Constraint::Length(1),             // prompt
        Constraint::Length(1),             // spacing
        Constraint::Fill(1),               // input region
        Constraint::Length(BANNER_HEIGHT), // result banner
        Constraint::Length(1),             // in-flight note
        Constraint::Length(1),             // key hints
    ])
    .split(area);

    render_header(frame, chunks[0]);
    render_prompt(frame, chunks[2]);
    render_input(frame, state, chunks[4]);
    if let Some(sentiment) = state.result {
        render_banner(frame, sentiment, chunks[5]);
    }
    render_activity(frame, state, chunks[6]);
    render_statusbar(frame, chunks[7]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("mood", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            "  on-device sentiment",
            Style::default().fg(COLOR_TEXT_MUTED),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_prompt(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        "Type a sentence and the model will guess your sentiment.",
        Style::default().fg(COLOR_TEXT_DIMMED),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the input region - the buffer as typed, with a cursor mark.
fn render_input(frame: &mut Frame, state: &RenderState, area: Rect) {
    let text = format!("{}▌", state.input_buffer);
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the result banner: "LABEL GLYPH" bold, centered, on the
/// sentiment's background color. Only drawn when a result exists; failures
/// never reach this surface.
fn render_banner(frame: &mut Frame, sentiment: Sentiment, area: Rect) {
    let (_, color) = badge(sentiment);
    let style = Style::default()
        .fg(Color::White)
        .bg(color)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::default(); area.height as usize];
    let middle = (area.height / 2) as usize;
    if middle < lines.len() {
        lines[middle] = Line::from(banner_text(sentiment));
    }

    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the in-flight note. Not an error surface: a failed attempt simply
/// makes the note disappear again.
fn render_activity(frame: &mut Frame, state: &RenderState, area: Rect) {
    if !state.classifying {
        return;
    }
    let line = Line::from(Span::styled(
        "classifying…",
        Style::default().fg(COLOR_TEXT_MUTED),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the key hints on the bottom line.
fn render_statusbar(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let desc_style = Style::default().fg(COLOR_TEXT_MUTED);

    let hints = [
        ("Enter", "classify"),
        ("Alt+Enter", "newline"),
        ("Ctrl+U", "clear"),
        ("Esc", "quit"),
    ];

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   ", desc_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {desc}"), desc_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
