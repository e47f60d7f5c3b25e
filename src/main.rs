use std::io::{self, stdout, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use mood::app::LogicThread;
use mood::classifier::SentimentPipelineBuilder;
use mood::config::Config;
use mood::render::RenderState;
use mood::sentiment::Sentiment;
use mood::{mlog, ui, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// Mood - on-device sentiment classification for your terminal
#[derive(Parser, Debug)]
#[command(name = "mood")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    MOOD_DEBUG=1    Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.mood/mood.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Force CPU inference even when a CUDA device is available
    #[arg(long)]
    pub cpu: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Headless commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Classify a sentence without launching the TUI
    Classify {
        /// The text to classify
        text: String,

        /// Output the prediction as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    mood::log::init_with_debug(cli.debug);

    let mut config = Config::load()?;
    if cli.cpu {
        config.cpu = true;
    }

    // Handle subcommands
    match cli.command {
        Some(Command::Classify { text, json }) => {
            return run_classify(config, &text, json);
        }
        None => {
            // No subcommand: launch TUI
        }
    }

    if cli.debug {
        mlog!("Mood starting (debug mode enabled)");
    } else {
        mlog!("Mood starting");
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let shutdown_clone = shutdown.clone();
    let logic_handle = thread::spawn(move || LogicThread::run(config, state_tx, shutdown_clone));

    let mut terminal = setup_terminal()?;
    let result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let _ = logic_handle.join();
    restore_terminal(&mut terminal)?;
    result
}

/// Classify one sentence headlessly and print the result.
///
/// The behavioral contract is the same as the TUI's: an unrecognized label
/// is absence, not an error, and construction/prediction failures surface
/// only as the process error.
fn run_classify(config: Config, text: &str, json: bool) -> Result<()> {
    mlog!("Classify command: json={}", json);

    let pipeline = SentimentPipelineBuilder::from_config(&config).build()?;
    let prediction = pipeline.predict(text)?;
    let sentiment = Sentiment::from_label(&prediction.label);

    if json {
        let json_output = serde_json::json!({
            "label": prediction.label,
            "sentiment": sentiment.map(|s| s.as_str()),
            "score": prediction.score,
        });
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    match sentiment {
        Some(sentiment) => {
            println!(
                "{}  (score {:.2})",
                ui::banner_text(sentiment),
                prediction.score
            );
        }
        None => {
            println!(
                "unrecognized label {:?}  (score {:.2})",
                prediction.label, prediction.score
            );
        }
    }
    Ok(())
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    // One-time mutation of shared terminal state: the window title belongs
    // to the terminal emulator, not to this screen, and has no teardown.
    execute!(io::stdout(), SetTitle("mood"))?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}
