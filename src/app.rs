use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::classifier::SentimentPipelineBuilder;
use crate::config::Config;
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::{mlog_debug, mlog_warn, Result};

const MAX_BG_MESSAGES: usize = 50;

pub struct LogicThread;

impl LogicThread {
    pub fn run(
        config: Config,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        Runtime::new()?.block_on(Self::run_async(config, state_tx, shutdown))
    }

    async fn run_async(
        config: Config,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        mlog_debug!(
            "LogicThread::run_async cpu={} model_size={}",
            config.cpu,
            config.model_size
        );
        let mut model = Model::new(config);
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();

        send_state(&state_tx, &model);
        model.dirty = false;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Keyboard input (priority)
            while event::poll(Duration::ZERO)? {
                let msg = match event::read()? {
                    Event::Key(key) => Message::Key(key),
                    Event::Resize(w, h) => Message::Resize(w, h),
                    _ => continue,
                };

                for cmd in update(&mut model, msg) {
                    if execute_command(&model, cmd, &msg_tx) {
                        shutdown.store(true, Ordering::Relaxed);
                        return Ok(());
                    }
                }

                if model.dirty {
                    send_state(&state_tx, &model);
                    model.dirty = false;
                }
            }

            // Background messages (bounded)
            for _ in 0..MAX_BG_MESSAGES {
                let Ok(msg) = msg_rx.try_recv() else { break };
                for cmd in update(&mut model, msg) {
                    if execute_command(&model, cmd, &msg_tx) {
                        shutdown.store(true, Ordering::Relaxed);
                        return Ok(());
                    }
                }
            }

            if model.dirty {
                send_state(&state_tx, &model);
                model.dirty = false;
            }

            tokio::time::sleep(Duration::from_micros(500)).await;
        }

        Ok(())
    }
}

/// Execute a command. Returns true when the app should quit.
fn execute_command(model: &Model, cmd: Command, msg_tx: &mpsc::UnboundedSender<Message>) -> bool {
    match cmd {
        Command::Classify { text } => {
            mlog_debug!(
                "Command::Classify text={:?}",
                text.chars().take(30).collect::<String>()
            );
            let builder = SentimentPipelineBuilder::from_config(&model.config);
            let tx = msg_tx.clone();

            // Model construction and the forward pass are blocking CPU work.
            // The pipeline is rebuilt for every request; hf-hub keeps the
            // weight files cached on disk, so this is a mmap, not a
            // download, after the first call.
            tokio::task::spawn_blocking(move || {
                let outcome = builder.build().and_then(|pipeline| pipeline.predict(&text));
                match outcome {
                    Ok(prediction) => {
                        mlog_debug!(
                            "Prediction: label={:?} score={:.3}",
                            prediction.label,
                            prediction.score
                        );
                        let _ = tx.send(Message::ClassificationCompleted(prediction));
                    }
                    Err(e) => {
                        mlog_warn!("Classification task failed: {}", e);
                        let _ = tx.send(Message::ClassificationFailed(e.to_string()));
                    }
                }
            });
        }

        Command::Quit => {
            mlog_debug!("Command::Quit");
            return true;
        }
    }

    false
}

fn send_state(state_tx: &Sender<RenderState>, model: &Model) {
    let _ = state_tx.try_send(model.snapshot());
}
