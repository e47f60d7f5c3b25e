//! The on-device sentiment classifier.
//!
//! This module is the app's only collaborator: construct a pipeline (which
//! may fail), call [`SentimentPipeline::predict`] with the raw input text
//! (which may fail), and get back a [`Prediction`] whose `label` string is
//! whatever vocabulary the model artifact declares. Everything inside the
//! artifact (tokenization included) is opaque to the rest of the app.
//!
//! Inference runs on ModernBERT sequence-classification checkpoints via
//! candle. Weights and tokenizer are fetched from the Hugging Face hub and
//! cached on disk, so rebuilding the pipeline per request is a mmap, not a
//! download.

pub mod modernbert;
pub mod pipeline;

pub use modernbert::{ModelSize, ModernBertSentiment};
pub use pipeline::{DeviceRequest, Prediction, SentimentPipeline, SentimentPipelineBuilder};
