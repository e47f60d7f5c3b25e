use candle_core::Device;
use tokenizers::Tokenizer;

use crate::classifier::modernbert::{load_tokenizer, ModelSize, ModernBertSentiment};
use crate::config::Config;
use crate::{Error, Result};

/// What the classifier hands back: the artifact's label for the winning
/// class plus its softmax probability. Only `label` participates in the
/// app's behavioral contract; `score` feeds diagnostics and headless output.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub label: String,
    pub score: f32,
}

/// Where inference should run.
#[derive(Debug, Clone, Copy, Default)]
pub enum DeviceRequest {
    /// Use CUDA 0 if available, otherwise CPU.
    #[default]
    Auto,
    /// Force CPU even if CUDA is available.
    Cpu,
    /// Select a specific CUDA device by index.
    Cuda(usize),
}

impl DeviceRequest {
    /// Resolve the request into an actual [`Device`].
    pub fn resolve(self) -> Result<Device> {
        match self {
            DeviceRequest::Auto => Ok(Device::new_cuda(0).unwrap_or(Device::Cpu)),
            DeviceRequest::Cpu => Ok(Device::Cpu),
            DeviceRequest::Cuda(i) => {
                Device::new_cuda(i).map_err(|e| Error::Device(e.to_string()))
            }
        }
    }
}

/// A ready-to-use sentiment classifier: model plus its artifact tokenizer.
pub struct SentimentPipeline {
    model: ModernBertSentiment,
    tokenizer: Tokenizer,
}

impl SentimentPipeline {
    /// Classify `text`. Empty input is legal and forwarded to the model
    /// unchanged.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        self.model.predict_with_score(&self.tokenizer, text)
    }

    pub fn device(&self) -> &Device {
        self.model.device()
    }
}

/// Builder for [`SentimentPipeline`] instances.
///
/// ```no_run
/// # fn main() -> mood::Result<()> {
/// use mood::classifier::{ModelSize, SentimentPipelineBuilder};
///
/// let pipeline = SentimentPipelineBuilder::modernbert(ModelSize::Base)
///     .cpu()
///     .build()?;
/// let prediction = pipeline.predict("I love this!")?;
/// println!("{} ({:.2})", prediction.label, prediction.score);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SentimentPipelineBuilder {
    size: ModelSize,
    model_id: Option<String>,
    device: DeviceRequest,
}

impl SentimentPipelineBuilder {
    /// Creates a builder for a ModernBERT sentiment classifier.
    pub fn modernbert(size: ModelSize) -> Self {
        Self {
            size,
            model_id: None,
            device: DeviceRequest::default(),
        }
    }

    /// Assemble a builder from the app config (size, repo override, device).
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::modernbert(config.model_size);
        if let Some(id) = &config.model_id {
            builder = builder.model_id(id.clone());
        }
        if config.cpu {
            builder = builder.cpu();
        }
        builder
    }

    /// Fetch the artifact from this repo instead of the size's default.
    pub fn model_id(mut self, id: impl Into<String>) -> Self {
        self.model_id = Some(id.into());
        self
    }

    /// Force the pipeline to run on CPU.
    pub fn cpu(mut self) -> Self {
        self.device = DeviceRequest::Cpu;
        self
    }

    /// Select a specific CUDA device by index.
    pub fn cuda(mut self, index: usize) -> Self {
        self.device = DeviceRequest::Cuda(index);
        self
    }

    /// The repo the artifact will be fetched from.
    pub fn repo_id(&self) -> &str {
        self.model_id.as_deref().unwrap_or(self.size.repo_id())
    }

    /// Builds the pipeline with configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be initialized, the artifact
    /// cannot be fetched, or the weights fail to load.
    pub fn build(self) -> Result<SentimentPipeline> {
        let device = self.device.resolve()?;
        let repo_id = self.repo_id().to_string();
        let model = ModernBertSentiment::load(&repo_id, device)?;
        let tokenizer = load_tokenizer(&repo_id)?;
        Ok(SentimentPipeline { model, tokenizer })
    }
}
