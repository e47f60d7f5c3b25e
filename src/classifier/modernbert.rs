//! ModernBERT sequence-classification wrapper.
//!
//! Uses `candle_transformers::models::modernbert` for the underlying
//! implementation. The predicted class index is mapped through the
//! artifact's `id2label` table and returned verbatim; the label vocabulary
//! belongs to the artifact, not to this crate.

use std::collections::HashMap;

use candle_core::{DType, Device, Tensor, D};
use candle_nn::ops::softmax;
use candle_nn::VarBuilder;
use candle_transformers::models::modernbert::{
    Config as ModernBertConfig, ModernBertForSequenceClassification,
};
use hf_hub::{api::sync::Api, Repo, RepoType};
use serde::{Deserialize, Serialize};
use tokenizers::Tokenizer;

use crate::classifier::pipeline::Prediction;
use crate::{Error, Result};

/// Available classifier sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelSize {
    #[default]
    Base,
    Large,
}

impl ModelSize {
    /// Default artifact for this size.
    pub fn repo_id(&self) -> &'static str {
        match self {
            ModelSize::Base => "clapAI/modernBERT-base-multilingual-sentiment",
            ModelSize::Large => "clapAI/modernBERT-large-multilingual-sentiment",
        }
    }
}

impl std::fmt::Display for ModelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModelSize::Base => "base",
            ModelSize::Large => "large",
        };
        write!(f, "{name}")
    }
}

/// A loaded ModernBERT sentiment classifier head.
pub struct ModernBertSentiment {
    model: ModernBertForSequenceClassification,
    device: Device,
    id2label: HashMap<String, String>,
}

impl ModernBertSentiment {
    /// Load weights and the classification head from a Hugging Face repo.
    pub fn load(repo_id: &str, device: Device) -> Result<Self> {
        let (config, vb, id2label) = load_classifier_weights(repo_id, &device)?;
        let model = ModernBertForSequenceClassification::load(vb, &config)
            .map_err(|e| Error::ModelLoad(e.to_string()))?;

        Ok(Self {
            model,
            device,
            id2label,
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Classify `text`, returning the artifact's label for the argmax class
    /// and its softmax probability.
    pub fn predict_with_score(&self, tokenizer: &Tokenizer, text: &str) -> Result<Prediction> {
        let tokens = tokenizer
            .encode(text, true)
            .map_err(|e| Error::Tokenization(e.to_string()))?;

        let run = || -> candle_core::Result<(u32, Vec<f32>)> {
            let input_ids = Tensor::new(tokens.get_ids(), &self.device)?.unsqueeze(0)?;
            let attention_mask =
                Tensor::new(tokens.get_attention_mask(), &self.device)?.unsqueeze(0)?;

            let logits = self.model.forward(&input_ids, &attention_mask)?;
            let pred_id = logits.argmax(D::Minus1)?.squeeze(0)?.to_scalar::<u32>()?;
            let probs = softmax(&logits, D::Minus1)?.squeeze(0)?.to_vec1::<f32>()?;
            Ok((pred_id, probs))
        };
        let (pred_id, probs) = run().map_err(|e| Error::Prediction(e.to_string()))?;

        let label = self
            .id2label
            .get(&pred_id.to_string())
            .ok_or_else(|| {
                Error::Prediction(format!("predicted class '{pred_id}' not in id2label"))
            })?
            .clone();
        let score = probs.get(pred_id as usize).copied().unwrap_or(0.0);

        Ok(Prediction { label, score })
    }
}

/// Fetch the artifact's tokenizer from the hub (disk-cached).
pub(crate) fn load_tokenizer(repo_id: &str) -> Result<Tokenizer> {
    let api = Api::new()?;
    let repo = api.repo(Repo::new(repo_id.to_string(), RepoType::Model));
    let tokenizer_path = repo.get("tokenizer.json")?;
    Tokenizer::from_file(tokenizer_path).map_err(|e| Error::ModelLoad(e.to_string()))
}

#[derive(Deserialize)]
struct ClassifierConfigJson {
    #[serde(default)]
    id2label: HashMap<String, String>,
}

fn load_classifier_weights(
    repo_id: &str,
    device: &Device,
) -> Result<(
    ModernBertConfig,
    VarBuilder<'static>,
    HashMap<String, String>,
)> {
    let api = Api::new()?;
    let repo = api.repo(Repo::new(repo_id.to_string(), RepoType::Model));

    let config_path = repo.get("config.json")?;
    let weights_path = repo
        .get("model.safetensors")
        .or_else(|_| repo.get("pytorch_model.bin"))?;

    let config_str = std::fs::read_to_string(&config_path)?;
    let config: ModernBertConfig = serde_json::from_str(&config_str)?;
    let class_cfg: ClassifierConfigJson = serde_json::from_str(&config_str)?;

    let vb = if weights_path.extension().is_some_and(|e| e == "safetensors") {
        unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)
                .map_err(|e| Error::ModelLoad(e.to_string()))?
        }
    } else {
        VarBuilder::from_pth(&weights_path, DType::F32, device)
            .map_err(|e| Error::ModelLoad(e.to_string()))?
    };

    Ok((config, vb, class_cfg.id2label))
}
