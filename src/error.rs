use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Model load failed: {0}")]
    ModelLoad(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Device init failed: {0}")]
    Device(String),
}

impl From<hf_hub::api::sync::ApiError> for Error {
    fn from(value: hf_hub::api::sync::ApiError) -> Self {
        Error::Download(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
