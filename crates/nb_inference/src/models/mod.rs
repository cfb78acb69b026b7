use std::sync::Arc;

use nb_core::{Error, Result};
pub use nb_core::InferenceModel;
use tracing::info;

use crate::Config;

pub mod dummy;
pub mod huggingface;

pub use dummy::DummyModel;
pub use huggingface::HuggingFaceModel;

/// Builds the backend named in `config.model_name`, `huggingface` when unset.
pub fn create_model(config: Option<Config>) -> Result<Arc<dyn InferenceModel>> {
    let config = config.unwrap_or_default();
    let name = config
        .model_name
        .as_deref()
        .unwrap_or("huggingface")
        .to_lowercase();

    let model: Arc<dyn InferenceModel> = match name.as_str() {
        "huggingface" | "hf" | "bart" => Arc::new(HuggingFaceModel::new(&config)?),
        "dummy" | "lead" => Arc::new(DummyModel::new()),
        other => {
            return Err(Error::Config(format!(
                "Unknown model '{}'. Available models: huggingface (default), dummy",
                other
            )))
        }
    };

    info!("🧠 Using {} summarization model", model.name());
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model_by_name() {
        let model = create_model(None).unwrap();
        assert_eq!(model.name(), "HuggingFace");

        let config = Config {
            model_name: Some("Dummy".to_string()),
            ..Default::default()
        };
        assert_eq!(create_model(Some(config)).unwrap().name(), "Dummy");
    }

    #[test]
    fn test_unknown_model() {
        let config = Config {
            model_name: Some("gpt-9".to_string()),
            ..Default::default()
        };
        let err = create_model(Some(config)).unwrap_err();
        assert!(err.to_string().contains("Unknown model 'gpt-9'"));
    }
}
