use std::fmt;
use std::sync::Arc;

use nb_core::{Error, InferenceModel, Result, SummaryParams};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::Config;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_MODEL_ID: &str = "facebook/bart-large-cnn";

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
    options: RequestOptions,
}

#[derive(Serialize)]
struct SummarizationParameters {
    max_length: usize,
    min_length: usize,
    do_sample: bool,
}

#[derive(Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct SummarizationOutput {
    summary_text: String,
}

/// Summarization pipeline served over HTTP in the Hugging Face inference
/// format: `{"inputs": ..., "parameters": ...}` in, `[{"summary_text": ...}]`
/// out.
pub struct HuggingFaceModel {
    client: Arc<Client>,
    api_key: Option<String>,
    endpoint: String,
}

impl fmt::Debug for HuggingFaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl HuggingFaceModel {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client: Arc::new(client),
            api_key: config.api_key.clone(),
            endpoint: Self::endpoint_for(config),
        })
    }

    /// `model_url` wins when set, otherwise the hosted API URL for `model_id`.
    fn endpoint_for(config: &Config) -> String {
        match &config.model_url {
            Some(url) => url.clone(),
            None => format!(
                "{}/{}",
                DEFAULT_BASE_URL,
                config.model_id.as_deref().unwrap_or(DEFAULT_MODEL_ID)
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse_output(outputs: Vec<SummarizationOutput>) -> Result<String> {
        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| Error::Summarization("Model returned no summary".to_string()))
    }
}

#[async_trait::async_trait]
impl InferenceModel for HuggingFaceModel {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn summarize(&self, text: &str, params: SummaryParams) -> Result<String> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: SummarizationParameters {
                max_length: params.max_length,
                min_length: params.min_length,
                do_sample: false,
            },
            options: RequestOptions { wait_for_model: true },
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let outputs = builder
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<SummarizationOutput>>()
            .await?;

        Self::parse_output(outputs)
    }
}
