//! Gemini completion gateway implementation

use super::error::GeminiError;
use super::schema::to_response_schema;
use super::types::{GenerateContentRequest, GenerateContentResponse, Part};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use neuralcore_application::{CompletionGateway, GatewayError};
use neuralcore_domain::{DataUrl, LookupPrompt, StructuredReply, VisualMode, VisualOutput};
use tracing::{debug, info, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Resolved settings for [`GeminiGateway`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` keeps the gateway usable for wiring; every call then fails.
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
}

impl GeminiConfig {
    /// Build from the `[gemini]` section and an already resolved key.
    pub fn from_file(file: &FileGeminiConfig, api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: file.base_url.clone(),
            text_model: file.text_model.clone(),
            image_model: file.image_model.clone(),
        }
    }
}

/// Completion gateway backed by the Gemini REST API
pub struct GeminiGateway {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        if config.api_key.is_none() {
            warn!("No Gemini API key configured; completion tools will fail");
        } else {
            info!(
                text_model = %config.text_model,
                image_model = %config.image_model,
                "GeminiGateway initialized"
            );
        }
        Self { client, config }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GeminiError::MissingApiKey)?;

        debug!(model, "generateContent");
        let response = self
            .client
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        if let Some(reason) = parsed.block_reason() {
            return Err(GeminiError::Blocked(reason.to_string()));
        }
        Ok(parsed)
    }
}

#[async_trait]
impl CompletionGateway for GeminiGateway {
    async fn structured(&self, prompt: &LookupPrompt) -> Result<StructuredReply, GatewayError> {
        let request = GenerateContentRequest::user(vec![Part::text(&prompt.instruction)])
            .with_search()
            .with_json_schema(to_response_schema(&prompt.schema));

        let response = self.generate(&self.config.text_model, &request).await?;
        let sources = response.sources();
        debug!(sources = sources.len(), "Structured completion received");

        Ok(StructuredReply {
            text: response.text(),
            sources,
        })
    }

    async fn multimodal(
        &self,
        image: &DataUrl,
        mode: VisualMode,
    ) -> Result<VisualOutput, GatewayError> {
        let request = GenerateContentRequest::user(vec![
            Part::inline(image.mime_type(), image.payload()),
            Part::text(LookupPrompt::visual_instruction(mode)),
        ]);

        match mode {
            VisualMode::Ocr => {
                let response = self.generate(&self.config.text_model, &request).await?;
                Ok(VisualOutput::ExtractedText(response.text()))
            }
            VisualMode::BackgroundRemoval => {
                let response = self.generate(&self.config.image_model, &request).await?;
                let processed = response
                    .first_inline_data()
                    .map(|inline| DataUrl::new("image/png", inline.data.as_str()).to_string());
                if processed.is_none() {
                    debug!("Background removal returned no image part");
                }
                Ok(VisualOutput::ProcessedImage(processed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.map(str::to_string),
            base_url: "https://generativelanguage.googleapis.com/".to_string(),
            text_model: "gemini-3-flash-preview".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
        }
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let gateway = GeminiGateway::new(config(Some("k")));
        assert_eq!(
            gateway.endpoint("gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let gateway = GeminiGateway::new(config(None));
        let err = gateway
            .structured(&LookupPrompt::trends("AI News"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::NotConfigured(_)));

        let image = DataUrl::new("image/png", "AAAA");
        let err = gateway
            .multimodal(&image, VisualMode::BackgroundRemoval)
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::NotConfigured(_)));
    }
}
