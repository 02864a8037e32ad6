use launchkit_core::{GeneratedSections, UploadAttachment};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};

use crate::error::GeneratorError;

/// Inputs forwarded to the generator for one submission.
///
/// `target_audience` is the resolved value: the custom free-text entry
/// replaces the "Other" sentinel before the request is built.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub business_idea: String,
    pub target_audience: String,
    pub value_proposition: String,
    pub files: Vec<UploadAttachment>,
}

/// Client for the external strategy-generation endpoint.
///
/// Use [`GeneratorClient::new`] with the configured endpoint, or point
/// it at a mock server in tests. The client applies no request timeout:
/// generation is allowed to block indefinitely and the caller owns any
/// cancellation policy.
pub struct GeneratorClient {
    client: Client,
    endpoint: Url,
}

impl GeneratorClient {
    /// Creates a client for the given generator endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed, or
    /// [`GeneratorError::InvalidRequest`] if `endpoint` is not a valid URL.
    pub fn new(endpoint: &str, user_agent: &str) -> Result<Self, GeneratorError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        let endpoint = Url::parse(endpoint).map_err(|e| {
            GeneratorError::InvalidRequest(format!("invalid endpoint '{endpoint}': {e}"))
        })?;
        Ok(Self { client, endpoint })
    }

    /// Submits founder inputs and attachments, returning the structured
    /// artifact.
    ///
    /// Sends multipart fields `business_idea`, `target_audience`,
    /// `value_proposition` and one `file` part per attachment (bytes,
    /// filename, and mime type).
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::Http`] on transport failure.
    /// - [`GeneratorError::UnexpectedStatus`] on any non-2xx response.
    /// - [`GeneratorError::Deserialize`] if the body does not match the
    ///   expected artifact shape.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedSections, GeneratorError> {
        let mut form = Form::new()
            .text("business_idea", request.business_idea.clone())
            .text("target_audience", request.target_audience.clone())
            .text("value_proposition", request.value_proposition.clone());

        for attachment in &request.files {
            let part = Part::bytes(attachment.bytes.clone())
                .file_name(attachment.meta.name.clone())
                .mime_str(&attachment.meta.mime_type)
                .map_err(|e| {
                    GeneratorError::InvalidRequest(format!(
                        "attachment '{}' has invalid mime type '{}': {e}",
                        attachment.meta.name, attachment.meta.mime_type
                    ))
                })?;
            form = form.part("file", part);
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            files = request.files.len(),
            "invoking strategy generator"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| GeneratorError::Deserialize {
            context: format!("generate(business_idea={})", request.business_idea),
            source,
        })
    }
}
