//! reqwest implementation of the backend api traits.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{
    CalculationReader, ContactReader, ContactWriter, QuestionnaireReader, VideoFeedbackReader,
};
use crate::domain::calculation::Calculation;
use crate::domain::contact::{Contact, UpdateContact};
use crate::domain::questionnaire::Questionnaire;
use crate::domain::types::ContactId;
use crate::domain::video_feedback::VideoFeedback;
use crate::dto::ApiResponse;
use crate::models::config::AppConfig;

/// HTTP client for the CRM backend endpoints described in the config.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Builds a client with the configured request timeout, so a request
    /// that never resolves surfaces as an ordinary fetch failure.
    pub fn new(config: &AppConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::unwrap_envelope(response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.into_inner())
    }
}

#[async_trait]
impl ContactReader for HttpBackend {
    async fn fetch_contact(&self, id: &ContactId) -> ApiResult<Contact> {
        self.get_data(&format!("/contacts/{id}")).await
    }
}

#[async_trait]
impl ContactWriter for HttpBackend {
    async fn update_contact(&self, id: &ContactId, update: &UpdateContact) -> ApiResult<Contact> {
        let response = self
            .client
            .put(self.url(&format!("/contacts/{id}")))
            .json(update)
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }
}

#[async_trait]
impl CalculationReader for HttpBackend {
    async fn list_calculations(&self, contact_id: &ContactId) -> ApiResult<Vec<Calculation>> {
        self.get_data(&format!("/contacts/{contact_id}/calculations"))
            .await
    }
}

#[async_trait]
impl QuestionnaireReader for HttpBackend {
    async fn list_questionnaires(&self, contact_id: &ContactId) -> ApiResult<Vec<Questionnaire>> {
        self.get_data(&format!("/contacts/{contact_id}/questionnaires"))
            .await
    }
}

#[async_trait]
impl VideoFeedbackReader for HttpBackend {
    async fn list_video_feedback(&self, contact_id: &ContactId) -> ApiResult<Vec<VideoFeedback>> {
        self.get_data(&format!("/contacts/{contact_id}/video-feedback"))
            .await
    }
}
