//! Backend collaborator traits.
//!
//! Each category of related record has its own reader so a test or an
//! alternative transport can implement exactly the slice it needs; the
//! shipped implementation is the reqwest-backed [`http::HttpBackend`].

use async_trait::async_trait;

use crate::domain::calculation::Calculation;
use crate::domain::contact::{Contact, UpdateContact};
use crate::domain::questionnaire::Questionnaire;
use crate::domain::types::ContactId;
use crate::domain::video_feedback::VideoFeedback;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use errors::{ApiError, ApiResult};

#[async_trait]
pub trait ContactReader: Send + Sync {
    async fn fetch_contact(&self, id: &ContactId) -> ApiResult<Contact>;
}

#[async_trait]
pub trait ContactWriter: Send + Sync {
    /// Submits the editable subset; the response carries the authoritative
    /// contact, which may differ from what was sent.
    async fn update_contact(&self, id: &ContactId, update: &UpdateContact) -> ApiResult<Contact>;
}

#[async_trait]
pub trait CalculationReader: Send + Sync {
    async fn list_calculations(&self, contact_id: &ContactId) -> ApiResult<Vec<Calculation>>;
}

#[async_trait]
pub trait QuestionnaireReader: Send + Sync {
    async fn list_questionnaires(&self, contact_id: &ContactId) -> ApiResult<Vec<Questionnaire>>;
}

#[async_trait]
pub trait VideoFeedbackReader: Send + Sync {
    async fn list_video_feedback(&self, contact_id: &ContactId) -> ApiResult<Vec<VideoFeedback>>;
}

/// Everything the detail view needs from the backend.
pub trait DetailBackend:
    ContactReader + ContactWriter + CalculationReader + QuestionnaireReader + VideoFeedbackReader
{
}

impl<T> DetailBackend for T where
    T: ContactReader + ContactWriter + CalculationReader + QuestionnaireReader + VideoFeedbackReader
{
}
