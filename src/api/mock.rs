//! Mock backend implementation for isolating consumers in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{
    CalculationReader, ContactReader, ContactWriter, QuestionnaireReader, VideoFeedbackReader,
};
use crate::domain::calculation::Calculation;
use crate::domain::contact::{Contact, UpdateContact};
use crate::domain::questionnaire::Questionnaire;
use crate::domain::types::ContactId;
use crate::domain::video_feedback::VideoFeedback;

mock! {
    pub Backend {}

    #[async_trait]
    impl ContactReader for Backend {
        async fn fetch_contact(&self, id: &ContactId) -> ApiResult<Contact>;
    }

    #[async_trait]
    impl ContactWriter for Backend {
        async fn update_contact(
            &self,
            id: &ContactId,
            update: &UpdateContact,
        ) -> ApiResult<Contact>;
    }

    #[async_trait]
    impl CalculationReader for Backend {
        async fn list_calculations(&self, contact_id: &ContactId) -> ApiResult<Vec<Calculation>>;
    }

    #[async_trait]
    impl QuestionnaireReader for Backend {
        async fn list_questionnaires(
            &self,
            contact_id: &ContactId,
        ) -> ApiResult<Vec<Questionnaire>>;
    }

    #[async_trait]
    impl VideoFeedbackReader for Backend {
        async fn list_video_feedback(
            &self,
            contact_id: &ContactId,
        ) -> ApiResult<Vec<VideoFeedback>>;
    }
}
