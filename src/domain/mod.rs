//! Domain aggregates rendered by the contact detail view.

pub mod calculation;
pub mod contact;
pub mod questionnaire;
pub mod types;
pub mod video_feedback;
