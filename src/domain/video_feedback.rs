use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feedback a contact recorded about one of our videos.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoFeedback {
    pub id: String,
    pub video: Option<Video>,
    /// Keyed by question identifier; `BTreeMap` keeps rendering order
    /// deterministic.
    pub responses: BTreeMap<String, FeedbackResponse>,
    pub created_at: DateTime<Utc>,
}

/// The video the feedback refers to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub title: String,
    pub thumbnail_url: String,
    pub video_url: String,
}

/// A single answered question, optionally with a 1..=5 rating.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FeedbackResponse {
    pub question: String,
    pub answer: String,
    pub rating: Option<u8>,
}
