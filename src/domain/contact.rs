use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactId, TagSet};

/// A contact as returned by the backend.
///
/// Editable fields are optional on the wire; absence and
/// present-but-empty are distinct states and the edit projection treats
/// them differently.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub status: Option<ContactStatus>,
    pub tags: Option<TagSet>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub communications: Vec<Communication>,
}

/// Lifecycle stage of a contact.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    Lead,
    Client,
    FormerClient,
}

impl Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactStatus::Lead => write!(f, "Lead"),
            ContactStatus::Client => write!(f, "Client"),
            ContactStatus::FormerClient => write!(f, "Former Client"),
        }
    }
}

impl std::str::FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lead" => Ok(ContactStatus::Lead),
            "client" => Ok(ContactStatus::Client),
            "former_client" => Ok(ContactStatus::FormerClient),
            other => Err(format!("unknown contact status: {other}")),
        }
    }
}

/// A job attached to a contact, read-only in the detail view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub name: String,
    pub status: String,
    pub amount: Option<f64>,
}

/// One entry of a contact's communication history.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Communication {
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub description: String,
}

/// Payload submitted when saving a contact edit; exactly the editable
/// subset, with the wire name `phone` rather than `phoneNumber`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct UpdateContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: ContactStatus,
    pub tags: TagSet,
}
