//! The in-progress edit draft of a contact's editable fields.

use serde::Serialize;

use crate::domain::contact::{Contact, ContactStatus, UpdateContact};
use crate::domain::types::TagSet;

/// Editable fields a caller may set on the draft.
///
/// Using an enum makes "unrecognized field name" unrepresentable; the
/// status field has its own typed setter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Address,
}

/// A mutable copy of a contact's editable subset, decoupled from the
/// displayed contact until a save succeeds.
///
/// Created by projecting the current contact; missing source fields
/// become the empty string, a missing status defaults to `Client` and
/// missing tags to the empty set. Fields that are present but empty are
/// kept as-is.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct EditContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: ContactStatus,
    tags: TagSet,
}

impl EditContactForm {
    /// Projects the editable subset of `contact` into a fresh draft.
    #[must_use]
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone().unwrap_or_default(),
            email: contact.email.clone().unwrap_or_default(),
            phone: contact.phone_number.clone().unwrap_or_default(),
            address: contact.address.clone().unwrap_or_default(),
            status: contact.status.unwrap_or(ContactStatus::Client),
            tags: contact.tags.clone().unwrap_or_default(),
        }
    }

    /// Overwrites one of the free-text fields.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Address => self.address = value,
        }
    }

    pub fn set_status(&mut self, status: ContactStatus) {
        self.status = status;
    }

    /// Adds a tag, applying the trim/non-empty/unique rules. Returns
    /// whether the draft changed.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        self.tags.add(tag)
    }

    /// Removes a tag by exact match; a no-op for non-members.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Builds the save payload from the current draft values.
    #[must_use]
    pub fn to_update(&self) -> UpdateContact {
        UpdateContact {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            status: self.status,
            tags: self.tags.clone(),
        }
    }
}
