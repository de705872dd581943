//! Contact-relationship dashboard core.
//!
//! Renders a single contact's profile alongside three independently
//! fetched related record sets (investment calculations, investor
//! questionnaire, video feedback) and manages the edit draft that is
//! reconciled with server truth on save. The view state machine lives in
//! [`view`], the backend collaborator seam in [`api`], and the pure
//! formatting rules in [`format`].

pub mod api;
pub mod domain;
pub mod dto;
pub mod format;
pub mod forms;
pub mod models;
pub mod render;
pub mod services;
pub mod view;
