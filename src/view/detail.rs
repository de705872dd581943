//! Orchestration of the contact detail screen: four independent data
//! sources plus the edit draft lifecycle.

use crate::domain::calculation::Calculation;
use crate::domain::contact::{Contact, UpdateContact};
use crate::domain::questionnaire::Questionnaire;
use crate::domain::types::ContactId;
use crate::domain::video_feedback::VideoFeedback;
use crate::forms::contact::EditContactForm;
use crate::view::policy::{self, Section};
use crate::view::source::{DataSource, FetchState};

/// The four independently fetched sections of the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Contact,
    Calculations,
    Questionnaire,
    VideoFeedback,
}

/// A fetch the caller must issue for the given section and subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub kind: SectionKind,
    pub id: ContactId,
}

/// Completion of one fetch, carrying its originating subject id.
#[derive(Clone, Debug)]
pub struct FetchEvent {
    pub id: ContactId,
    pub outcome: FetchOutcome,
}

/// Per-kind fetch result; errors are the operator-facing message.
#[derive(Clone, Debug)]
pub enum FetchOutcome {
    Contact(Result<Contact, String>),
    Calculations(Result<Vec<Calculation>, String>),
    Questionnaire(Result<Vec<Questionnaire>, String>),
    VideoFeedback(Result<Vec<VideoFeedback>, String>),
}

/// A save the caller must submit for the given subject.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest {
    pub id: ContactId,
    pub update: UpdateContact,
}

/// State machine behind the contact detail screen.
///
/// Each section renders independently as soon as its own source resolves;
/// there is no global "all loaded" barrier, and one section's failure
/// never blocks another's success.
#[derive(Debug, Default)]
pub struct ContactDetailView {
    subject: Option<ContactId>,
    contact: DataSource<Contact>,
    calculations: DataSource<Vec<Calculation>>,
    questionnaires: DataSource<Vec<Questionnaire>>,
    video_feedback: DataSource<Vec<VideoFeedback>>,
    editor: Option<EditContactForm>,
    saving: bool,
    save_notice: Option<String>,
}

impl ContactDetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(&self) -> Option<&ContactId> {
        self.subject.as_ref()
    }

    /// Points the view at a subject id and returns the fetches to issue.
    ///
    /// On an id change every source re-enters loading and any open draft
    /// is discarded, so edits can never be applied to a different contact.
    /// Re-showing the current subject issues nothing.
    pub fn show(&mut self, id: ContactId) -> Vec<FetchRequest> {
        if self.subject.as_ref() != Some(&id) {
            self.editor = None;
            self.saving = false;
            self.save_notice = None;
            self.subject = Some(id.clone());
        }

        let mut requests = Vec::with_capacity(4);
        if self.contact.start(&id) {
            requests.push(FetchRequest {
                kind: SectionKind::Contact,
                id: id.clone(),
            });
        }
        if self.calculations.start(&id) {
            requests.push(FetchRequest {
                kind: SectionKind::Calculations,
                id: id.clone(),
            });
        }
        if self.questionnaires.start(&id) {
            requests.push(FetchRequest {
                kind: SectionKind::Questionnaire,
                id: id.clone(),
            });
        }
        if self.video_feedback.start(&id) {
            requests.push(FetchRequest {
                kind: SectionKind::VideoFeedback,
                id,
            });
        }
        requests
    }

    /// Requests a fresh load cycle for one section of the current subject.
    pub fn reload(&mut self, kind: SectionKind) -> Option<FetchRequest> {
        let id = match kind {
            SectionKind::Contact => self.contact.reload(),
            SectionKind::Calculations => self.calculations.reload(),
            SectionKind::Questionnaire => self.questionnaires.reload(),
            SectionKind::VideoFeedback => self.video_feedback.reload(),
        }?;
        Some(FetchRequest { kind, id })
    }

    /// Applies a fetch completion to the owning source. Returns whether
    /// any state changed; stale events report `false`.
    pub fn apply(&mut self, event: FetchEvent) -> bool {
        let FetchEvent { id, outcome } = event;
        match outcome {
            FetchOutcome::Contact(result) => self.contact.resolve(&id, result),
            FetchOutcome::Calculations(result) => self.calculations.resolve(&id, result),
            FetchOutcome::Questionnaire(result) => self.questionnaires.resolve(&id, result),
            FetchOutcome::VideoFeedback(result) => self.video_feedback.resolve(&id, result),
        }
    }

    /// Opens the editor over the loaded contact. Returns `false` (and
    /// opens nothing) while the contact is not loaded. Reopening while
    /// already open keeps the in-progress draft.
    pub fn open_editor(&mut self) -> bool {
        if self.editor.is_some() {
            return true;
        }
        match self.contact.state() {
            FetchState::Success(contact) => {
                self.editor = Some(EditContactForm::from_contact(contact));
                true
            }
            _ => false,
        }
    }

    /// Discards the draft without saving.
    pub fn close_editor(&mut self) {
        self.editor = None;
        self.save_notice = None;
    }

    pub fn editor(&self) -> Option<&EditContactForm> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditContactForm> {
        self.editor.as_mut()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Begins the save protocol: returns the payload to submit, built from
    /// the open draft. `None` when no draft is open or a save is already
    /// in flight. The draft itself is retained until the save succeeds.
    pub fn start_save(&mut self) -> Option<SaveRequest> {
        if self.saving {
            return None;
        }
        let id = self.subject.clone()?;
        let form = self.editor.as_ref()?;
        self.saving = true;
        Some(SaveRequest {
            id,
            update: form.to_update(),
        })
    }

    /// Applies the save outcome. On success the server's returned contact
    /// replaces the displayed one (the server is the source of truth) and
    /// the editor closes, discarding the draft. On failure the editor and
    /// draft stay intact and the failure becomes a transient notice.
    /// A response for a superseded subject id is discarded entirely.
    pub fn apply_save(&mut self, id: &ContactId, result: Result<Contact, String>) -> bool {
        if self.subject.as_ref() != Some(id) {
            return false;
        }
        self.saving = false;
        match result {
            Ok(contact) => {
                self.contact.put(id, contact);
                self.editor = None;
                self.save_notice = None;
            }
            Err(message) => {
                self.save_notice = Some(message);
            }
        }
        true
    }

    /// Takes the pending save-failure notice, if any.
    pub fn take_save_notice(&mut self) -> Option<String> {
        self.save_notice.take()
    }

    pub fn contact_state(&self) -> &FetchState<Contact> {
        self.contact.state()
    }

    pub fn calculations_state(&self) -> &FetchState<Vec<Calculation>> {
        self.calculations.state()
    }

    pub fn questionnaires_state(&self) -> &FetchState<Vec<Questionnaire>> {
        self.questionnaires.state()
    }

    pub fn video_feedback_state(&self) -> &FetchState<Vec<VideoFeedback>> {
        self.video_feedback.state()
    }

    pub fn contact_section(&self) -> Section<'_, Contact> {
        policy::record_section(self.contact.state())
    }

    pub fn calculations_section(&self) -> Section<'_, [Calculation]> {
        policy::collection_section(self.calculations.state())
    }

    pub fn questionnaire_section(&self) -> Section<'_, Questionnaire> {
        policy::first_record(self.questionnaires.state())
    }

    pub fn video_feedback_section(&self) -> Section<'_, [VideoFeedback]> {
        policy::collection_section(self.video_feedback.state())
    }
}
