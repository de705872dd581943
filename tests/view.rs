use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::mpsc;

use investor_crm::api::errors::{ApiError, ApiResult};
use investor_crm::api::{
    CalculationReader, ContactReader, ContactWriter, QuestionnaireReader, VideoFeedbackReader,
};
use investor_crm::domain::calculation::Calculation;
use investor_crm::domain::contact::{Contact, ContactStatus, UpdateContact};
use investor_crm::domain::questionnaire::Questionnaire;
use investor_crm::domain::types::{ContactId, TagSet};
use investor_crm::domain::video_feedback::VideoFeedback;
use investor_crm::forms::contact::ContactField;
use investor_crm::render;
use investor_crm::services::detail::{
    self, drive_detail_view, spawn_detail_fetches, submit_editor,
};
use investor_crm::view::{ContactDetailView, FetchState, Section, SectionKind};

fn id(s: &str) -> ContactId {
    ContactId::new(s).unwrap()
}

fn contact_for(subject: &ContactId) -> Contact {
    Contact {
        id: subject.clone(),
        name: Some(format!("Contact {subject}")),
        email: Some("contact@example.com".into()),
        phone_number: None,
        address: None,
        status: Some(ContactStatus::Lead),
        tags: Some(TagSet::from(vec!["investor".into()])),
        jobs: vec![],
        communications: vec![],
    }
}

fn calculation_for(subject: &ContactId) -> Calculation {
    Calculation {
        id: format!("calc-{subject}"),
        property_type: "Multifamily".into(),
        market_area: subject.to_string(),
        investment_amount: 250000.0,
        hold_period: 5,
        annual_return_rate: 7.5,
        roi: 42.0,
        monthly_cash_flow: 1833.0,
        annual_cash_flow: 21996.0,
        total_return: 355000.0,
        property_management_fee: 8.0,
        vacancy_rate: 5.0,
        notes: None,
        created_at: Utc.with_ymd_and_hms(2025, 3, 4, 12, 0, 0).unwrap(),
    }
}

fn questionnaire(goal: &str) -> Questionnaire {
    Questionnaire {
        is_accredited_investor: true,
        has_invested_before: false,
        looking_timeframe: "0-3 months".into(),
        primary_investment_goal: goal.into(),
        investment_timeline: "5 years".into(),
        investment_timeframe: "This quarter".into(),
        capital_to_invest: "$100k-$250k".into(),
        use_financing: "Yes".into(),
        markets_interested: vec!["Austin".into()],
        property_types_interested: vec!["Duplex".into()],
        notes: None,
    }
}

/// In-memory backend; per-section failure switches and an optional delay
/// for one subject so response ordering can be inverted in tests.
#[derive(Clone, Default)]
struct StubBackend {
    fail_contact: bool,
    fail_calculations: bool,
    fail_questionnaire: bool,
    fail_video: bool,
    fail_update: bool,
    questionnaires: Vec<Questionnaire>,
    slow_subject: Option<ContactId>,
}

impl StubBackend {
    async fn delay_for(&self, subject: &ContactId) {
        if self.slow_subject.as_ref() == Some(subject) {
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    }

    fn failure() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "internal error".into(),
        }
    }
}

#[async_trait]
impl ContactReader for StubBackend {
    async fn fetch_contact(&self, subject: &ContactId) -> ApiResult<Contact> {
        self.delay_for(subject).await;
        if self.fail_contact {
            return Err(Self::failure());
        }
        Ok(contact_for(subject))
    }
}

#[async_trait]
impl ContactWriter for StubBackend {
    async fn update_contact(
        &self,
        subject: &ContactId,
        _update: &UpdateContact,
    ) -> ApiResult<Contact> {
        if self.fail_update {
            return Err(Self::failure());
        }
        // The server normalizes fields; the response deliberately differs
        // from whatever draft was submitted.
        let mut contact = contact_for(subject);
        contact.name = Some("Server Truth".into());
        Ok(contact)
    }
}

#[async_trait]
impl CalculationReader for StubBackend {
    async fn list_calculations(&self, subject: &ContactId) -> ApiResult<Vec<Calculation>> {
        self.delay_for(subject).await;
        if self.fail_calculations {
            return Err(Self::failure());
        }
        Ok(vec![calculation_for(subject)])
    }
}

#[async_trait]
impl QuestionnaireReader for StubBackend {
    async fn list_questionnaires(&self, subject: &ContactId) -> ApiResult<Vec<Questionnaire>> {
        self.delay_for(subject).await;
        if self.fail_questionnaire {
            return Err(Self::failure());
        }
        Ok(self.questionnaires.clone())
    }
}

#[async_trait]
impl VideoFeedbackReader for StubBackend {
    async fn list_video_feedback(&self, subject: &ContactId) -> ApiResult<Vec<VideoFeedback>> {
        self.delay_for(subject).await;
        if self.fail_video {
            return Err(Self::failure());
        }
        Ok(vec![])
    }
}

#[tokio::test]
async fn one_failing_section_never_blocks_the_others() {
    let api = Arc::new(StubBackend {
        fail_questionnaire: true,
        ..StubBackend::default()
    });
    let mut view = ContactDetailView::new();
    drive_detail_view(api, &mut view, id("c1")).await;

    assert!(matches!(view.contact_state(), FetchState::Success(_)));
    assert!(matches!(view.calculations_state(), FetchState::Success(_)));
    assert!(matches!(view.video_feedback_state(), FetchState::Success(_)));
    assert_eq!(
        view.questionnaires_state().error(),
        Some(detail::QUESTIONNAIRE_LOAD_ERROR)
    );
    // The failed section renders its message verbatim, siblings render data.
    assert_eq!(
        render::render_questionnaire(view.questionnaire_section()),
        vec![detail::QUESTIONNAIRE_LOAD_ERROR.to_string()]
    );
    assert!(matches!(view.calculations_section(), Section::Ready(_)));
}

#[tokio::test(start_paused = true)]
async fn late_response_for_a_superseded_subject_is_discarded() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let slow = Arc::new(StubBackend {
        slow_subject: Some(id("a")),
        ..StubBackend::default()
    });

    let mut view = ContactDetailView::new();
    let first = view.show(id("a"));
    assert_eq!(first.len(), 4);
    spawn_detail_fetches(Arc::clone(&slow), first, tx.clone());

    // Operator navigates to "b" while every fetch for "a" is in flight.
    let second = view.show(id("b"));
    assert_eq!(second.len(), 4);
    spawn_detail_fetches(slow, second, tx.clone());
    drop(tx);

    while let Some(event) = rx.recv().await {
        view.apply(event);
    }

    // "a" resolved after "b" had taken over; none of its data may show.
    let contact = view.contact_state().success().unwrap();
    assert_eq!(contact.name.as_deref(), Some("Contact b"));
    let calculations = view.calculations_state().success().unwrap();
    assert_eq!(calculations[0].market_area, "b");
}

#[tokio::test]
async fn re_showing_the_same_subject_does_not_refetch() {
    let api = Arc::new(StubBackend::default());
    let mut view = ContactDetailView::new();
    drive_detail_view(api, &mut view, id("c1")).await;

    assert!(view.show(id("c1")).is_empty());
    assert!(matches!(view.contact_state(), FetchState::Success(_)));
}

#[tokio::test]
async fn reload_starts_a_fresh_cycle_after_an_error() {
    let api = Arc::new(StubBackend {
        fail_calculations: true,
        ..StubBackend::default()
    });
    let mut view = ContactDetailView::new();
    drive_detail_view(Arc::clone(&api), &mut view, id("c1")).await;
    assert!(view.calculations_state().error().is_some());

    let request = view.reload(SectionKind::Calculations).unwrap();
    assert_eq!(request.kind, SectionKind::Calculations);
    assert!(view.calculations_state().is_loading());
}

#[tokio::test]
async fn save_success_takes_the_server_contact_and_closes_the_editor() {
    let api = Arc::new(StubBackend::default());
    let mut view = ContactDetailView::new();
    drive_detail_view(Arc::clone(&api), &mut view, id("c1")).await;

    assert!(view.open_editor());
    view.editor_mut()
        .unwrap()
        .set(ContactField::Name, "Draft Name");

    assert!(submit_editor(api.as_ref(), &mut view).await);

    // The server representation wins over the locally-held draft.
    let contact = view.contact_state().success().unwrap();
    assert_eq!(contact.name.as_deref(), Some("Server Truth"));
    assert!(view.editor().is_none());
    assert!(view.take_save_notice().is_none());
    assert!(!view.is_saving());
}

#[tokio::test]
async fn save_failure_keeps_the_draft_intact_and_the_editor_open() {
    let api = Arc::new(StubBackend {
        fail_update: true,
        ..StubBackend::default()
    });
    let mut view = ContactDetailView::new();
    drive_detail_view(Arc::clone(&api), &mut view, id("c1")).await;

    assert!(view.open_editor());
    let editor = view.editor_mut().unwrap();
    editor.set(ContactField::Name, "Draft Name");
    editor.add_tag("hot-lead");
    let before = editor.clone();

    assert!(submit_editor(api.as_ref(), &mut view).await);

    assert_eq!(view.editor(), Some(&before));
    assert_eq!(
        view.take_save_notice().as_deref(),
        Some(detail::CONTACT_SAVE_ERROR)
    );
    assert!(!view.is_saving());
    // The displayed contact was not touched by the failed save.
    let contact = view.contact_state().success().unwrap();
    assert_eq!(contact.name.as_deref(), Some("Contact c1"));
}

#[tokio::test]
async fn switching_subjects_discards_an_open_draft() {
    let api = Arc::new(StubBackend::default());
    let mut view = ContactDetailView::new();
    drive_detail_view(Arc::clone(&api), &mut view, id("a")).await;

    assert!(view.open_editor());
    view.editor_mut().unwrap().set(ContactField::Name, "Edited");

    drive_detail_view(api, &mut view, id("b")).await;
    assert!(view.editor().is_none());
    // A save response for the old subject is likewise discarded.
    assert!(!view.apply_save(&id("a"), Ok(contact_for(&id("a")))));
}

#[tokio::test]
async fn editor_cannot_open_before_the_contact_loaded() {
    let mut view = ContactDetailView::new();
    view.show(id("c1"));
    assert!(!view.open_editor());
    assert!(view.start_save().is_none());
}

#[tokio::test]
async fn questionnaire_section_shows_only_the_first_record() {
    let api = Arc::new(StubBackend {
        questionnaires: vec![questionnaire("Cash Flow"), questionnaire("Appreciation")],
        ..StubBackend::default()
    });
    let mut view = ContactDetailView::new();
    drive_detail_view(api, &mut view, id("c1")).await;

    match view.questionnaire_section() {
        Section::Ready(first) => assert_eq!(first.primary_investment_goal, "Cash Flow"),
        other => panic!("expected ready questionnaire, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_questionnaire_collection_renders_the_fallback() {
    let api = Arc::new(StubBackend::default());
    let mut view = ContactDetailView::new();
    drive_detail_view(api, &mut view, id("c1")).await;

    assert_eq!(view.questionnaire_section(), Section::Empty);
    assert_eq!(
        render::render_questionnaire(view.questionnaire_section()),
        vec!["No investor questionnaire available for this contact.".to_string()]
    );
}
