//! Fetch and save operations for the contact detail view.
//!
//! The four fetches for a subject are genuine fan-out: each runs in its
//! own task and reports back over a channel, so the view renders whichever
//! sections are ready without waiting on the slowest source.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedSender};

use crate::api::{
    CalculationReader, ContactReader, ContactWriter, DetailBackend, QuestionnaireReader,
    VideoFeedbackReader,
};
use crate::domain::calculation::Calculation;
use crate::domain::contact::Contact;
use crate::domain::questionnaire::Questionnaire;
use crate::domain::types::ContactId;
use crate::domain::video_feedback::VideoFeedback;
use crate::services::ServiceResult;
use crate::view::{ContactDetailView, FetchEvent, FetchOutcome, FetchRequest, SaveRequest, SectionKind};

/// Operator-facing message shown when the contact fetch fails.
pub const CONTACT_LOAD_ERROR: &str = "Failed to load contact details. Please try again.";
/// Operator-facing message shown when the calculations fetch fails.
pub const CALCULATIONS_LOAD_ERROR: &str = "Failed to load calculation data.";
/// Operator-facing message shown when the questionnaire fetch fails.
pub const QUESTIONNAIRE_LOAD_ERROR: &str = "Failed to load questionnaire data.";
/// Operator-facing message shown when the video feedback fetch fails.
pub const VIDEO_FEEDBACK_LOAD_ERROR: &str = "Failed to load video feedback data.";
/// Operator-facing message shown when a save is rejected.
pub const CONTACT_SAVE_ERROR: &str = "Failed to update contact. Please try again.";

/// Fetches a contact by its identifier.
pub async fn fetch_contact<A>(api: &A, id: &ContactId) -> ServiceResult<Contact>
where
    A: ContactReader + ?Sized,
{
    Ok(api.fetch_contact(id).await?)
}

/// Lists the investment calculations recorded for a contact.
pub async fn list_calculations<A>(api: &A, id: &ContactId) -> ServiceResult<Vec<Calculation>>
where
    A: CalculationReader + ?Sized,
{
    Ok(api.list_calculations(id).await?)
}

/// Lists the questionnaire submissions recorded for a contact.
pub async fn list_questionnaires<A>(api: &A, id: &ContactId) -> ServiceResult<Vec<Questionnaire>>
where
    A: QuestionnaireReader + ?Sized,
{
    Ok(api.list_questionnaires(id).await?)
}

/// Lists the video feedback entries recorded for a contact.
pub async fn list_video_feedback<A>(api: &A, id: &ContactId) -> ServiceResult<Vec<VideoFeedback>>
where
    A: VideoFeedbackReader + ?Sized,
{
    Ok(api.list_video_feedback(id).await?)
}

/// Submits the edit draft payload and returns the authoritative contact.
pub async fn save_contact<A>(api: &A, request: &SaveRequest) -> ServiceResult<Contact>
where
    A: ContactWriter + ?Sized,
{
    Ok(api.update_contact(&request.id, &request.update).await?)
}

/// Spawns one task per requested fetch; each task sends its completion
/// event over `events`. No sequencing dependency exists between them, and
/// superseded requests are not cancelled: their late results are simply
/// discarded by the view's id check when they arrive.
pub fn spawn_detail_fetches<A>(
    api: Arc<A>,
    requests: Vec<FetchRequest>,
    events: UnboundedSender<FetchEvent>,
) where
    A: DetailBackend + 'static,
{
    for request in requests {
        let api = Arc::clone(&api);
        let events = events.clone();
        tokio::spawn(async move {
            let FetchRequest { kind, id } = request;
            let outcome = match kind {
                SectionKind::Contact => FetchOutcome::Contact(
                    fetch_contact(api.as_ref(), &id).await.map_err(|e| {
                        log::error!("Failed to load contact {id}: {e}");
                        CONTACT_LOAD_ERROR.to_string()
                    }),
                ),
                SectionKind::Calculations => FetchOutcome::Calculations(
                    list_calculations(api.as_ref(), &id).await.map_err(|e| {
                        log::error!("Failed to load calculations for contact {id}: {e}");
                        CALCULATIONS_LOAD_ERROR.to_string()
                    }),
                ),
                SectionKind::Questionnaire => FetchOutcome::Questionnaire(
                    list_questionnaires(api.as_ref(), &id).await.map_err(|e| {
                        log::error!("Failed to load questionnaire for contact {id}: {e}");
                        QUESTIONNAIRE_LOAD_ERROR.to_string()
                    }),
                ),
                SectionKind::VideoFeedback => FetchOutcome::VideoFeedback(
                    list_video_feedback(api.as_ref(), &id).await.map_err(|e| {
                        log::error!("Failed to load video feedback for contact {id}: {e}");
                        VIDEO_FEEDBACK_LOAD_ERROR.to_string()
                    }),
                ),
            };
            // The receiver may be gone if the view's owner shut down; a
            // dropped event is indistinguishable from a stale one.
            let _ = events.send(FetchEvent { id, outcome });
        });
    }
}

/// Shows `id` on the view and drives it until every issued fetch has
/// reported back. Intended for one-shot consumers such as the CLI; an
/// interactive host would keep the receiver and apply events as they come.
pub async fn drive_detail_view<A>(api: Arc<A>, view: &mut ContactDetailView, id: ContactId)
where
    A: DetailBackend + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let requests = view.show(id);
    spawn_detail_fetches(api, requests, tx);
    // The channel closes once every spawned task has sent its event.
    while let Some(event) = rx.recv().await {
        view.apply(event);
    }
}

/// Submits the open draft, if any, and reconciles the outcome into the
/// view per the save protocol.
pub async fn submit_editor<A>(api: &A, view: &mut ContactDetailView) -> bool
where
    A: ContactWriter + ?Sized,
{
    let Some(request) = view.start_save() else {
        return false;
    };
    let result = save_contact(api, &request).await.map_err(|e| {
        log::error!("Failed to update contact {}: {e}", request.id);
        CONTACT_SAVE_ERROR.to_string()
    });
    view.apply_save(&request.id, result)
}
