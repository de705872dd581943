//! Render policy: maps fetch state to what a section should display.
//!
//! Every section applies the same precedence: loading first (idle counts
//! as loading), then the error verbatim, then the fixed empty fallback,
//! and only then the payload.

use crate::view::source::FetchState;

/// The deterministic output shape a section renders from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Section<'a, T: ?Sized> {
    Loading,
    Error(&'a str),
    Empty,
    Ready(&'a T),
}

/// Policy for a single-record section (the contact header).
pub fn record_section<T>(state: &FetchState<T>) -> Section<'_, T> {
    match state {
        FetchState::Idle | FetchState::Loading => Section::Loading,
        FetchState::Error(message) => Section::Error(message),
        FetchState::Success(record) => Section::Ready(record),
    }
}

/// Policy for a collection section: an empty list is a valid success
/// state rendered as the fallback, not an error.
pub fn collection_section<T>(state: &FetchState<Vec<T>>) -> Section<'_, [T]> {
    match state {
        FetchState::Idle | FetchState::Loading => Section::Loading,
        FetchState::Error(message) => Section::Error(message),
        FetchState::Success(items) if items.is_empty() => Section::Empty,
        FetchState::Success(items) => Section::Ready(items.as_slice()),
    }
}

/// Policy for the questionnaire section, which shows only the first
/// (most recent) record and ignores the rest.
pub fn first_record<T>(state: &FetchState<Vec<T>>) -> Section<'_, T> {
    match collection_section(state) {
        Section::Loading => Section::Loading,
        Section::Error(message) => Section::Error(message),
        Section::Empty => Section::Empty,
        Section::Ready(items) => Section::Ready(&items[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_counts_as_loading() {
        let state: FetchState<Vec<u32>> = FetchState::Idle;
        assert_eq!(collection_section(&state), Section::Loading);
    }

    #[test]
    fn empty_collection_is_the_fallback_not_an_index_error() {
        let state: FetchState<Vec<u32>> = FetchState::Success(vec![]);
        assert_eq!(collection_section(&state), Section::Empty);
        assert_eq!(first_record(&state), Section::Empty);
    }

    #[test]
    fn first_record_ignores_the_rest() {
        let state = FetchState::Success(vec!["q1", "q2"]);
        assert_eq!(first_record(&state), Section::Ready(&"q1"));
    }

    #[test]
    fn error_message_is_passed_through_verbatim() {
        let state: FetchState<Vec<u32>> = FetchState::Error("Failed to load.".into());
        assert_eq!(collection_section(&state), Section::Error("Failed to load."));
    }
}
