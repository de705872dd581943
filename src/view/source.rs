//! Single-fetch lifecycle state, one instance per related-record kind.

use crate::domain::types::ContactId;

/// The four states a fetch can be in.
///
/// One tagged type instead of loading/data/error flag triples, so the
/// inconsistent combinations cannot be represented at all.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Owns one async fetch lifecycle keyed by contact id.
///
/// The subject id is recorded at start time and compared again on
/// resolution, which is what suppresses stale responses: a result for a
/// superseded id is discarded on arrival, never applied.
#[derive(Clone, Debug)]
pub struct DataSource<T> {
    subject: Option<ContactId>,
    state: FetchState<T>,
}

impl<T> Default for DataSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DataSource<T> {
    pub fn new() -> Self {
        Self {
            subject: None,
            state: FetchState::Idle,
        }
    }

    /// Transitions to loading for `id` and reports whether a fetch must be
    /// issued. Re-entering the subject the source was already started with
    /// is a no-op: mounting the same id twice does not refetch.
    pub fn start(&mut self, id: &ContactId) -> bool {
        if self.subject.as_ref() == Some(id) && !matches!(self.state, FetchState::Idle) {
            return false;
        }
        self.subject = Some(id.clone());
        self.state = FetchState::Loading;
        true
    }

    /// Forces a fresh load cycle for the current subject; this is the only
    /// way out of a terminal error short of an id change.
    pub fn reload(&mut self) -> Option<ContactId> {
        let id = self.subject.clone()?;
        self.state = FetchState::Loading;
        Some(id)
    }

    /// Applies a completed fetch. Honored only while this source is still
    /// loading for exactly that id; stale and duplicate resolutions are
    /// discarded. Returns whether the state changed.
    pub fn resolve(&mut self, id: &ContactId, result: Result<T, String>) -> bool {
        if self.subject.as_ref() != Some(id) || !self.state.is_loading() {
            return false;
        }
        self.state = match result {
            Ok(value) => FetchState::Success(value),
            Err(message) => FetchState::Error(message),
        };
        true
    }

    /// Replaces a loaded payload in place for the given id, outside the
    /// fetch cycle (used when a save returns the authoritative contact).
    pub fn put(&mut self, id: &ContactId, value: T) -> bool {
        if self.subject.as_ref() != Some(id) {
            return false;
        }
        self.state = FetchState::Success(value);
        true
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn subject(&self) -> Option<&ContactId> {
        self.subject.as_ref()
    }
}
