//! Thin shapes between the backend transport and the domain layer.

use serde::Deserialize;

/// Envelope every backend endpoint wraps its payload in: `{ "data": … }`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}
