//! Service layer: thin async wrappers over the backend api traits plus
//! the fan-out runner that feeds the detail view.

use thiserror::Error;

use crate::api::ApiError;

pub mod detail;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
