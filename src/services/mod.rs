//! Service helpers mediating mutations for the console views.

pub mod tasks;

use thiserror::Error;
use validator::ValidationErrors;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Local, field-scoped validation failure; never sent to the network.
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
