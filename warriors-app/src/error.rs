use crate::domain::{RepoCreateError, RepoError, RepoRetrieveError, RepoUpdateError};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("scheduling failed: {0}")]
    Scheduling(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn validation<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::Validation(msg.into()))
    }

    pub fn scheduling<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::Scheduling(msg.into()))
    }

    pub fn not_found<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::NotFound(msg.into()))
    }

    pub fn conflict<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::Conflict(msg.into()))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepoError> for ServiceError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::StorageError(e) => ServiceError::Storage(e),
        }
    }
}

impl From<RepoRetrieveError> for ServiceError {
    fn from(e: RepoRetrieveError) -> Self {
        match e {
            RepoRetrieveError::NotFound => ServiceError::NotFound("resource not found".to_string()),
            RepoRetrieveError::StorageError(e) => ServiceError::Storage(e),
        }
    }
}

impl From<RepoCreateError> for ServiceError {
    fn from(e: RepoCreateError) -> Self {
        match e {
            RepoCreateError::Conflict => ServiceError::Conflict("resource conflict".to_string()),
            RepoCreateError::StorageError(e) => ServiceError::Storage(e),
        }
    }
}

impl From<RepoUpdateError> for ServiceError {
    fn from(e: RepoUpdateError) -> Self {
        match e {
            RepoUpdateError::NotFound => ServiceError::NotFound("resource not found".to_string()),
            RepoUpdateError::Conflict => ServiceError::Conflict("resource conflict".to_string()),
            RepoUpdateError::StorageError(e) => ServiceError::Storage(e),
        }
    }
}

/// Maps a missing record to a `NotFound` error naming it.
pub(crate) fn found<T>(
    result: Result<T, RepoRetrieveError>,
    what: impl FnOnce() -> String,
) -> ServiceResult<T> {
    match result {
        Ok(value) => Ok(value),
        Err(RepoRetrieveError::NotFound) => ServiceError::not_found(what()),
        Err(e) => Err(e.into()),
    }
}
