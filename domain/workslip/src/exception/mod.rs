use thiserror::Error;

use crate::model::vo::RequiredField;

pub type WorkSlipResult<T> = Result<T, WorkSlipException>;

#[derive(Error, Debug)]
pub enum WorkSlipException {
    #[error("SO number {so_number} already exists.")]
    SoNumberConflict { so_number: String },

    #[error("Slip not found: {id}.")]
    NotFound { id: String },

    #[error("Invalid work slip: {reason}.")]
    InvalidRecord { reason: String },

    #[error("Work slip is missing required fields: {missing:?}.")]
    IncompleteSubmission { missing: Vec<RequiredField> },

    #[error("Valid credentials are required.")]
    Unauthorized,

    #[error("User {username} may only view work slips.")]
    Forbidden { username: String },

    #[error("Record service responded with {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Work slip internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for WorkSlipException {
    fn from(e: anyhow::Error) -> Self {
        WorkSlipException::InternalError { source: e }
    }
}

impl WorkSlipException {
    /// Whether the caller should ask the user for a different SO number.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::SoNumberConflict { .. })
    }
}
