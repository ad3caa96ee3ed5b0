use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use domain_workslip::exception::WorkSlipException;
use serde::Serialize;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A [`WorkSlipException`] answered as `{"error": "..."}` with the matching
/// status.
#[derive(Debug)]
pub struct ApiError(pub WorkSlipException);

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self(WorkSlipException::InvalidRecord {
            reason: reason.into(),
        })
    }

    fn message(&self) -> String {
        match &self.0 {
            WorkSlipException::SoNumberConflict { .. } => "SO number already exists".to_owned(),
            WorkSlipException::NotFound { .. } => "Slip not found".to_owned(),
            WorkSlipException::InvalidRecord { reason } => reason.clone(),
            WorkSlipException::Remote { message, .. } => message.clone(),
            WorkSlipException::InternalError { .. } => "Internal server error".to_owned(),
            e => e.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<WorkSlipException> for ApiError {
    fn from(e: WorkSlipException) -> Self {
        Self(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            WorkSlipException::SoNumberConflict { .. } => StatusCode::CONFLICT,
            WorkSlipException::NotFound { .. } => StatusCode::NOT_FOUND,
            WorkSlipException::InvalidRecord { .. }
            | WorkSlipException::IncompleteSubmission { .. } => StatusCode::BAD_REQUEST,
            WorkSlipException::Unauthorized => StatusCode::UNAUTHORIZED,
            WorkSlipException::Forbidden { .. } => StatusCode::FORBIDDEN,
            WorkSlipException::Remote { .. } => StatusCode::BAD_GATEWAY,
            WorkSlipException::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let WorkSlipException::InternalError { source } = &self.0 {
            tracing::error!("{source:?}");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.message(),
        })
    }
}
