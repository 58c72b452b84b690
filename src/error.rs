use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type SignupResult<T> = Result<T, SignupError>;

/// Failures of the signup commands. Both surface as 404 with a `detail` body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Participant not found")]
    ParticipantNotFound,
}

impl SignupError {
    pub fn status(&self) -> StatusCode {
        match self {
            SignupError::ActivityNotFound | SignupError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Missing or malformed query parameters, answered in the same `detail`
/// shape as the signup errors.
#[derive(Debug)]
pub struct QueryError(pub QueryRejection);

impl From<QueryRejection> for QueryError {
    fn from(rejection: QueryRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.0.body_text() }));
        (self.0.status(), body).into_response()
    }
}
