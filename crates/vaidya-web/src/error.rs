use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use vaidya_core::VaidyaError;

pub fn error_response(err: &VaidyaError, operation: &str) -> Response {
    let status = status_for_error(err);
    let payload = err.to_payload(operation);
    (status, Json(payload)).into_response()
}

fn status_for_error(err: &VaidyaError) -> StatusCode {
    match err {
        VaidyaError::Validation(_) | VaidyaError::Config(_) => StatusCode::BAD_REQUEST,
        VaidyaError::NotFound(_) => StatusCode::NOT_FOUND,
        VaidyaError::Backend(_) | VaidyaError::Http(_) => StatusCode::BAD_GATEWAY,
        VaidyaError::Io(_) | VaidyaError::Json(_) | VaidyaError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
