use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use selfcare_account::AccountError;
use selfcare_core::ErrorKind;
use selfcare_infra::DispatchError;

pub const UNEXPECTED_MESSAGE: &str = "Error inesperado";

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::BusinessRule => StatusCode::CONFLICT,
    }
}

pub fn account_error_to_response(err: &AccountError) -> axum::response::Response {
    json_error(status_for(err.kind()), err.code(), err.public_message())
}

pub fn dispatch_error_to_response(err: DispatchError) -> axum::response::Response {
    match err {
        DispatchError::Domain(e) => account_error_to_response(&e),
        DispatchError::Store(e) => {
            tracing::error!(error = %e, "account store unavailable");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "unexpected_error", UNEXPECTED_MESSAGE)
        }
    }
}

/// Body that could not be read as the expected JSON object.
pub fn body_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
