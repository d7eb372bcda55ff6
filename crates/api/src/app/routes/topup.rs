use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn topup(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::TopupRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };

    let (amount, method) = match body.validate() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(code = e.code(), "top-up request rejected: {e}");
            return errors::account_error_to_response(&e);
        }
    };

    match services.top_up(amount, method) {
        Ok(out) => (StatusCode::OK, Json(dto::TransactionResponse::from(out))).into_response(),
        Err(e) => errors::dispatch_error_to_response(e),
    }
}

pub async fn options() -> Json<dto::TopupOptions> {
    Json(dto::TopupOptions::current())
}
