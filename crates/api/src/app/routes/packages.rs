use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use selfcare_account::CATALOG;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn buy_package(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::BuyPackageRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };

    let code = match body.validate() {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!(code = e.code(), "package request rejected: {e}");
            return errors::account_error_to_response(&e);
        }
    };

    match services.buy_package(code) {
        Ok(out) => (StatusCode::OK, Json(dto::TransactionResponse::from(out))).into_response(),
        Err(e) => errors::dispatch_error_to_response(e),
    }
}

pub async fn list_packages() -> axum::response::Response {
    let items = CATALOG.iter().map(dto::PackageView::from).collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
