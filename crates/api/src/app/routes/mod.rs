use axum::{
    routing::{get, post},
    Router,
};

pub mod customer;
pub mod packages;
pub mod system;
pub mod topup;

/// Router for the portal endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .route("/customer/summary", get(customer::summary))
        .route("/topup", post(topup::topup))
        .route("/topup/options", get(topup::options))
        .route("/buy-package", post(packages::buy_package))
        .route("/packages", get(packages::list_packages))
}
