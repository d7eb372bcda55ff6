//! Typed HTTP client for the self-service portal API.
//!
//! # Error bodies
//!
//! Failed requests answer with a JSON object of two string fields:
//!
//! ```json
//! {"error": "insufficient_balance", "message": "Saldo insuficiente"}
//! ```
//!
//! `error` is a stable machine code (`invalid_amount`, `amount_out_of_range`,
//! `invalid_method`, `missing_package_code`, `invalid_body`,
//! `package_not_found`, `insufficient_balance`, `unexpected_error`) and
//! `message` is the human-readable text (Spanish portal copy for domain
//! failures). Callers that only read `error` as display text get the code,
//! not the copy. [`ClientError::Api`] carries `message` when it is present and
//! non-empty, then `error`, then `HTTP <status>`.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use selfcare_account::{CustomerSummary, PaymentMethod, RecentMovement};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable success body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("{message} (status {status})")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http(e) => e.status(),
            ClientError::Api { status, .. } => Some(*status),
        }
    }
}

/// Successful transaction as returned by top-up and package purchase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transaction {
    pub ok: bool,
    pub receipt: RecentMovement,
    pub balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageListing {
    pub code: String,
    pub name: String,
    pub description: String,
    pub price: i64,
}

#[derive(Debug, Deserialize)]
struct PackageList {
    items: Vec<PackageListing>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct TopupBody<'a> {
    amount: i64,
    method: &'a str,
}

#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    http: reqwest::Client,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn summary(&self) -> Result<CustomerSummary, ClientError> {
        let res = self.http.get(self.url("/api/customer/summary")).send().await?;
        parse_json(res).await
    }

    pub async fn topup(&self, amount: i64, method: PaymentMethod) -> Result<Transaction, ClientError> {
        let res = self
            .http
            .post(self.url("/api/topup"))
            .json(&TopupBody {
                amount,
                method: method.as_str(),
            })
            .send()
            .await?;
        parse_json(res).await
    }

    pub async fn buy_package(&self, package_code: &str) -> Result<Transaction, ClientError> {
        let res = self
            .http
            .post(self.url("/api/buy-package"))
            .json(&json!({ "packageCode": package_code }))
            .send()
            .await?;
        parse_json(res).await
    }

    pub async fn packages(&self) -> Result<Vec<PackageListing>, ClientError> {
        let res = self.http.get(self.url("/api/packages")).send().await?;
        Ok(parse_json::<PackageList>(res).await?.items)
    }
}

async fn parse_json<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json().await?);
    }

    let body = res.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status,
        message: error_message(status, &body),
    })
}

/// Best-effort message extraction from an error body.
fn error_message(status: StatusCode, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .message
        .filter(|m| !m.is_empty())
        .or(parsed.error.filter(|m| !m.is_empty()))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
