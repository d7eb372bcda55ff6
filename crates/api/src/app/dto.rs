use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use selfcare_account::{
    AccountError, Package, PaymentMethod, RecentMovement, TopupAmount, TransactionReceipt,
    MAX_TOPUP_AMOUNT, MIN_TOPUP_AMOUNT, QUICK_AMOUNTS,
};

// -------------------------
// Request DTOs
// -------------------------

/// Top-up request. Fields stay untyped so wrong JSON types surface as the
/// matching validation error instead of a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct TopupRequest {
    pub amount: Option<JsonValue>,
    pub method: Option<JsonValue>,
}

impl TopupRequest {
    /// Validate in order: amount is a finite number, amount is in range,
    /// method is supported. The first failing check wins.
    pub fn validate(&self) -> Result<(TopupAmount, PaymentMethod), AccountError> {
        let raw = self
            .amount
            .as_ref()
            .and_then(JsonValue::as_f64)
            .ok_or(AccountError::InvalidAmount)?;
        let amount = TopupAmount::from_number(raw)?;

        let method = self
            .method
            .as_ref()
            .and_then(JsonValue::as_str)
            .ok_or(AccountError::InvalidMethod)?
            .parse::<PaymentMethod>()?;

        Ok((amount, method))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyPackageRequest {
    pub package_code: Option<JsonValue>,
}

impl BuyPackageRequest {
    /// Package code must be a non-empty string.
    pub fn validate(&self) -> Result<&str, AccountError> {
        self.package_code
            .as_ref()
            .and_then(JsonValue::as_str)
            .filter(|code| !code.is_empty())
            .ok_or(AccountError::MissingPackageCode)
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub ok: bool,
    pub receipt: RecentMovement,
    pub balance: i64,
}

impl From<TransactionReceipt> for TransactionResponse {
    fn from(out: TransactionReceipt) -> Self {
        Self {
            ok: true,
            receipt: out.receipt,
            balance: out.balance,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PackageView {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: i64,
}

impl From<&Package> for PackageView {
    fn from(p: &Package) -> Self {
        Self {
            code: p.code,
            name: p.name,
            description: p.description,
            price: p.price,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopupOptions {
    pub methods: Vec<PaymentMethod>,
    pub min_amount: i64,
    pub max_amount: i64,
    pub quick_amounts: Vec<i64>,
}

impl TopupOptions {
    pub fn current() -> Self {
        Self {
            methods: PaymentMethod::ALL.to_vec(),
            min_amount: MIN_TOPUP_AMOUNT,
            max_amount: MAX_TOPUP_AMOUNT,
            quick_amounts: QUICK_AMOUNTS.to_vec(),
        }
    }
}
