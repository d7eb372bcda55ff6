//! Account error model.

use selfcare_core::ErrorKind;
use thiserror::Error;

/// Deterministic failure of an account request or transaction.
///
/// Every variant is raised before any state change, so a failed request leaves
/// the account untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountError {
    /// The top-up amount is missing, not a number, not finite, or fractional.
    #[error("amount must be a finite number of whole currency units")]
    InvalidAmount,

    /// The top-up amount falls outside the accepted range.
    #[error("amount {amount} outside accepted range")]
    AmountOutOfRange { amount: f64 },

    /// The payment method is not one of the supported methods.
    #[error("unsupported payment method")]
    InvalidMethod,

    /// A package purchase was requested without a package code.
    #[error("package code is required")]
    MissingPackageCode,

    /// The package code does not exist in the catalog.
    #[error("package not found: {code}")]
    PackageNotFound { code: String },

    /// The balance does not cover the package price.
    #[error("insufficient balance: {balance} < {price}")]
    InsufficientBalance { balance: i64, price: i64 },
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::InvalidAmount
            | AccountError::AmountOutOfRange { .. }
            | AccountError::InvalidMethod
            | AccountError::MissingPackageCode => ErrorKind::Validation,
            AccountError::PackageNotFound { .. } => ErrorKind::NotFound,
            AccountError::InsufficientBalance { .. } => ErrorKind::BusinessRule,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            AccountError::InvalidAmount => "invalid_amount",
            AccountError::AmountOutOfRange { .. } => "amount_out_of_range",
            AccountError::InvalidMethod => "invalid_method",
            AccountError::MissingPackageCode => "missing_package_code",
            AccountError::PackageNotFound { .. } => "package_not_found",
            AccountError::InsufficientBalance { .. } => "insufficient_balance",
        }
    }

    /// Customer-facing message (portal copy).
    pub fn public_message(&self) -> &'static str {
        match self {
            AccountError::InvalidAmount => "Monto invalido",
            AccountError::AmountOutOfRange { .. } => "Monto fuera de rango",
            AccountError::InvalidMethod => "Metodo de pago invalido",
            AccountError::MissingPackageCode => "packageCode requerido",
            AccountError::PackageNotFound { .. } => "Paquete no encontrado",
            AccountError::InsufficientBalance { .. } => "Saldo insuficiente",
        }
    }
}
