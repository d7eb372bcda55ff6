//! Top-up inputs: payment methods and amount policy.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccountError;

/// Smallest accepted top-up, inclusive.
pub const MIN_TOPUP_AMOUNT: i64 = 1_000;
/// Largest accepted top-up, inclusive.
pub const MAX_TOPUP_AMOUNT: i64 = 200_000;
/// Preset amounts offered by the top-up form.
pub const QUICK_AMOUNTS: [i64; 4] = [10_000, 20_000, 30_000, 50_000];

/// Simulated payment method used to fund a top-up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "PSE")]
    Pse,
    Tarjeta,
    Nequi,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Pse, PaymentMethod::Tarjeta, PaymentMethod::Nequi];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Pse => "PSE",
            PaymentMethod::Tarjeta => "Tarjeta",
            PaymentMethod::Nequi => "Nequi",
        }
    }

    /// Movement title recorded for a top-up paid with this method.
    pub fn movement_title(self) -> String {
        format!("Recarga {}", self.as_str())
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = AccountError;

    /// Matching is exact: `"pse"` is not a supported method.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or(AccountError::InvalidMethod)
    }
}

/// A validated top-up amount in whole currency units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TopupAmount(i64);

impl TopupAmount {
    /// Validate a raw JSON number.
    ///
    /// Checks run in order: finiteness, range, whole units.
    pub fn from_number(raw: f64) -> Result<Self, AccountError> {
        if !raw.is_finite() {
            return Err(AccountError::InvalidAmount);
        }
        if raw < MIN_TOPUP_AMOUNT as f64 || raw > MAX_TOPUP_AMOUNT as f64 {
            return Err(AccountError::AmountOutOfRange { amount: raw });
        }
        if raw.fract() != 0.0 {
            return Err(AccountError::InvalidAmount);
        }
        Ok(Self(raw as i64))
    }

    pub fn new(amount: i64) -> Result<Self, AccountError> {
        if !(MIN_TOPUP_AMOUNT..=MAX_TOPUP_AMOUNT).contains(&amount) {
            return Err(AccountError::AmountOutOfRange { amount: amount as f64 });
        }
        Ok(Self(amount))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_bounds_are_inclusive() {
        assert_eq!(TopupAmount::from_number(1000.0).unwrap().get(), 1000);
        assert_eq!(TopupAmount::from_number(200_000.0).unwrap().get(), 200_000);
    }

    #[test]
    fn amount_outside_bounds_is_out_of_range() {
        assert_eq!(
            TopupAmount::from_number(999.0),
            Err(AccountError::AmountOutOfRange { amount: 999.0 })
        );
        assert_eq!(
            TopupAmount::from_number(200_001.0),
            Err(AccountError::AmountOutOfRange { amount: 200_001.0 })
        );
        assert!(TopupAmount::new(0).is_err());
    }

    #[test]
    fn non_finite_amount_is_invalid() {
        for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(TopupAmount::from_number(raw), Err(AccountError::InvalidAmount));
        }
    }

    #[test]
    fn fractional_amount_is_invalid() {
        assert_eq!(TopupAmount::from_number(1500.5), Err(AccountError::InvalidAmount));
    }

    #[test]
    fn methods_parse_exactly() {
        assert_eq!("PSE".parse::<PaymentMethod>(), Ok(PaymentMethod::Pse));
        assert_eq!("Tarjeta".parse::<PaymentMethod>(), Ok(PaymentMethod::Tarjeta));
        assert_eq!("Nequi".parse::<PaymentMethod>(), Ok(PaymentMethod::Nequi));
        assert_eq!("pse".parse::<PaymentMethod>(), Err(AccountError::InvalidMethod));
        assert_eq!("Efectivo".parse::<PaymentMethod>(), Err(AccountError::InvalidMethod));
    }

    #[test]
    fn method_serializes_with_portal_spelling() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Pse).unwrap(), "\"PSE\"");
        assert_eq!(PaymentMethod::Nequi.movement_title(), "Recarga Nequi");
    }
}
