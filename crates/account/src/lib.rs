//! Customer account domain module.
//!
//! Business rules for the self-service portal: the customer summary record,
//! balance top-ups and add-on package purchases. Implemented as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod account;
pub mod catalog;
pub mod error;
pub mod payment;
pub mod seed;
pub mod summary;

pub use account::{
    AccountCommand, AccountEvent, BuyPackage, CustomerAccount, TopUp, TransactionReceipt,
};
pub use catalog::{Package, CATALOG};
pub use error::AccountError;
pub use payment::{PaymentMethod, TopupAmount, MAX_TOPUP_AMOUNT, MIN_TOPUP_AMOUNT, QUICK_AMOUNTS};
pub use summary::{CustomerLine, CustomerSummary, LineStatus, RecentMovement, MAX_RECENT_MOVEMENTS};
