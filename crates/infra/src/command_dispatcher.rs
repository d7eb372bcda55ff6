//! Command execution pipeline for the customer account.
//!
//! ```text
//! Command
//!   ↓
//! 1. Take exclusive access to the stored account
//!   ↓
//! 2. Decide (pure; rejects leave the account untouched)
//!   ↓
//! 3. Apply the resulting event (balance + movement list)
//!   ↓
//! 4. Release and return the receipt
//! ```
//!
//! Validation of raw request payloads happens before a command is built, so a
//! command that reaches the dispatcher only fails on catalog or balance rules,
//! or when the store itself is unusable.

use thiserror::Error;

use selfcare_account::{
    AccountCommand, AccountError, BuyPackage, CustomerSummary, PaymentMethod, TopUp, TopupAmount,
    TransactionReceipt,
};
use selfcare_core::ErrorKind;

use crate::account_store::{AccountStore, AccountStoreError};

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Deterministic domain rejection.
    #[error(transparent)]
    Domain(#[from] AccountError),
    /// The store could not be used.
    #[error("store error: {0}")]
    Store(#[from] AccountStoreError),
}

impl DispatchError {
    /// Domain category, or `None` for failures outside the domain.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            DispatchError::Domain(e) => Some(e.kind()),
            DispatchError::Store(_) => None,
        }
    }
}

/// Runs account commands against an [`AccountStore`].
#[derive(Debug)]
pub struct AccountDispatcher<S> {
    store: S,
}

impl<S> AccountDispatcher<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S> AccountDispatcher<S>
where
    S: AccountStore,
{
    /// Current account snapshot.
    pub fn summary(&self) -> Result<CustomerSummary, DispatchError> {
        Ok(self.store.snapshot()?)
    }

    /// Execute a command as a single read-modify-write on the stored account.
    pub fn dispatch(&self, command: AccountCommand) -> Result<TransactionReceipt, DispatchError> {
        let outcome = self.store.update(|account| account.transact(&command))?;

        match &outcome {
            Ok(out) => tracing::info!(
                command = command_name(&command),
                movement_id = %out.receipt.id,
                amount = out.receipt.amount,
                balance = out.balance,
                "account transaction accepted"
            ),
            Err(e) => tracing::warn!(
                command = command_name(&command),
                code = e.code(),
                kind = %e.kind(),
                "account transaction rejected: {e}"
            ),
        }

        outcome.map_err(DispatchError::from)
    }

    pub fn top_up(
        &self,
        amount: TopupAmount,
        method: PaymentMethod,
    ) -> Result<TransactionReceipt, DispatchError> {
        self.dispatch(AccountCommand::TopUp(TopUp::now(amount, method)))
    }

    pub fn buy_package(&self, package_code: &str) -> Result<TransactionReceipt, DispatchError> {
        self.dispatch(AccountCommand::BuyPackage(BuyPackage::now(package_code)))
    }
}

fn command_name(command: &AccountCommand) -> &'static str {
    match command {
        AccountCommand::TopUp(_) => "top_up",
        AccountCommand::BuyPackage(_) => "buy_package",
    }
}
