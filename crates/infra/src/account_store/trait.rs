use std::sync::Arc;

use thiserror::Error;

use selfcare_account::{CustomerAccount, CustomerSummary};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountStoreError {
    /// A previous mutation panicked while holding the record.
    #[error("account record lock poisoned")]
    Poisoned,
}

/// Storage for the customer account record.
pub trait AccountStore: Send + Sync {
    /// Independent copy of the current summary.
    fn snapshot(&self) -> Result<CustomerSummary, AccountStoreError>;

    /// Run `f` against the stored account with exclusive access.
    ///
    /// Nothing else reads or writes the record while `f` runs.
    fn update<R, F>(&self, f: F) -> Result<R, AccountStoreError>
    where
        F: FnOnce(&mut CustomerAccount) -> R;
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore,
{
    fn snapshot(&self) -> Result<CustomerSummary, AccountStoreError> {
        (**self).snapshot()
    }

    fn update<R, F>(&self, f: F) -> Result<R, AccountStoreError>
    where
        F: FnOnce(&mut CustomerAccount) -> R,
    {
        (**self).update(f)
    }
}
