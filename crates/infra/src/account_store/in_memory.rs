use std::sync::RwLock;

use selfcare_account::{CustomerAccount, CustomerSummary};

use super::r#trait::{AccountStore, AccountStoreError};

/// Process-local account store. Contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryAccountStore {
    account: RwLock<CustomerAccount>,
}

impl InMemoryAccountStore {
    pub fn new(account: CustomerAccount) -> Self {
        Self {
            account: RwLock::new(account),
        }
    }

    /// Store holding the demo seed record.
    pub fn seeded() -> Self {
        Self::new(CustomerAccount::seeded())
    }
}

impl AccountStore for InMemoryAccountStore {
    fn snapshot(&self) -> Result<CustomerSummary, AccountStoreError> {
        let account = self.account.read().map_err(|_| AccountStoreError::Poisoned)?;
        Ok(account.snapshot())
    }

    fn update<R, F>(&self, f: F) -> Result<R, AccountStoreError>
    where
        F: FnOnce(&mut CustomerAccount) -> R,
    {
        let mut account = self.account.write().map_err(|_| AccountStoreError::Poisoned)?;
        Ok(f(&mut account))
    }
}
