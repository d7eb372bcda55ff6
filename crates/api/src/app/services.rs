use std::sync::Arc;

use selfcare_account::{
    CustomerAccount, CustomerSummary, PaymentMethod, TopupAmount, TransactionReceipt,
};
use selfcare_infra::{AccountDispatcher, DispatchError, InMemoryAccountStore};

type InMemoryDispatcher = AccountDispatcher<Arc<InMemoryAccountStore>>;

/// Everything the handlers need, shared across requests.
#[derive(Debug)]
pub struct AppServices {
    dispatcher: InMemoryDispatcher,
}

impl AppServices {
    /// Services backed by a fresh in-memory store holding the seed record.
    pub fn in_memory() -> Self {
        Self::with_account(CustomerAccount::seeded())
    }

    pub fn with_account(account: CustomerAccount) -> Self {
        Self {
            dispatcher: AccountDispatcher::new(Arc::new(InMemoryAccountStore::new(account))),
        }
    }

    pub fn summary(&self) -> Result<CustomerSummary, DispatchError> {
        self.dispatcher.summary()
    }

    pub fn top_up(
        &self,
        amount: TopupAmount,
        method: PaymentMethod,
    ) -> Result<TransactionReceipt, DispatchError> {
        self.dispatcher.top_up(amount, method)
    }

    pub fn buy_package(&self, package_code: &str) -> Result<TransactionReceipt, DispatchError> {
        self.dispatcher.buy_package(package_code)
    }
}
