//! Infrastructure layer: account record storage and command execution.

pub mod account_store;
pub mod command_dispatcher;

pub use account_store::{AccountStore, AccountStoreError, InMemoryAccountStore};
pub use command_dispatcher::{AccountDispatcher, DispatchError};
