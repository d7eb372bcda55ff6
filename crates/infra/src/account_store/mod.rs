//! Account record store boundary.
//!
//! The store owns the single customer record and hands out independent
//! snapshots for reads. Mutations run as closures under the store's write
//! guard, so each read-modify-write happens as one step.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryAccountStore;
pub use r#trait::{AccountStore, AccountStoreError};
