//! In-process adapters backed by standard library collections.

mod deposit_store;

pub use deposit_store::InMemoryDepositStore;
