//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod deposit_command;
mod deposit_store;
mod token_query;

#[cfg(test)]
pub use deposit_command::MockDepositCommand;
pub use deposit_command::{CreateDepositRequest, DepositCommand};
#[cfg(test)]
pub use deposit_store::MockDepositStore;
pub use deposit_store::{DepositStore, DepositStoreError};
#[cfg(test)]
pub use token_query::MockTokenQuery;
pub use token_query::TokenQuery;
