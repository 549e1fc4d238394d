//! Outbound adapters implementing domain ports for driven infrastructure.
//!
//! - **memory**: process-local deposit store; state is lost on restart.
//!
//! Adapters translate between domain types and their backing representation
//! and contain no business logic.

pub mod memory;
