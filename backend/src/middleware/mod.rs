//! Request middleware.
//!
//! Purpose: request lifecycle concerns that cut across handlers, currently
//! trace identifier propagation.

pub mod trace;

pub use trace::Trace;
