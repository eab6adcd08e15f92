//! Cross-cutting support code: error types and shutdown coordination.

pub mod errors;
pub mod shutdown;

pub use errors::DomainError;
pub use shutdown::{listen_for_shutdown_signals, ShutdownSignal};
