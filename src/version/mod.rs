//! Version selection and install bookkeeping.
//!
//! The heart of nero: given the persisted record, a requested mode, and the
//! list of available versions, decide what to do. The decision logic is pure
//! (no filesystem, no network) so it can be tested with fixed inputs; the
//! CLI shell does all the I/O around it.

pub mod comparison;
pub mod manager;

pub use comparison::VersionComparator;
pub use manager::{Mode, Resolution, StatusReport, resolve};
