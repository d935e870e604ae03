//! Core types and error handling for nero.
//!
//! This module hosts the strongly-typed error enum used across the crate and
//! the user-facing error rendering that the CLI entry point applies before
//! exiting. See [`error`] for the full architecture.

pub mod error;

pub use error::{ErrorContext, NeroError, user_friendly_error};
