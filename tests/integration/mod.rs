//! Integration test suite for nero
//!
//! End-to-end tests that drive the `nero` binary the way a user would,
//! pointing it at mock GitHub endpoints and a throwaway config directory
//! through environment variables.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **check**: `--check` status reporting
//! - **config_updates**: `--update-config` record mutations
//! - **download**: `--download-only` and download failures
//! - **dry_run**: `--dry-run` for install and rollback modes
//! - **errors**: Error scenarios and their exit codes
//! - **help**: Usage output and flag surface
//! - **list**: `--list-versions` output

// Shared test utilities
mod common;

// Integration tests
mod check;
mod download;
mod dry_run;
mod errors;
