//! Nero - InvokeAI installer manager
//!
//! A small CLI that fetches InvokeAI installer releases from GitHub, runs the
//! bundled installer, and keeps a persisted record of the current and previous
//! installed versions so an installation can be rolled back with one flag.
//!
//! # Architecture Overview
//!
//! Nero follows a record/resolver model where:
//! - A JSON record (`nero.json` under the platform config directory) tracks
//!   `current_version`, `previous_version`, and the last update time
//! - A pure resolver turns the record, the selected mode, and the list of
//!   available releases into a single decision (install, report, or no-op)
//! - Side effects (HTTP, filesystem, process launch) live at the edges
//!
//! # Core Modules
//!
//! - [`cli`] - Flag-driven command-line interface and orchestration
//! - [`config`] - The persisted install record with atomic writes
//! - [`core`] - Error types with exit codes and user-friendly display
//! - [`version`] - Semver comparison and the mode resolver
//! - [`release`] - GitHub release listing over the REST API
//! - [`installer`] - Download, archive extraction, and installer launch
//! - [`utils`] - Filesystem helpers shared across modules
//!
//! # Example
//!
//! ```no_run
//! use nero_cli::config::InstallRecord;
//! use nero_cli::version::{Mode, Resolution, resolve};
//!
//! let record = InstallRecord::default();
//! let available = vec!["5.6.0".to_string(), "5.7.0".to_string()];
//! match resolve(&record, &Mode::Latest, &available) {
//!     Ok(Resolution::Install { target }) => println!("installing {target}"),
//!     other => println!("{other:?}"),
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod installer;
pub mod release;
pub mod utils;
pub mod version;
