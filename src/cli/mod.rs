//! Command-line interface for nero.
//!
//! A single flat, flag-driven command: the flags select a mode (check,
//! rollback, config update, list, explicit version, latest, or the
//! interactive default) and a couple of orthogonal qualifiers (`--dry-run`,
//! `--download-only`, `--keep`, `--download-dir`). The shell here resolves
//! the mode, fetches the release list when the mode needs one, hands the
//! decision to [`crate::version::resolve`], and then drives the
//! collaborators: downloader, installer, record store.
//!
//! # Examples
//!
//! ```bash
//! nero --latest                    # upgrade to the newest release
//! nero --version 5.6.0             # pin an exact release
//! nero --rollback                  # reinstall the previous release
//! nero --check                     # show current/previous/latest
//! nero --latest --dry-run          # show what would happen, touch nothing
//! nero --version 5.7.0 --download-only --download-dir ~/Downloads
//! ```

pub mod prompt;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::config::InstallRecord;
use crate::core::NeroError;
use crate::installer::{self, Downloader, resolve_download_dir};
use crate::release::ReleaseClient;
use crate::version::{Mode, Resolution, StatusReport, VersionComparator, resolve};
use prompt::{Prompt, UpdateChoice};

/// Main CLI surface for nero.
///
/// clap's automatic `--version` flag is disabled because `--version` here
/// names the release to install, matching the tool's historical interface.
#[derive(Parser, Debug)]
#[command(
    name = "nero",
    about = "Fetch, install, and roll back InvokeAI installer releases",
    disable_version_flag = true
)]
pub struct Cli {
    /// Perform a dry run without making any changes.
    #[arg(long)]
    pub dry_run: bool,

    /// Only download the installer without running it.
    #[arg(long)]
    pub download_only: bool,

    /// Install the latest available version without prompting.
    #[arg(long)]
    pub latest: bool,

    /// Specify a version to download and install.
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Rollback to the previous version.
    #[arg(long)]
    pub rollback: bool,

    /// Keep the downloaded file after installation.
    #[arg(long)]
    pub keep: bool,

    /// List available versions.
    #[arg(long)]
    pub list_versions: bool,

    /// Directory to save downloads into.
    #[arg(long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Display the current record and check for updates.
    #[arg(long)]
    pub check: bool,

    /// Only update the record with the current or specified version.
    #[arg(long)]
    pub update_config: bool,

    /// Enable verbose (debug) output.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Log filter directive derived from `--verbose`/`--quiet`.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Execute the command.
    pub async fn execute(self, prompt: &dyn Prompt) -> Result<()> {
        let mut record = InstallRecord::load().await?;

        if self.list_versions {
            return list_versions().await;
        }

        let mode = match self.resolve_mode(&record, prompt).await? {
            Some(mode) => mode,
            None => {
                println!("{}", "No action taken.".yellow());
                return Ok(());
            }
        };
        debug!("resolved mode: {mode:?}");

        let available = if needs_release_list(&mode) {
            print_step("Checking available releases");
            ReleaseClient::new()?.list_versions().await?
        } else {
            Vec::new()
        };

        match resolve(&record, &mode, &available)? {
            Resolution::Report(report) => {
                print_report(&record, &report);
                Ok(())
            }
            Resolution::UpToDate { current } => {
                println!(
                    "{}",
                    format!("Already up to date (version {current})").green()
                );
                Ok(())
            }
            Resolution::RecordOnly { version } => {
                if self.dry_run {
                    println!(
                        "{}",
                        format!("[DRY RUN] Would record version {version}").yellow()
                    );
                    return Ok(());
                }
                record.record_install(&version);
                record.save().await?;
                println!("{}", "Configuration updated successfully".green());
                Ok(())
            }
            Resolution::Install { target } => self.install(&mut record, &target).await,
        }
    }

    /// Map flags to a [`Mode`], falling back to the interactive flow.
    ///
    /// Returns `None` when the user cancelled.
    async fn resolve_mode(
        &self,
        record: &InstallRecord,
        prompt: &dyn Prompt,
    ) -> Result<Option<Mode>> {
        if self.check {
            return Ok(Some(Mode::Check));
        }
        if self.rollback {
            return Ok(Some(Mode::Rollback));
        }
        if self.update_config {
            return Ok(Some(Mode::ConfigOnly(self.version.clone())));
        }
        if let Some(version) = &self.version {
            return Ok(Some(Mode::Explicit(version.clone())));
        }
        if self.latest {
            return Ok(Some(Mode::Latest));
        }
        interactive_mode(record, prompt).await
    }

    async fn install(&self, record: &mut InstallRecord, target: &str) -> Result<()> {
        let download_dir = resolve_download_dir(self.download_dir.as_deref(), record);

        if self.dry_run {
            let planned = installer::planned_archive_path(target, &download_dir);
            println!(
                "{}",
                format!("[DRY RUN] Would download version {target} to {}", planned.display())
                    .yellow()
            );
            if !self.download_only {
                println!("{}", "[DRY RUN] Would run the installer".yellow());
                println!(
                    "{}",
                    format!("[DRY RUN] Would record version {target}").yellow()
                );
            }
            return Ok(());
        }

        print_step(&format!("Downloading InvokeAI version {target}"));
        let archive = Downloader::new()?.fetch(target, &download_dir).await?;

        if self.download_only {
            println!("{}", format!("File saved to: {}", archive.display()).green());
            return Ok(());
        }

        print_step("Running the installer");
        let install_result = installer::run_installer(&archive).await;

        match install_result {
            Ok(()) => {
                // Mutate the record only after the installer succeeded
                record.record_install(target);
                record.save().await?;

                print_step("Cleaning up");
                installer::cleanup_archive(&archive, self.keep).await;

                println!("{}", "Installation completed successfully".green());
                Ok(())
            }
            Err(e) => {
                print_step("Cleaning up");
                installer::cleanup_archive(&archive, self.keep).await;
                Err(e)
            }
        }
    }
}

/// Interactive default flow: compare current against latest and ask.
async fn interactive_mode(record: &InstallRecord, prompt: &dyn Prompt) -> Result<Option<Mode>> {
    print_step("Checking for the latest version");
    let latest = ReleaseClient::new()?.latest_version().await?;

    let Some(current) = &record.current_version else {
        println!("{}", "No version currently installed.".yellow());
        let install = prompt.confirm(&format!(
            "No current version found. Do you want to install the latest version ({latest})?"
        ))?;
        return Ok(install.then_some(Mode::Latest));
    };

    println!("{} {current}", "Current version:".bold());
    println!("{} {latest}", "Latest version available:".bold());

    if VersionComparator::same(current, &latest) {
        println!("{}", "You have the latest version installed.".green());
        return Ok(None);
    }

    match prompt.update_choice()? {
        UpdateChoice::Upgrade => Ok(Some(Mode::Latest)),
        UpdateChoice::Downgrade => {
            let version = prompt.ask_version("Enter the version you want to downgrade to")?;
            Ok(version.map(Mode::Explicit))
        }
        UpdateChoice::Cancel => Ok(None),
    }
}

async fn list_versions() -> Result<()> {
    print_step("Available versions");
    let versions = ReleaseClient::new()?.list_versions().await?;
    if versions.is_empty() {
        return Err(NeroError::NoReleasesAvailable {
            owner: crate::constants::REPO_OWNER.to_string(),
            repo: crate::constants::REPO_NAME.to_string(),
        }
        .into());
    }
    for version in versions {
        println!("{version}");
    }
    Ok(())
}

fn needs_release_list(mode: &Mode) -> bool {
    match mode {
        Mode::Latest | Mode::Explicit(_) | Mode::Check => true,
        Mode::ConfigOnly(version) => version.is_none(),
        Mode::Rollback => false,
    }
}

fn print_step(message: &str) {
    println!("\n{}", format!("/// {message} ///").yellow());
}

fn print_report(record: &InstallRecord, report: &StatusReport) {
    print_step("Current configuration");
    let none = "none".to_string();
    println!(
        "{} {}",
        "current version: ".bold(),
        report.current.as_ref().unwrap_or(&none)
    );
    println!(
        "{} {}",
        "previous version:".bold(),
        report.previous.as_ref().unwrap_or(&none)
    );
    println!(
        "{} {}",
        "latest available:".bold(),
        report.latest.as_ref().unwrap_or(&none)
    );
    if let Some(last_update) = &record.last_update {
        println!("{} {}", "last update:     ".bold(), last_update.to_rfc3339());
    }

    match (&report.current, &report.latest) {
        (Some(current), Some(latest)) if !VersionComparator::same(current, latest) => {
            println!(
                "\n{}",
                format!("Update available: {current} -> {latest}").green()
            );
        }
        (Some(_), Some(_)) => {
            println!("\n{}", "You have the latest version installed.".green());
        }
        _ => {}
    }
}
