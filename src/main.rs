//! rtimer-update - Keep a source-installed rtimer current
//!
//! Pulls (or, with consent, resets) the local checkout to its upstream,
//! rebuilds the release binary and reinstalls it.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

use std::process::ExitCode;

use colored::Colorize;
use rtimer_update::UpdateError;

/// Main entry point for the rtimer-update CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            let typed = err.downcast_ref::<UpdateError>();
            if let Some(UpdateError::Build(_)) = typed {
                eprintln!("The checkout was updated; fix the build and run the update again.");
            }
            ExitCode::from(typed.map_or(1, UpdateError::exit_code))
        },
    }
}
