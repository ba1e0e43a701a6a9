//! Abort Sentinels
//!
//! The two clean-abort paths of the installer. These are carried through
//! `anyhow` like any other error but are recognized at the top level so
//! a declined prompt or an interrupt is reported as a cancellation, not
//! a failure.

use thiserror::Error;

/// A deliberate end to the installation, as opposed to a failed step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Abort {
    /// The user declined a prompt that gates the rest of the run.
    #[error("installation cancelled by user")]
    Cancelled,
    /// An interrupt signal arrived, either between steps or inside a prompt.
    #[error("installation interrupted")]
    Interrupted,
}
