//! Typed errors surfaced to the host through the plugin interface.

use thiserror::Error;

/// Validation failure for a submitted preferences form. Nothing is written
/// to the preference store when any field fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefsValidationError {
    /// Alias field slot outside 1..=10.
    #[error("alias field number {0} is out of range (valid slots are 1..=10)")]
    FieldOutOfRange(u8),
    /// Redirect type must be "0" (temporary) or "1" (permanent).
    #[error("invalid redirect type value {0:?} (expected \"0\" or \"1\")")]
    InvalidRedirectType(String),
    /// Validity-hint flag must be "0" or "1".
    #[error("invalid validity-hint value {0:?} (expected \"0\" or \"1\")")]
    InvalidValidityHint(String),
}

/// Error returned by the preferences-save operation: either the form was
/// invalid, or the preference store itself failed.
#[derive(Debug, Error)]
pub enum PrefsSaveError {
    #[error(transparent)]
    Invalid(#[from] PrefsValidationError),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
