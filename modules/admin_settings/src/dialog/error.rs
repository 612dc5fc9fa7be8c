//! Dialog errors

use crate::contract::SettingsError;

/// Reasons a dialog action was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    #[error("dialog is not open for editing")]
    NotOpen,

    /// The save button is disabled while a save is in flight
    #[error("a save is already in progress")]
    SaveInProgress,

    #[error("Please enter a valid URL for the external program link")]
    InvalidUrl,

    #[error("Please enter a URL for the external program link, or disable it")]
    MissingUrl,

    /// The settings service refused the write
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
