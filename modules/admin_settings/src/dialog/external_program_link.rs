//! External program link dialog
//!
//! Edits the `external_programs` setting through [`SettingsApi`]:
//!
//! ```text
//! Closed --open--> Loading --> Editing --save--> Saving --ok--> Closed(Committed)
//!                                 ^                 |
//!                                 +------err--------+
//! Editing/Saving --cancel--> Closed(Cancelled)
//! ```
//!
//! The dialog only checks that a link parses as an absolute URL. The
//! settings service applies the stricter http(s) check on save.

use super::error::DialogError;
use crate::contract::SettingsApi;
use crate::domain::validation::is_loosely_valid_link;
use crate::domain::{CatalogSetting, ExternalPrograms, Notification, Notifier};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

/// Why the dialog is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Not opened yet
    Never,
    Committed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed(CloseReason),
    Loading,
    Editing,
    Saving,
}

/// Unsaved edits, owned by one open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalProgramsDraft {
    pub enabled: bool,
    pub link: String,
    pub description: String,
    /// Result of the loose link check, recomputed on every link edit
    pub is_valid_url: bool,
}

impl ExternalProgramsDraft {
    /// Seed from a persisted value; the validity badge starts clean
    fn seeded(programs: ExternalPrograms) -> Self {
        Self {
            enabled: programs.enabled,
            link: programs.link,
            description: programs.description,
            is_valid_url: true,
        }
    }

    fn to_value(&self) -> Value {
        json!({
            "enabled": self.enabled,
            "link": self.link,
            "description": self.description,
        })
    }
}

struct Inner {
    state: DialogState,
    draft: Option<ExternalProgramsDraft>,
    /// Bumped on every open; completions from an older session are dropped
    session: u64,
}

/// Handle to one dialog instance
///
/// Clones share the same dialog, so a cancel from one handle is seen by a
/// save running on another.
#[derive(Clone)]
pub struct ExternalProgramLinkDialog {
    inner: Arc<Mutex<Inner>>,
    settings: Arc<dyn SettingsApi>,
    notifier: Arc<dyn Notifier>,
}

impl ExternalProgramLinkDialog {
    pub fn new(settings: Arc<dyn SettingsApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: DialogState::Closed(CloseReason::Never),
                draft: None,
                session: 0,
            })),
            settings,
            notifier,
        }
    }

    pub fn state(&self) -> DialogState {
        self.inner.lock().state
    }

    pub fn draft(&self) -> Option<ExternalProgramsDraft> {
        self.inner.lock().draft.clone()
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state(), DialogState::Closed(_))
    }

    /// Whether the save button is enabled
    pub fn can_save(&self) -> bool {
        self.state() == DialogState::Editing
    }

    /// Open the dialog and seed the draft from the persisted value
    pub async fn open(&self) {
        let session = {
            let mut inner = self.inner.lock();
            inner.session += 1;
            inner.state = DialogState::Loading;
            inner.draft = None;
            inner.session
        };

        let persisted = self.load_persisted().await;

        let mut inner = self.inner.lock();
        if inner.session != session || inner.state != DialogState::Loading {
            tracing::debug!(session, "dialog closed while loading");
            return;
        }
        inner.draft = Some(ExternalProgramsDraft::seeded(persisted));
        inner.state = DialogState::Editing;
        tracing::debug!(session, "external program link dialog open");
    }

    pub fn set_enabled(&self, enabled: bool) -> Result<(), DialogError> {
        self.edit(|draft| draft.enabled = enabled)
    }

    /// Update the link and recompute its validity badge
    pub fn set_link(&self, link: impl Into<String>) -> Result<(), DialogError> {
        let link = link.into();
        self.edit(|draft| {
            draft.is_valid_url = is_loosely_valid_link(&link);
            draft.link = link;
        })
    }

    pub fn set_description(&self, description: impl Into<String>) -> Result<(), DialogError> {
        let description = description.into();
        self.edit(|draft| draft.description = description)
    }

    /// Discard edits and reseed from the current persisted value
    pub async fn reset(&self) -> Result<(), DialogError> {
        let session = {
            let inner = self.inner.lock();
            Self::ensure_editing(&inner)?;
            inner.session
        };

        let persisted = self.load_persisted().await;

        let mut inner = self.inner.lock();
        if inner.session != session || inner.state != DialogState::Editing {
            tracing::debug!(session, "dialog left editing while resetting");
            return Ok(());
        }
        inner.draft = Some(ExternalProgramsDraft::seeded(persisted));
        Ok(())
    }

    /// Validate the draft locally, then persist it through the settings service
    ///
    /// On success the dialog closes. Local rejections and service failures
    /// keep it open for editing.
    pub async fn save(&self) -> Result<(), DialogError> {
        let (session, draft) = {
            let mut inner = self.inner.lock();
            Self::ensure_editing(&inner)?;
            let draft = inner.draft.clone().ok_or(DialogError::NotOpen)?;

            if draft.enabled && !draft.is_valid_url {
                drop(inner);
                return Err(self.reject(DialogError::InvalidUrl, "Invalid URL"));
            }
            if draft.enabled && draft.link.trim().is_empty() {
                drop(inner);
                return Err(self.reject(DialogError::MissingUrl, "Missing URL"));
            }

            inner.state = DialogState::Saving;
            (inner.session, draft)
        };

        let result = self
            .settings
            .update(ExternalPrograms::KEY.as_str(), draft.to_value())
            .await;

        let mut inner = self.inner.lock();
        if inner.session != session || inner.state != DialogState::Saving {
            // Closed or reopened mid-save: the write stands, local state is left alone
            tracing::debug!(session, ok = result.is_ok(), "save finished after dialog closed");
            return result.map_err(DialogError::from);
        }

        match result {
            Ok(()) => {
                inner.state = DialogState::Closed(CloseReason::Committed);
                inner.draft = None;
                drop(inner);
                self.notifier.notify(Notification::success(
                    "External program link updated",
                    "The Programs page now shows the saved link.",
                ));
                Ok(())
            }
            Err(e) => {
                inner.state = DialogState::Editing;
                drop(inner);
                tracing::warn!(error = %e, "external program link rejected by settings service");
                self.notifier.notify(Notification::error(
                    "Error",
                    "Failed to update external program link",
                ));
                Err(e.into())
            }
        }
    }

    /// Close without saving
    pub fn cancel(&self) {
        let mut inner = self.inner.lock();
        if matches!(inner.state, DialogState::Closed(_)) {
            return;
        }
        inner.state = DialogState::Closed(CloseReason::Cancelled);
        inner.draft = None;
        tracing::debug!(session = inner.session, "external program link dialog cancelled");
    }

    // ===== Helper Methods =====

    fn ensure_editing(inner: &Inner) -> Result<(), DialogError> {
        match inner.state {
            DialogState::Editing => Ok(()),
            DialogState::Saving => Err(DialogError::SaveInProgress),
            _ => Err(DialogError::NotOpen),
        }
    }

    fn edit(&self, f: impl FnOnce(&mut ExternalProgramsDraft)) -> Result<(), DialogError> {
        let mut inner = self.inner.lock();
        Self::ensure_editing(&inner)?;
        let draft = inner.draft.as_mut().ok_or(DialogError::NotOpen)?;
        f(draft);
        Ok(())
    }

    fn reject(&self, error: DialogError, title: &str) -> DialogError {
        self.notifier
            .notify(Notification::error(title, error.to_string()));
        error
    }

    async fn load_persisted(&self) -> ExternalPrograms {
        let Some(value) = self.settings.get(ExternalPrograms::KEY.as_str()).await else {
            return ExternalPrograms::default();
        };
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored external_programs has wrong shape, using default");
            ExternalPrograms::default()
        })
    }
}
