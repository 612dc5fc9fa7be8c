//! Admin Settings Module
//!
//! Typed settings catalog for the admin console: schema defaults, update-time
//! validation, persistence through the local cache, and the external program
//! link dialog that edits the `external_programs` setting.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsApi, error::SettingsError, CatalogChange, Setting,
    PERSISTENCE_FAILED_MESSAGE,
};

pub mod dialog;
pub use dialog::{DialogError, DialogState, ExternalProgramLinkDialog};

pub mod module;
pub use module::AdminSettingsModule;

pub mod config;
pub use config::Config;

pub mod domain;
pub use domain::{Notification, Notifier, SettingKey, Variant};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod infra;
