//! Domain layer - catalog, validation and the settings service

pub mod catalog;
pub mod events;
pub mod repository;
pub mod service;
pub mod validation;

pub use catalog::{
    CatalogSetting, ContentModeration, EnrollmentAutoApproval, ExternalPrograms,
    ParentChildRequests, SecurityLimits, SettingKey, WorkUploadNotifications,
};
pub use events::{NoOpNotifier, Notification, Notifier, Variant};
pub use repository::SettingsRepository;
pub use service::Service;
