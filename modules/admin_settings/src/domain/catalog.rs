//! Fixed settings catalog: keys, descriptions and typed payloads
//!
//! Each payload's `Default` impl is the catalog default, so defaults are
//! rebuilt from code on every read and never persisted implicitly.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Keys of the settings catalog, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    EnrollmentAutoApproval,
    WorkUploadNotifications,
    ParentChildRequests,
    SecurityLimits,
    ContentModeration,
    ExternalPrograms,
}

impl SettingKey {
    /// All catalog keys in display order
    pub const ALL: [SettingKey; 6] = [
        SettingKey::EnrollmentAutoApproval,
        SettingKey::WorkUploadNotifications,
        SettingKey::ParentChildRequests,
        SettingKey::SecurityLimits,
        SettingKey::ContentModeration,
        SettingKey::ExternalPrograms,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnrollmentAutoApproval => "enrollment_auto_approval",
            Self::WorkUploadNotifications => "work_upload_notifications",
            Self::ParentChildRequests => "parent_child_requests",
            Self::SecurityLimits => "security_limits",
            Self::ContentModeration => "content_moderation",
            Self::ExternalPrograms => "external_programs",
        }
    }

    /// Resolve a raw key, `None` for keys outside the catalog
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::EnrollmentAutoApproval => {
                "Automatically approve program enrollment requests"
            }
            Self::WorkUploadNotifications => {
                "Notifications sent when new work is uploaded for a child"
            }
            Self::ParentChildRequests => "How parent-child association requests are handled",
            Self::SecurityLimits => "Account, upload and session limits",
            Self::ContentModeration => "Moderation rules for uploaded content",
            Self::ExternalPrograms => "External program registration link shown on the Programs page",
        }
    }

    /// Schema default, built fresh on every call
    pub fn default_value(&self) -> Value {
        match self {
            Self::EnrollmentAutoApproval => to_value(EnrollmentAutoApproval::default()),
            Self::WorkUploadNotifications => to_value(WorkUploadNotifications::default()),
            Self::ParentChildRequests => to_value(ParentChildRequests::default()),
            Self::SecurityLimits => to_value(SecurityLimits::default()),
            Self::ContentModeration => to_value(ContentModeration::default()),
            Self::ExternalPrograms => to_value(ExternalPrograms::default()),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Plain structs of bools, ints and strings always serialize.
fn to_value<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Typed payload bound to a catalog key
pub trait CatalogSetting: Serialize + DeserializeOwned + Default + Send {
    const KEY: SettingKey;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentAutoApproval {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkUploadNotifications {
    pub enabled: bool,
    pub notify_admins: bool,
    pub notify_parents: bool,
}

impl Default for WorkUploadNotifications {
    fn default() -> Self {
        Self {
            enabled: true,
            notify_admins: true,
            notify_parents: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentChildRequests {
    pub require_admin_approval: bool,
    pub auto_notify_admins: bool,
    pub allow_self_association: bool,
}

impl Default for ParentChildRequests {
    fn default() -> Self {
        Self {
            require_admin_approval: true,
            auto_notify_admins: true,
            allow_self_association: false,
        }
    }
}

/// Account and session limits; the bounded fields are checked on update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityLimits {
    /// 1..=20
    pub max_children_per_parent: i64,
    /// 10..=500
    pub max_work_items_per_child: i64,
    pub max_programs_per_season: i64,
    pub session_timeout_hours: i64,
    /// 3..=10
    pub max_login_attempts: i64,
    /// 6..=50
    pub password_min_length: i64,
    pub require_email_verification: bool,
    pub enforce_strong_passwords: bool,
}

impl Default for SecurityLimits {
    fn default() -> Self {
        Self {
            max_children_per_parent: 5,
            max_work_items_per_child: 100,
            max_programs_per_season: 3,
            session_timeout_hours: 24,
            max_login_attempts: 5,
            password_min_length: 8,
            require_email_verification: true,
            enforce_strong_passwords: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentModeration {
    pub require_approval_for_work: bool,
    pub auto_scan_uploaded_content: bool,
    pub blocked_file_types: Vec<String>,
    pub max_file_size_mb: i64,
}

impl Default for ContentModeration {
    fn default() -> Self {
        Self {
            require_approval_for_work: false,
            auto_scan_uploaded_content: true,
            blocked_file_types: ["exe", "bat", "cmd", "sh", "js"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_file_size_mb: 10,
        }
    }
}

/// External program registration link
///
/// Missing fields decode as their defaults so partially written payloads
/// still resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalPrograms {
    pub enabled: bool,
    /// Absolute http(s) URL, or empty
    pub link: String,
    pub description: String,
}

impl ExternalPrograms {
    /// Trimmed link when the program is enabled and a link is set
    pub fn active_link(&self) -> Option<&str> {
        let link = self.link.trim();
        (self.enabled && !link.is_empty()).then_some(link)
    }
}

impl CatalogSetting for EnrollmentAutoApproval {
    const KEY: SettingKey = SettingKey::EnrollmentAutoApproval;
}

impl CatalogSetting for WorkUploadNotifications {
    const KEY: SettingKey = SettingKey::WorkUploadNotifications;
}

impl CatalogSetting for ParentChildRequests {
    const KEY: SettingKey = SettingKey::ParentChildRequests;
}

impl CatalogSetting for SecurityLimits {
    const KEY: SettingKey = SettingKey::SecurityLimits;
}

impl CatalogSetting for ContentModeration {
    const KEY: SettingKey = SettingKey::ContentModeration;
}

impl CatalogSetting for ExternalPrograms {
    const KEY: SettingKey = SettingKey::ExternalPrograms;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_round_trips_every_key() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SettingKey::parse("maintenance_mode"), None);
        assert_eq!(SettingKey::parse(""), None);
    }

    #[test]
    fn test_default_values_match_documented_shapes() {
        assert_eq!(
            SettingKey::EnrollmentAutoApproval.default_value(),
            json!({"enabled": false})
        );
        assert_eq!(
            SettingKey::ExternalPrograms.default_value(),
            json!({"enabled": false, "link": "", "description": ""})
        );
        assert_eq!(
            SettingKey::SecurityLimits.default_value()["max_children_per_parent"],
            json!(5)
        );
        assert_eq!(
            SettingKey::ContentModeration.default_value()["blocked_file_types"],
            json!(["exe", "bat", "cmd", "sh", "js"])
        );
    }

    #[test]
    fn test_external_programs_partial_payload_uses_defaults() {
        let value: ExternalPrograms =
            serde_json::from_value(json!({"enabled": true})).unwrap();
        assert!(value.enabled);
        assert_eq!(value.link, "");
        assert_eq!(value.description, "");
    }

    #[test]
    fn test_active_link() {
        let mut programs = ExternalPrograms {
            enabled: true,
            link: "  https://example.com/programs ".to_string(),
            description: String::new(),
        };
        assert_eq!(programs.active_link(), Some("https://example.com/programs"));

        programs.enabled = false;
        assert_eq!(programs.active_link(), None);

        programs.enabled = true;
        programs.link = "   ".to_string();
        assert_eq!(programs.active_link(), None);
    }
}
