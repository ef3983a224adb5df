use serde::{Deserialize, Serialize};

/// Persisted user preferences.
///
/// Written as a whole record; fields missing from an older file fall back to
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub active_theme_name: String,
}

impl Preferences {
    pub fn with_theme(name: impl Into<String>) -> Self {
        Self {
            active_theme_name: name.into(),
        }
    }
}
