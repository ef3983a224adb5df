use std::path::{Path, PathBuf};

use serde::Serialize;

/// Result of a dialog-driven write.
///
/// Cancellation is a normal outcome, not an error. Write failures are
/// reported through `Err` by the caller instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "lowercase")]
pub enum SaveOutcome {
    Saved(PathBuf),
    Exported(PathBuf),
    Cancelled,
}

impl SaveOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SaveOutcome::Cancelled)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SaveOutcome::Saved(p) | SaveOutcome::Exported(p) => Some(p),
            SaveOutcome::Cancelled => None,
        }
    }

    /// Human-readable status line for display only. Never match on it.
    pub fn message(&self) -> String {
        match self {
            SaveOutcome::Saved(p) => format!("Saved to {}", p.display()),
            SaveOutcome::Exported(p) => format!("Exported to {}", p.display()),
            SaveOutcome::Cancelled => "Cancelled".to_string(),
        }
    }
}

/// A file picked through the open dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub content: String,
}
