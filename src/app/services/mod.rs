//! Services layer - business operations.
//!
//! - Preference and palette persistence
//! - File access through native dialogs
//! - Diagram compilation

pub mod diagrams;
pub mod files;
pub mod preferences;
