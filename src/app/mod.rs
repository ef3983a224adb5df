//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Preferences, EngineTag, SaveOutcome, Messages)
//! - `services/` - Business operations (preferences, files, diagrams)
//! - `infrastructure/` - External integrations (d2, dialogs, detach, platform)
//! - `host.rs` - Startup sequencing and the bound operation surface
//! - `state.rs` - Native frontend coordinator

pub mod domain;
pub mod error;
pub mod file_filters;
pub mod host;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{EngineTag, LoadedFile, Message, Preferences, SaveOutcome};
pub use error::{AppError, Result};
pub use host::{Host, HostContext, Services};
pub use infrastructure::platform::{SystemTheme, detect_system_theme};
