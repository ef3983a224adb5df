//! Domain layer - core data structures and types.
//!
//! - Preferences record
//! - Engine tags and dialog filters
//! - Save outcomes and loaded files
//! - Message types for the event system

pub mod engine;
pub mod messages;
pub mod outcome;
pub mod preferences;

pub use engine::{EngineTag, FileFilter};
pub use messages::Message;
pub use outcome::{LoadedFile, SaveOutcome};
pub use preferences::Preferences;
