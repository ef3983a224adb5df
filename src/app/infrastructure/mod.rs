//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - d2 compiler process
//! - Native file dialogs
//! - Process detachment
//! - Platform-specific detection

pub mod d2;
pub mod detach;
pub mod dialogs;
pub mod platform;
