//! Native file dialogs.
//!
//! `FileDialogs` is the seam between the file gateway and the GUI toolkit.
//! The FLTK implementation must only be created after `fltk::app::App` is
//! initialized, which is why it arrives through the startup `HostContext`.

use std::path::PathBuf;

use fltk::dialog::{FileDialogType, NativeFileChooser, NativeFileChooserOptions};

use crate::app::domain::FileFilter;
use crate::app::error::{AppError, Result};
use crate::app::file_filters::fltk_filter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDialogOptions {
    pub title: String,
    pub filters: Vec<FileFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDialogOptions {
    pub title: String,
    pub default_filename: String,
    pub filters: Vec<FileFilter>,
}

/// Blocking native dialogs. `Ok(None)` means the user cancelled.
pub trait FileDialogs {
    fn open_file(&self, options: &OpenDialogOptions) -> Result<Option<PathBuf>>;
    fn save_file(&self, options: &SaveDialogOptions) -> Result<Option<PathBuf>>;
}

#[derive(Debug, Default)]
pub struct FltkDialogs;

impl FltkDialogs {
    pub fn new() -> Self {
        Self
    }

    fn run(mut chooser: NativeFileChooser) -> Result<Option<PathBuf>> {
        chooser.show(); // blocks until close
        if let Some(msg) = chooser.error_message() {
            // FLTK reports a plain cancel through the same channel
            if !msg.is_empty() && !msg.eq_ignore_ascii_case("no error") {
                return Err(AppError::Dialog(msg));
            }
        }
        let filename = chooser.filename();
        if filename.as_os_str().is_empty() {
            Ok(None)
        } else {
            Ok(Some(filename))
        }
    }
}

impl FileDialogs for FltkDialogs {
    fn open_file(&self, options: &OpenDialogOptions) -> Result<Option<PathBuf>> {
        let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
        nfc.set_title(&options.title);
        nfc.set_filter(&fltk_filter(&options.filters));
        Self::run(nfc)
    }

    fn save_file(&self, options: &SaveDialogOptions) -> Result<Option<PathBuf>> {
        let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
        nfc.set_title(&options.title);
        nfc.set_filter(&fltk_filter(&options.filters));
        nfc.set_preset_file(&options.default_filename);
        nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
        Self::run(nfc)
    }
}
