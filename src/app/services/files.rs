use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::app::domain::engine::DIAGRAM_FILES_PATTERN;
use crate::app::domain::{EngineTag, FileFilter, LoadedFile, SaveOutcome};
use crate::app::error::{AppError, Result};
use crate::app::infrastructure::dialogs::{FileDialogs, OpenDialogOptions, SaveDialogOptions};

/// File reads and writes, optionally through native dialogs.
pub struct FileGateway {
    dialogs: Box<dyn FileDialogs>,
}

impl FileGateway {
    pub fn new(dialogs: Box<dyn FileDialogs>) -> Self {
        Self { dialogs }
    }

    pub fn load_file_by_path(&self, path: impl AsRef<Path>) -> Result<String> {
        read_text(path.as_ref())
    }

    /// Content of a file picked by the user, or "" if the dialog was cancelled.
    pub fn load_file(&self) -> Result<String> {
        Ok(self.open_file()?.map(|f| f.content).unwrap_or_default())
    }

    /// Like `load_file`, but keeps the chosen path.
    pub fn open_file(&self) -> Result<Option<LoadedFile>> {
        let options = OpenDialogOptions {
            title: "Open Diagram".to_string(),
            filters: vec![FileFilter::new("Diagram Files", DIAGRAM_FILES_PATTERN)],
        };
        let Some(path) = self.dialogs.open_file(&options)? else {
            log::debug!("open dialog cancelled");
            return Ok(None);
        };
        let content = read_text(&path)?;
        Ok(Some(LoadedFile { path, content }))
    }

    pub fn save_file(&self, content: &str, engine_tag: &str) -> Result<SaveOutcome> {
        let engine = EngineTag::from_tag(engine_tag);
        log::debug!("save_file: engine tag {:?} -> {:?}", engine_tag, engine);
        let options = SaveDialogOptions {
            title: "Save Diagram".to_string(),
            default_filename: engine.default_filename().to_string(),
            filters: engine.save_filters(),
        };
        match self.dialogs.save_file(&options)? {
            Some(path) => {
                write_bytes(&path, content.as_bytes())?;
                Ok(SaveOutcome::Saved(path))
            }
            None => Ok(SaveOutcome::Cancelled),
        }
    }

    pub fn export_svg(&self, content: &str) -> Result<SaveOutcome> {
        self.export(
            export_options("Export SVG", "diagram.svg", "SVG Files", "*.svg"),
            content.as_bytes(),
        )
    }

    /// Decode a base64 PNG payload and write it out. A malformed payload is
    /// rejected before any dialog is shown.
    pub fn export_png(&self, base64_content: &str) -> Result<SaveOutcome> {
        let data = STANDARD.decode(base64_content.trim())?;
        self.export(
            export_options("Export PNG", "diagram.png", "PNG Files", "*.png"),
            &data,
        )
    }

    fn export(&self, options: SaveDialogOptions, data: &[u8]) -> Result<SaveOutcome> {
        match self.dialogs.save_file(&options)? {
            Some(path) => {
                write_bytes(&path, data)?;
                Ok(SaveOutcome::Exported(path))
            }
            None => Ok(SaveOutcome::Cancelled),
        }
    }
}

fn export_options(title: &str, filename: &str, name: &str, pattern: &str) -> SaveDialogOptions {
    SaveDialogOptions {
        title: title.to_string(),
        default_filename: filename.to_string(),
        filters: vec![FileFilter::new(name, pattern)],
    }
}

fn read_text(path: &Path) -> Result<String> {
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::NotFound(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}

fn write_bytes(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data)?;
    log::info!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Shown {
        Open(OpenDialogOptions),
        Save(SaveDialogOptions),
    }

    /// Answers dialogs from a queue and records what was shown. An empty
    /// queue answers as a cancel.
    #[derive(Default, Clone)]
    pub struct ScriptedDialogs {
        pub answers: Rc<RefCell<VecDeque<Result<Option<PathBuf>>>>>,
        pub shown: Rc<RefCell<Vec<Shown>>>,
    }

    impl ScriptedDialogs {
        pub fn answering(answers: impl IntoIterator<Item = Option<PathBuf>>) -> Self {
            let dialogs = Self::default();
            dialogs.answers.borrow_mut().extend(answers.into_iter().map(Ok));
            dialogs
        }

        /// Every dialog fails the way a broken toolkit backend would.
        pub fn failing(reason: &str, count: usize) -> Self {
            let dialogs = Self::default();
            dialogs
                .answers
                .borrow_mut()
                .extend((0..count).map(|_| Err(AppError::Dialog(reason.to_string()))));
            dialogs
        }

        fn next(&self) -> Result<Option<PathBuf>> {
            self.answers.borrow_mut().pop_front().unwrap_or(Ok(None))
        }
    }

    impl FileDialogs for ScriptedDialogs {
        fn open_file(&self, options: &OpenDialogOptions) -> Result<Option<PathBuf>> {
            self.shown.borrow_mut().push(Shown::Open(options.clone()));
            self.next()
        }

        fn save_file(&self, options: &SaveDialogOptions) -> Result<Option<PathBuf>> {
            self.shown.borrow_mut().push(Shown::Save(options.clone()));
            self.next()
        }
    }

    fn gateway(answers: Vec<Option<PathBuf>>) -> (FileGateway, ScriptedDialogs) {
        let dialogs = ScriptedDialogs::answering(answers);
        (FileGateway::new(Box::new(dialogs.clone())), dialogs)
    }

    #[test]
    fn test_load_file_by_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("testfile.mmd");
        fs::write(&path, "test content for load_file_by_path").unwrap();

        let (files, _) = gateway(vec![]);
        assert_eq!(
            files.load_file_by_path(&path).unwrap(),
            "test content for load_file_by_path"
        );

        let missing = dir.path().join("nonexistent.mmd");
        let err = files.load_file_by_path(&missing).unwrap_err();
        assert!(matches!(err, AppError::NotFound(p) if p == missing));
    }

    #[test]
    fn test_load_file_cancel_returns_empty() {
        let (files, dialogs) = gateway(vec![None]);
        assert_eq!(files.load_file().unwrap(), "");

        let shown = dialogs.shown.borrow();
        match &shown[0] {
            Shown::Open(opts) => {
                assert_eq!(opts.title, "Open Diagram");
                assert_eq!(opts.filters[0].pattern, "*.mmd;*.mermaid;*.d2");
            }
            other => panic!("unexpected dialog {other:?}"),
        }
    }

    #[test]
    fn test_open_file_keeps_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("net.d2");
        fs::write(&path, "a -> b").unwrap();

        let (files, _) = gateway(vec![Some(path.clone())]);
        let loaded = files.open_file().unwrap().unwrap();
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.content, "a -> b");
    }

    #[test]
    fn test_load_file_read_failure_after_selection() {
        let dir = TempDir::new().unwrap();
        let (files, _) = gateway(vec![Some(dir.path().join("vanished.d2"))]);
        assert!(files.load_file().is_err());
    }

    #[test]
    fn test_save_file_uses_engine_defaults() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.d2");
        let (files, dialogs) = gateway(vec![Some(target.clone())]);

        let outcome = files.save_file("x -> y", "d2").unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(target.clone()));
        assert_eq!(fs::read_to_string(&target).unwrap(), "x -> y");
        assert_eq!(outcome.message(), format!("Saved to {}", target.display()));

        match &dialogs.shown.borrow()[0] {
            Shown::Save(opts) => {
                assert_eq!(opts.title, "Save Diagram");
                assert_eq!(opts.default_filename, "diagram.d2");
                assert_eq!(opts.filters, EngineTag::D2.save_filters());
            }
            other => panic!("unexpected dialog {other:?}"),
        }
    }

    #[test]
    fn test_save_file_unknown_engine_falls_back_to_txt() {
        let (files, dialogs) = gateway(vec![None]);
        let outcome = files.save_file("notes", "").unwrap();
        assert!(outcome.is_cancelled());
        match &dialogs.shown.borrow()[0] {
            Shown::Save(opts) => {
                assert_eq!(opts.default_filename, "diagram.txt");
                assert_eq!(opts.filters[0].pattern, "*.txt");
            }
            other => panic!("unexpected dialog {other:?}"),
        }
    }

    #[test]
    fn test_save_file_write_failure() {
        let dir = TempDir::new().unwrap();
        let (files, _) = gateway(vec![Some(dir.path().join("no/such/dir/x.mmd"))]);
        let err = files.save_file("graph TD", "mermaid").unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_export_svg() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("diagram.svg");
        let (files, _) = gateway(vec![Some(target.clone()), None]);

        let outcome = files.export_svg("<svg></svg>").unwrap();
        assert_eq!(outcome, SaveOutcome::Exported(target.clone()));
        assert_eq!(fs::read_to_string(&target).unwrap(), "<svg></svg>");

        assert_eq!(files.export_svg("<svg/>").unwrap(), SaveOutcome::Cancelled);
    }

    #[test]
    fn test_export_png_decodes_payload() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("diagram.png");
        let (files, _) = gateway(vec![Some(target.clone())]);

        let bytes = [0x89u8, b'P', b'N', b'G', 0x0d, 0x0a];
        let payload = STANDARD.encode(bytes);
        assert_eq!(
            files.export_png(&payload).unwrap(),
            SaveOutcome::Exported(target.clone())
        );
        assert_eq!(fs::read(&target).unwrap(), bytes);
    }

    #[test]
    fn test_export_png_rejects_malformed_base64_without_dialog() {
        let (files, dialogs) = gateway(vec![]);
        let err = files.export_png("%%% not base64 %%%").unwrap_err();
        assert!(err.is_decode());
        assert!(dialogs.shown.borrow().is_empty());
    }

    #[test]
    fn test_dialog_failure_is_reported() {
        let dialogs = ScriptedDialogs::failing("zenity: cannot open display", 4);
        let files = FileGateway::new(Box::new(dialogs.clone()));

        let err = files.load_file().unwrap_err();
        assert!(matches!(err, AppError::Dialog(ref msg) if msg == "zenity: cannot open display"));
        assert!(matches!(files.open_file().unwrap_err(), AppError::Dialog(_)));
        assert!(matches!(files.save_file("x -> y", "d2").unwrap_err(), AppError::Dialog(_)));
        assert!(matches!(files.export_svg("<svg/>").unwrap_err(), AppError::Dialog(_)));

        assert_eq!(dialogs.shown.borrow().len(), 4);
        assert!(dialogs.answers.borrow().is_empty());
    }

    #[test]
    fn test_dialog_failure_after_selection_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.svg");
        let dialogs = ScriptedDialogs::failing("portal timed out", 1);
        dialogs.answers.borrow_mut().push_back(Ok(Some(target.clone())));
        let files = FileGateway::new(Box::new(dialogs));

        assert!(files.export_svg("<svg/>").is_err());
        assert!(!target.exists());
        // The next dialog answers normally
        assert_eq!(files.export_svg("<svg/>").unwrap(), SaveOutcome::Exported(target.clone()));
        assert!(target.is_file());
    }

    #[test]
    fn test_export_png_dialog_failure() {
        let files = FileGateway::new(Box::new(ScriptedDialogs::failing("no portal", 1)));
        let payload = STANDARD.encode(b"png");
        let err = files.export_png(&payload).unwrap_err();
        assert!(matches!(err, AppError::Dialog(_)));
    }
}
