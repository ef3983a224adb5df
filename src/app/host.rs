//! Host shell: service construction, startup, and the bound operation surface.
//!
//! `Services` exists before the GUI runtime starts. Calling `startup` with the
//! runtime's `HostContext` is the only way to obtain a `Host`, and only the
//! `Host` exposes operations, so nothing can run before startup.

use std::path::Path;
use std::sync::OnceLock;

use crate::app::domain::{LoadedFile, Preferences, SaveOutcome};
use crate::app::error::Result;
use crate::app::infrastructure::dialogs::FileDialogs;
use crate::app::infrastructure::platform::{SystemTheme, detect_system_theme};
use crate::app::services::diagrams::DiagramService;
use crate::app::services::files::FileGateway;
use crate::app::services::preferences::PreferenceStore;

/// Runtime-bound facilities, available once the GUI toolkit is up.
pub struct HostContext {
    dialogs: Box<dyn FileDialogs>,
}

impl HostContext {
    pub fn new(dialogs: impl FileDialogs + 'static) -> Self {
        Self {
            dialogs: Box::new(dialogs),
        }
    }
}

/// Path handed over on the command line. Set at most once.
#[derive(Debug, Default)]
pub struct StartupFile(OnceLock<String>);

impl StartupFile {
    /// Returns false if a path was already set; the first one wins.
    pub fn set(&self, path: impl Into<String>) -> bool {
        self.0.set(path.into()).is_ok()
    }

    pub fn get(&self) -> &str {
        self.0.get().map(String::as_str).unwrap_or("")
    }
}

/// Services constructed before the GUI runtime starts.
pub struct Services {
    preferences: PreferenceStore,
    diagrams: DiagramService,
    startup_file: StartupFile,
}

impl Services {
    pub fn new(preferences: PreferenceStore, diagrams: DiagramService) -> Self {
        Self {
            preferences,
            diagrams,
            startup_file: StartupFile::default(),
        }
    }

    pub fn set_startup_file(&self, path: impl Into<String>) -> bool {
        self.startup_file.set(path)
    }

    /// Runtime startup callback: bind the context and start serving calls.
    pub fn startup(self, ctx: HostContext) -> Host {
        log::debug!("host started, config dir {}", self.preferences.dir().display());
        Host {
            preferences: self.preferences,
            diagrams: self.diagrams,
            files: FileGateway::new(ctx.dialogs),
            startup_file: self.startup_file,
        }
    }
}

/// The started host. Each method is one frontend-callable operation.
pub struct Host {
    preferences: PreferenceStore,
    diagrams: DiagramService,
    files: FileGateway,
    startup_file: StartupFile,
}

impl Host {
    // Preferences

    pub fn load_preferences(&self) -> Result<Preferences> {
        self.preferences.load_preferences()
    }

    pub fn save_preferences(&self, prefs: &Preferences) -> Result<()> {
        self.preferences.save_preferences(prefs)
    }

    pub fn load_palettes(&self) -> Result<String> {
        self.preferences.load_palettes()
    }

    pub fn save_palettes(&self, palettes: &str) -> Result<()> {
        self.preferences.save_palettes(palettes)
    }

    // Files

    pub fn load_file_by_path(&self, path: impl AsRef<Path>) -> Result<String> {
        self.files.load_file_by_path(path)
    }

    pub fn load_file(&self) -> Result<String> {
        self.files.load_file()
    }

    pub fn open_file(&self) -> Result<Option<LoadedFile>> {
        self.files.open_file()
    }

    pub fn save_file(&self, content: &str, engine_tag: &str) -> Result<SaveOutcome> {
        self.files.save_file(content, engine_tag)
    }

    pub fn export_svg(&self, content: &str) -> Result<SaveOutcome> {
        self.files.export_svg(content)
    }

    pub fn export_png(&self, base64_content: &str) -> Result<SaveOutcome> {
        self.files.export_png(base64_content)
    }

    // Diagrams

    pub fn compile(&self, source: &str, theme_id: i64, background: &str) -> Result<String> {
        self.diagrams.compile(source, theme_id, background)
    }

    // Environment

    pub fn system_theme(&self) -> SystemTheme {
        detect_system_theme()
    }

    pub fn is_dark_theme(&self) -> bool {
        self.system_theme().is_dark()
    }

    pub fn startup_file_path(&self) -> &str {
        self.startup_file.get()
    }
}
