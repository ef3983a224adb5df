use std::path::{Path, PathBuf};

use fltk::{dialog, frame::Frame, menu::MenuBar, prelude::*, text::TextEditor, window::Window};

use super::domain::{EngineTag, Preferences};
use super::host::Host;
use crate::ui::main_window::{MainWidgets, WINDOW_TITLE};
use crate::ui::preview::{show_notice, show_svg};
use crate::ui::theme::{apply_theme, diagram_style, resolve_dark_mode, toggled_preferences};

/// Native frontend state. Every host call goes through `Host`.
pub struct AppState {
    pub host: Host,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub preview: Frame,
    pub status: Frame,
    pub dark_mode: bool,
    pub engine: EngineTag,
    pub file_path: Option<PathBuf>,
    /// Last successful render, kept for export.
    pub last_svg: Option<String>,
}

impl AppState {
    pub fn new(host: Host, widgets: MainWidgets) -> Self {
        let prefs = host.load_preferences().unwrap_or_else(|e| {
            log::warn!("ignoring unreadable preferences: {}", e);
            Preferences::default()
        });
        let dark_mode = resolve_dark_mode(&prefs, host.is_dark_theme());

        let mut state = Self {
            host,
            editor: widgets.text_editor,
            window: widgets.wind,
            menu: widgets.menu,
            preview: widgets.preview,
            status: widgets.status,
            dark_mode,
            engine: EngineTag::D2,
            file_path: None,
            last_svg: None,
        };
        state.apply_theme();
        show_notice(&mut state.preview, "Press F5 to render the diagram");
        state
    }

    fn apply_theme(&mut self) {
        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            &mut self.preview,
            &mut self.status,
            self.dark_mode,
        );
    }

    fn set_status(&mut self, text: &str) {
        self.status.set_label(text);
        self.status.redraw();
    }

    fn source(&self) -> String {
        self.editor.buffer().map(|b| b.text()).unwrap_or_default()
    }

    pub fn update_window_title(&mut self) {
        let name = self
            .file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        self.window.set_label(&format!("{} - {}", name, WINDOW_TITLE));
    }

    fn show_document(&mut self, path: PathBuf, content: &str) {
        if let Some(mut buf) = self.editor.buffer() {
            buf.set_text(content);
        }
        self.engine = EngineTag::from_path(&path);
        self.file_path = Some(path);
        self.last_svg = None;
        self.update_window_title();
        self.compile();
    }

    /// Open the file passed on the command line, if any.
    pub fn open_startup_file(&mut self) {
        let path = self.host.startup_file_path().to_string();
        if path.is_empty() {
            return;
        }
        match self.host.load_file_by_path(&path) {
            Ok(content) => self.show_document(PathBuf::from(path), &content),
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        if let Some(mut buf) = self.editor.buffer() {
            buf.set_text("");
        }
        self.file_path = None;
        self.engine = EngineTag::D2;
        self.last_svg = None;
        show_notice(&mut self.preview, "");
        self.update_window_title();
    }

    pub fn file_open(&mut self) {
        match self.host.open_file() {
            Ok(Some(file)) => self.show_document(file.path, &file.content),
            Ok(None) => {}
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    pub fn file_save(&mut self) {
        let text = self.source();
        match self.host.save_file(&text, self.engine.tag()) {
            Ok(outcome) => {
                if let Some(path) = outcome.path() {
                    self.engine = EngineTag::from_path(path);
                    self.file_path = Some(path.to_path_buf());
                    self.update_window_title();
                }
                self.set_status(&outcome.message());
            }
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    pub fn export_svg(&mut self) {
        let Some(svg) = self.last_svg.clone() else {
            self.set_status("Nothing to export yet; compile the diagram first");
            return;
        };
        match self.host.export_svg(&svg) {
            Ok(outcome) => self.set_status(&outcome.message()),
            Err(e) => dialog::alert_default(&format!("Error exporting SVG: {}", e)),
        }
    }

    // --- Diagram ---

    pub fn compile(&mut self) {
        if self.engine == EngineTag::Mermaid {
            show_notice(&mut self.preview, "Mermaid diagrams are rendered by the web frontend");
            return;
        }
        let style = diagram_style(self.dark_mode);
        match self.host.compile(&self.source(), style.theme_id, style.background) {
            Ok(svg) => {
                if let Err(e) = show_svg(&mut self.preview, &svg) {
                    show_notice(&mut self.preview, &e);
                }
                self.last_svg = Some(svg);
                self.set_status("Compiled");
            }
            Err(e) => {
                self.last_svg = None;
                show_notice(&mut self.preview, &e.to_string());
                self.set_status("Compilation failed");
            }
        }
    }

    // --- View ---

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.apply_theme();
        match self.host.load_preferences() {
            Ok(current) => {
                if let Some(prefs) = toggled_preferences(&current, self.dark_mode) {
                    if let Err(e) = self.host.save_preferences(&prefs) {
                        log::warn!("could not save theme choice: {}", e);
                    }
                }
            }
            Err(e) => log::warn!("not saving theme choice, preferences unreadable: {}", e),
        }
        if self.last_svg.is_some() {
            self.compile();
        }
    }
}
