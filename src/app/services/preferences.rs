use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::app::domain::Preferences;
use crate::app::error::Result;

/// Directory under the user config dir holding all persisted state.
pub const CONFIG_DIR_NAME: &str = "DiagramEditor";
pub const PREFERENCES_FILE: &str = "preferences.json";
pub const PALETTES_FILE: &str = "user-palettes.json";
pub const EMPTY_PALETTES: &str = "[]";

/// Preferences and palettes on disk.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    dir: PathBuf,
}

impl PreferenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the per-user config directory (cross-platform) and make sure it
    /// exists. Never fails: no config dir means ".", and a creation error is
    /// only logged.
    pub fn resolve() -> Self {
        Self::resolve_in(dirs::config_dir())
    }

    /// `resolve` against an explicit base directory.
    pub fn resolve_in(base: Option<PathBuf>) -> Self {
        let mut dir = base.unwrap_or_else(|| PathBuf::from("."));
        dir.push(CONFIG_DIR_NAME);
        if let Err(e) = fs::create_dir_all(&dir) {
            log::warn!("could not create config dir {}: {}", dir.display(), e);
        }
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn preferences_path(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILE)
    }

    fn palettes_path(&self) -> PathBuf {
        self.dir.join(PALETTES_FILE)
    }

    pub fn load_preferences(&self) -> Result<Preferences> {
        let contents = match fs::read_to_string(self.preferences_path()) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Preferences::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_preferences(&self, prefs: &Preferences) -> Result<()> {
        let json = serde_json::to_string_pretty(prefs)?;
        fs::write(self.preferences_path(), json)?;
        log::info!("saved preferences to {}", self.preferences_path().display());
        Ok(())
    }

    /// Raw palette blob, exactly as stored. Invalid UTF-8 is replaced, not
    /// rejected, same as diagram files.
    pub fn load_palettes(&self) -> Result<String> {
        let contents = match fs::read(self.palettes_path()) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(EMPTY_PALETTES.to_string()),
            Err(e) => return Err(e.into()),
        };
        if !is_palette_list(&contents) {
            // The frontend owns palette validation; the blob is handed back untouched.
            log::warn!("{} is not a JSON array", self.palettes_path().display());
        }
        Ok(contents)
    }

    pub fn save_palettes(&self, palettes: &str) -> Result<()> {
        fs::write(self.palettes_path(), palettes)?;
        log::info!("saved palettes to {}", self.palettes_path().display());
        Ok(())
    }
}

fn is_palette_list(contents: &str) -> bool {
    matches!(
        serde_json::from_str::<serde_json::Value>(contents),
        Ok(serde_json::Value::Array(_))
    )
}
