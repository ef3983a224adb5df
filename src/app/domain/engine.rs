use std::path::Path;

/// A named filter for native file dialogs.
///
/// `pattern` uses the `;`-separated glob list form, e.g. `*.mmd;*.mermaid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub display_name: String,
    pub pattern: String,
}

impl FileFilter {
    pub fn new(display_name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            pattern: pattern.into(),
        }
    }

    pub fn all_files() -> Self {
        Self::new("All Files (*.*)", "*.*")
    }
}

/// Every diagram dialect the open dialog accepts.
pub const DIAGRAM_FILES_PATTERN: &str = "*.mmd;*.mermaid;*.d2";

/// Diagram dialect a document belongs to.
///
/// Only used to choose default filenames and dialog filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineTag {
    Mermaid,
    D2,
    #[default]
    Other,
}

impl EngineTag {
    /// Map a frontend tag to an engine. Total: anything unrecognized is `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "mermaid" => Self::Mermaid,
            "d2" => Self::D2,
            _ => Self::Other,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("mmd") | Some("mermaid") => Self::Mermaid,
            Some("d2") => Self::D2,
            _ => Self::Other,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Mermaid => "mermaid",
            Self::D2 => "d2",
            Self::Other => "",
        }
    }

    /// Primary glob list for files of this engine.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Mermaid => "*.mmd;*.mermaid",
            Self::D2 => "*.d2",
            Self::Other => "*.txt",
        }
    }

    pub fn default_filename(&self) -> &'static str {
        match self {
            Self::Mermaid => "diagram.mmd",
            Self::D2 => "diagram.d2",
            Self::Other => "diagram.txt",
        }
    }

    /// Save dialog filters: the engine's own filter, then "All Files".
    pub fn save_filters(&self) -> Vec<FileFilter> {
        let primary = match self {
            Self::Mermaid => FileFilter::new("Mermaid Files (*.mmd, *.mermaid)", self.pattern()),
            Self::D2 => FileFilter::new("D2 Files (*.d2)", self.pattern()),
            Self::Other => FileFilter::new("Text Files (*.txt)", self.pattern()),
        };
        vec![primary, FileFilter::all_files()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(EngineTag::from_tag("mermaid").pattern(), "*.mmd;*.mermaid");
        assert_eq!(EngineTag::from_tag("d2").pattern(), "*.d2");
    }

    #[test]
    fn test_unknown_and_empty_tags_fall_back_to_text() {
        assert_eq!(EngineTag::from_tag("plantuml"), EngineTag::Other);
        assert_eq!(EngineTag::from_tag("plantuml").pattern(), "*.txt");
        assert_eq!(EngineTag::from_tag("").pattern(), "*.txt");
        // Tags are matched exactly
        assert_eq!(EngineTag::from_tag("D2"), EngineTag::Other);
    }

    #[test]
    fn test_default_filenames() {
        assert_eq!(EngineTag::Mermaid.default_filename(), "diagram.mmd");
        assert_eq!(EngineTag::D2.default_filename(), "diagram.d2");
        assert_eq!(EngineTag::Other.default_filename(), "diagram.txt");
    }

    #[test]
    fn test_save_filters_end_with_all_files() {
        for engine in [EngineTag::Mermaid, EngineTag::D2, EngineTag::Other] {
            let filters = engine.save_filters();
            assert_eq!(filters.len(), 2);
            assert_eq!(filters[0].pattern, engine.pattern());
            assert_eq!(filters[1], FileFilter::all_files());
        }
    }

    #[test]
    fn test_from_path() {
        assert_eq!(EngineTag::from_path(Path::new("/a/flow.MMD")), EngineTag::Mermaid);
        assert_eq!(EngineTag::from_path(Path::new("seq.mermaid")), EngineTag::Mermaid);
        assert_eq!(EngineTag::from_path(Path::new("net.d2")), EngineTag::D2);
        assert_eq!(EngineTag::from_path(Path::new("notes")), EngineTag::Other);
    }

    #[test]
    fn test_tag_round_trips_through_from_tag() {
        for engine in [EngineTag::Mermaid, EngineTag::D2, EngineTag::Other] {
            assert_eq!(EngineTag::from_tag(engine.tag()), engine);
        }
    }
}
