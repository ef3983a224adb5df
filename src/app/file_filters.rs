use crate::app::domain::FileFilter;

/// Convert a `;`-separated glob list into FLTK's brace form.
///
/// `*.mmd;*.mermaid` becomes `*.{mmd,mermaid}`; a single glob is kept as is.
pub fn fltk_pattern(pattern: &str) -> String {
    let globs: Vec<&str> = pattern
        .split(';')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect();

    let extensions: Option<Vec<&str>> = globs.iter().map(|g| g.strip_prefix("*.")).collect();
    match extensions {
        Some(exts) if exts.len() > 1 => format!("*.{{{}}}", exts.join(",")),
        _ => globs.join(";"),
    }
}

/// Build the filter string handed to `NativeFileChooser::set_filter`.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2".
/// Note: FLTK adds its own "All Files" entry, so catch-all filters are skipped.
pub fn fltk_filter(filters: &[FileFilter]) -> String {
    filters
        .iter()
        .filter(|f| f.pattern != "*.*" && f.pattern != "*")
        .map(|f| format!("{}\t{}", f.display_name, fltk_pattern(&f.pattern)))
        .collect::<Vec<_>>()
        .join("\n")
}
