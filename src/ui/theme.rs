use fltk::{
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::Preferences;

pub const DARK_THEME_NAME: &str = "dark";
pub const LIGHT_THEME_NAME: &str = "light";

/// d2 render options matching the window theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramStyle {
    pub theme_id: i64,
    pub background: &'static str,
}

pub fn diagram_style(is_dark: bool) -> DiagramStyle {
    if is_dark {
        // d2 "Dark Mauve"
        DiagramStyle { theme_id: 200, background: "#252526" }
    } else {
        DiagramStyle { theme_id: 0, background: "#ffffff" }
    }
}

/// A saved "dark"/"light" choice wins; anything else follows the desktop.
pub fn resolve_dark_mode(prefs: &Preferences, system_dark: bool) -> bool {
    match prefs.active_theme_name.as_str() {
        DARK_THEME_NAME => true,
        LIGHT_THEME_NAME => false,
        _ => system_dark,
    }
}

pub fn theme_name(is_dark: bool) -> &'static str {
    if is_dark { DARK_THEME_NAME } else { LIGHT_THEME_NAME }
}

/// Preference to persist after a dark/light toggle, or `None` when the stored
/// name is a palette theme that the toggle must not overwrite.
pub fn toggled_preferences(current: &Preferences, is_dark: bool) -> Option<Preferences> {
    match current.active_theme_name.as_str() {
        "" | DARK_THEME_NAME | LIGHT_THEME_NAME => Some(Preferences::with_theme(theme_name(is_dark))),
        _ => None,
    }
}

pub fn apply_theme(
    editor: &mut TextEditor,
    window: &mut Window,
    menu: &mut MenuBar,
    preview: &mut Frame,
    status: &mut Frame,
    is_dark: bool,
) {
    if is_dark {
        // Dark mode colors
        editor.set_color(Color::from_rgb(30, 30, 30));
        editor.set_text_color(Color::from_rgb(220, 220, 220));
        editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
        editor.set_linenumber_bgcolor(Color::from_rgb(40, 40, 40));
        editor.set_linenumber_fgcolor(Color::from_rgb(150, 150, 150));
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60));
        preview.set_color(Color::from_hex(0x252526));
        preview.set_label_color(Color::from_rgb(200, 200, 200));
        status.set_color(Color::from_rgb(35, 35, 35));
        status.set_label_color(Color::from_rgb(200, 200, 200));
    } else {
        // Light mode colors
        editor.set_color(Color::White);
        editor.set_text_color(Color::Black);
        editor.set_cursor_color(Color::Black);
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
        editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
        editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200));
        preview.set_color(Color::White);
        preview.set_label_color(Color::from_rgb(90, 90, 90));
        status.set_color(Color::from_rgb(230, 230, 230));
        status.set_label_color(Color::Black);
    }

    editor.redraw();
    window.redraw();
    menu.redraw();
    preview.redraw();
    status.redraw();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_choice_wins() {
        let dark = Preferences::with_theme("dark");
        let light = Preferences::with_theme("light");
        assert!(resolve_dark_mode(&dark, false));
        assert!(!resolve_dark_mode(&light, true));
    }

    #[test]
    fn test_other_names_follow_system() {
        assert!(resolve_dark_mode(&Preferences::default(), true));
        assert!(!resolve_dark_mode(&Preferences::with_theme("oceanic"), false));
    }

    #[test]
    fn test_diagram_style() {
        assert_eq!(diagram_style(false), DiagramStyle { theme_id: 0, background: "#ffffff" });
        assert_eq!(diagram_style(true).background, "#252526");
    }

    #[test]
    fn test_theme_name_round_trips() {
        for dark in [true, false] {
            let prefs = Preferences::with_theme(theme_name(dark));
            assert_eq!(resolve_dark_mode(&prefs, !dark), dark);
        }
    }

    #[test]
    fn test_toggle_keeps_palette_theme_name() {
        assert_eq!(toggled_preferences(&Preferences::with_theme("oceanic"), true), None);
        assert_eq!(
            toggled_preferences(&Preferences::default(), true),
            Some(Preferences::with_theme("dark"))
        );
        assert_eq!(
            toggled_preferences(&Preferences::with_theme("dark"), false),
            Some(Preferences::with_theme("light"))
        );
    }
}
