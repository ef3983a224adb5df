use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save...", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Export SVG...", Shortcut::Ctrl | 'e', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::ExportSvg) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Diagram
    menu.add("Diagram/Compile", Shortcut::None | Key::F5, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Compile) });

    // View
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
}
