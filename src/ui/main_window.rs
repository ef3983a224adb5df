use fltk::{
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

pub const WINDOW_TITLE: &str = "adome";

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub preview: Frame,
    pub status: Frame,
}

pub fn build_main_window() -> MainWidgets {
    let mut wind = Window::new(100, 100, 1024, 768, WINDOW_TITLE);
    wind.set_xclass("adome");

    let mut flex = Flex::new(0, 0, 1024, 768, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Source on the left, rendered diagram on the right
    let mut panes = Flex::default();
    panes.set_type(FlexType::Row);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.set_linenumber_width(40);
    text_editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
    text_editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));

    let mut preview = Frame::default();
    preview.set_frame(FrameType::FlatBox);
    preview.set_color(Color::White);
    preview.set_align(Align::Center | Align::Inside | Align::Wrap);
    preview.set_label_size(13);

    panes.end();

    let mut status = Frame::default();
    status.set_frame(FrameType::FlatBox);
    status.set_align(Align::Left | Align::Inside);
    status.set_label_size(12);
    flex.fixed(&status, 22);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        text_editor,
        preview,
        status,
    }
}
