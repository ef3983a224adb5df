pub mod main_window;
pub mod menu;
pub mod preview;
pub mod theme;
