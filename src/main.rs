use std::path::PathBuf;

use clap::Parser;
use fltk::{app, enums::Event, prelude::*};

use adome::app::domain::Message;
use adome::app::host::{HostContext, Services};
use adome::app::infrastructure::d2::D2Cli;
use adome::app::infrastructure::detach::{self, DetachDecision};
use adome::app::infrastructure::dialogs::FltkDialogs;
use adome::app::services::diagrams::DiagramService;
use adome::app::services::preferences::PreferenceStore;
use adome::app::state::AppState;
use adome::ui::main_window::build_main_window;
use adome::ui::menu::build_menu;

/// Desktop diagram editor.
#[derive(Parser, Debug)]
#[command(name = "adome", version, about)]
struct Cli {
    /// Diagram file to open on startup
    file: Option<PathBuf>,

    /// Stay attached to the terminal instead of re-launching in the background
    #[arg(long)]
    foreground: bool,

    /// d2 executable (defaults to $ADOME_D2_BIN, then `d2` on PATH)
    #[arg(long, value_name = "PATH")]
    d2: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // Checked before any spawn; the child carries the marker and stays.
    if detach::decide_from_env(cli.foreground) == DetachDecision::Detach {
        match detach::spawn_detached() {
            Ok(pid) => {
                log::info!("adome started (pid {})", pid);
                std::process::exit(0);
            }
            Err(e) => {
                log::error!("failed to detach process: {}", e);
                std::process::exit(1);
            }
        }
    }

    let services = Services::new(
        PreferenceStore::resolve(),
        DiagramService::new(D2Cli::resolve(cli.d2)),
    );
    if let Some(path) = cli.file {
        if path.is_file() {
            services.set_startup_file(path.to_string_lossy());
        } else {
            log::warn!("ignoring startup file {}: not an existing file", path.display());
        }
    }

    let app = app::App::default();
    let host = services.startup(HostContext::new(FltkDialogs::new()));

    let (sender, receiver) = app::channel::<Message>();
    let mut state = AppState::new(host, build_main_window());
    build_menu(&mut state.menu, &sender, state.dark_mode);

    state.window.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    state.update_window_title();
    state.window.show();
    state.open_startup_file();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::ExportSvg => state.export_svg(),
                Message::Compile => state.compile(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::FileQuit | Message::WindowClose => app.quit(),
            }
        }
    }
}
