use iced::Task;
use iced::widget::text_editor;

use hayat_core::{Config, Editor};

pub mod messages;
pub mod update;
pub mod view;

pub use messages::Message;

/// Launch flags from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    pub file: Option<String>,
}

/// The application state: one editing session plus widget state.
pub struct App {
    pub editor: Editor,
    pub content: text_editor::Content,
    pub status_message: String,
}

impl App {
    pub fn new(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let mut editor = Editor::new(config);
        let mut status_message = "Ready".to_string();

        if let Some(path) = &flags.file {
            match editor.open(path) {
                Ok(()) => {
                    status_message = format!("Opened: {}", editor.document().name());
                }
                Err(e) => {
                    tracing::warn!(path, error = %e, "could not open file");
                    status_message = format!("Error: {}", e);
                }
            }
        }

        let content = text_editor::Content::with_text(editor.document().text());

        (
            Self {
                editor,
                content,
                status_message,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        let modified = if self.editor.document().is_modified() {
            " *"
        } else {
            ""
        };
        format!("{}{} - Hayat", self.editor.document().name(), modified)
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let config = Config::load();
    let window_size = iced::Size::new(config.ui.window_width, config.ui.window_height);

    iced::application(App::title, App::update, App::view)
        .window_size(window_size)
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .run_with(move || App::new(flags, config))
}
