use iced::Task;
use iced::widget::text_editor;

use hayat_core::write_document;

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EditorAction(action) => {
                let is_edit = action.is_edit();
                self.content.perform(action);

                if is_edit {
                    if let Some(token) = self.editor.apply_edit(&self.content.text()) {
                        let delay = self.editor.debounce_delay();
                        return Task::perform(tokio::time::sleep(delay), move |_| {
                            Message::TypingStopped(token)
                        });
                    }
                }
            }

            Message::TypingStopped(token) => {
                // Stale tokens (the user kept typing, or undo/redo cancelled
                // the cycle) fall through without touching history.
                self.editor.typing_stopped(token);
            }

            Message::Undo => {
                if self.editor.undo() {
                    self.content =
                        text_editor::Content::with_text(self.editor.document().text());
                    self.status_message = "Undo".to_string();
                } else {
                    self.status_message = "Nothing to undo".to_string();
                }
            }

            Message::Redo => {
                if self.editor.redo() {
                    self.content =
                        text_editor::Content::with_text(self.editor.document().text());
                    self.status_message = "Redo".to_string();
                } else {
                    self.status_message = "Nothing to redo".to_string();
                }
            }

            Message::Save => match self.editor.save_request() {
                Ok((path, text)) => {
                    return Task::perform(
                        async move { write_document(path, text).await.map_err(|e| e.to_string()) },
                        Message::FileSaved,
                    );
                }
                // Untitled document: fall back to the save-as dialog.
                Err(_) => return self.update(Message::SaveAs),
            },

            Message::SaveAs => {
                let text = self.editor.document().text().to_string();
                let default_name = self.editor.document().name().to_string();
                return Task::perform(
                    async move {
                        let handle = rfd::AsyncFileDialog::new()
                            .set_file_name(&default_name)
                            .save_file()
                            .await;

                        match handle {
                            Some(file) => {
                                let path = file.path().to_path_buf();
                                write_document(path, text).await.map_err(|e| e.to_string())
                            }
                            None => Err("Cancelled".to_string()),
                        }
                    },
                    Message::FileSaved,
                );
            }

            Message::FileSaved(result) => match result {
                Ok(path) => {
                    self.editor.mark_saved(&path);
                    self.status_message = format!("Saved: {}", self.editor.document().name());
                }
                Err(e) => {
                    if e != "Cancelled" {
                        self.status_message = format!("Error: {}", e);
                    }
                }
            },
        }

        Task::none()
    }
}
