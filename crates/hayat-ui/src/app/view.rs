use iced::widget::{button, column, container, horizontal_space, row, text, text_editor};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Theme};

use super::{App, Message};
use crate::theme::colors;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_header(),
            self.view_editor(),
            self.view_status_bar(),
        ];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into()
    }

    /// The header bar: Save, Undo and Redo.
    fn view_header(&self) -> Element<'_, Message> {
        let undo_enabled = self.editor.can_undo();
        let redo_enabled = self.editor.can_redo();

        let header = row![
            header_button("Save", Some(Message::Save)),
            header_button("Undo", undo_enabled.then_some(Message::Undo)),
            header_button("Redo", redo_enabled.then_some(Message::Redo)),
            horizontal_space(),
        ]
        .spacing(10)
        .padding(Padding::from([8, 12]))
        .align_y(iced::Alignment::Center);

        container(header)
            .width(Length::Fill)
            .height(50)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// The scrolled text area.
    fn view_editor(&self) -> Element<'_, Message> {
        let editor = text_editor(&self.content)
            .height(Length::Fill)
            .padding(Padding {
                top: 16.0,
                right: 20.0,
                bottom: 16.0,
                left: 16.0,
            })
            .font(Font::MONOSPACE)
            .size(self.editor.config().ui.font_size)
            .style(|_theme: &Theme, _status| text_editor::Style {
                background: Background::Color(colors::BG_DARK),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: Color::TRANSPARENT,
                },
                icon: colors::TEXT_MUTED,
                placeholder: colors::TEXT_MUTED,
                value: colors::TEXT_PRIMARY,
                selection: Color::from_rgba(0.36, 0.54, 0.90, 0.35),
            })
            .on_action(Message::EditorAction);

        container(editor)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_status_bar(&self) -> Element<'_, Message> {
        let doc = self.editor.document();
        let file_info = if doc.is_modified() {
            format!("{} [modified]", doc.name())
        } else {
            doc.name().to_string()
        };

        let (line, col) = self.content.cursor_position();
        let cursor_info = format!("Ln {}, Col {}", line + 1, col + 1);

        let status_content = row![
            text(&self.status_message)
                .size(12)
                .color(colors::TEXT_SECONDARY),
            horizontal_space(),
            text(file_info).size(12).color(colors::TEXT_SECONDARY),
            text(cursor_info).size(12).color(colors::TEXT_PRIMARY),
            text("UTF-8").size(12).color(colors::ACCENT),
        ]
        .spacing(24)
        .padding(Padding::from([6, 12]))
        .align_y(iced::Alignment::Center);

        container(status_content)
            .width(Length::Fill)
            .height(28)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}

/// A header-bar button; disabled when no message is supplied.
fn header_button(label: &str, on_press: Option<Message>) -> Element<'_, Message> {
    button(text(label).size(14).color(colors::TEXT_PRIMARY))
        .padding(Padding::from([6, 16]))
        .style(|_, status| {
            let bg = match status {
                button::Status::Hovered | button::Status::Pressed => colors::BG_HOVER,
                button::Status::Disabled => colors::BG_DARK,
                _ => colors::BG_MEDIUM,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        })
        .on_press_maybe(on_press)
        .into()
}
