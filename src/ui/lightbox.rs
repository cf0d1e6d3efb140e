/// Full-window lightbox viewer
use std::path::Path;

use iced::widget::{button, column, container, horizontal_space, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::gallery::GalleryState;
use crate::Message;

/// The lightbox overlay: close button on top, the image filling the
/// window, previous/next controls on the sides. Navigation order is the
/// grid order; the key handling lives in the state.
pub fn lightbox<'a>(state: &'a GalleryState, upload_dir: &Path) -> Element<'a, Message> {
    let (viewer, caption): (Element<'a, Message>, &str) = match state.current_image() {
        Some(record) => {
            let view: Element<'a, Message> = match record.file_path(upload_dir) {
                Some(path) => image(path)
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
                // Seed records have no backing file
                None => container(text("🏞").size(96))
                    .center(Length::Fill)
                    .into(),
            };
            (view, record.name())
        }
        None => (
            container(text("No image").size(20)).center(Length::Fill).into(),
            "",
        ),
    };

    row![
        button(text("‹").size(40))
            .style(button::text)
            .on_press(Message::PrevImage),
        column![
            row![
                horizontal_space(),
                button(text("✕").size(20))
                    .style(button::text)
                    .on_press(Message::CloseLightbox),
            ],
            viewer,
            text(caption).size(16),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill),
        button(text("›").size(40))
            .style(button::text)
            .on_press(Message::NextImage),
    ]
    .spacing(12)
    .padding(16)
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
