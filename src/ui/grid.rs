/// Header bar and thumbnail grid
use std::path::Path;

use iced::widget::{button, column, container, horizontal_space, image, mouse_area, row, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::data::ImageRecord;
use crate::state::gallery::{GalleryState, NoticeLevel};
use crate::Message;

const CARD_WIDTH: f32 = 220.0;
const THUMB_HEIGHT: f32 = 160.0;
const GRID_SPACING: f32 = 16.0;

/// Title bar with the Upload button and the transient notice line
pub fn header(state: &GalleryState) -> Element<'_, Message> {
    let mut bar = row![
        text("Image Gallery").size(24),
        horizontal_space(),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    if let Some(notice) = &state.notice {
        let style = match notice.level {
            NoticeLevel::Error => text::danger,
            NoticeLevel::Success => text::success,
            NoticeLevel::Info => text::secondary,
        };
        bar = bar.push(text(&notice.text).size(14).style(style));
    }

    bar = bar.push(button(text("Upload")).on_press(Message::ToggleUploadModal));

    container(bar)
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// One thumbnail card: the image (click opens the lightbox), the name
/// and a delete button
fn image_card<'a>(
    index: usize,
    record: &'a ImageRecord,
    upload_dir: &Path,
) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match record.file_path(upload_dir) {
        Some(path) => image(path)
            .width(Length::Fill)
            .height(Length::Fixed(THUMB_HEIGHT))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        // Seed records have no file on disk; draw a flat placeholder
        None => container(text("🏞").size(48))
            .center(Length::Fill)
            .width(Length::Fill)
            .height(Length::Fixed(THUMB_HEIGHT))
            .style(container::rounded_box)
            .into(),
    };

    let footer = row![
        text(record.name()).size(14),
        horizontal_space(),
        button(text("Delete").size(12))
            .style(button::danger)
            .on_press(Message::DeleteRequested(index)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(
        column![
            mouse_area(thumbnail).on_press(Message::OpenLightbox(index)),
            container(footer).padding(8),
        ]
        .width(Length::Fixed(CARD_WIDTH)),
    )
    .style(container::bordered_box)
    .into()
}

/// Placeholder card shown while the initial load is in flight
fn skeleton_card<'a>() -> Element<'a, Message> {
    container(
        column![
            container(text(""))
                .width(Length::Fill)
                .height(Length::Fixed(THUMB_HEIGHT))
                .style(container::rounded_box),
            container(text("Loading...").size(12)).padding(8),
        ]
        .width(Length::Fixed(CARD_WIDTH)),
    )
    .style(container::bordered_box)
    .into()
}

/// The grid of images, or six skeleton loaders while loading
pub fn image_grid<'a>(state: &'a GalleryState, upload_dir: &Path) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = if state.is_loading {
        (0..6).map(|_| skeleton_card()).collect()
    } else {
        state
            .images
            .iter()
            .enumerate()
            .map(|(index, record)| image_card(index, record, upload_dir))
            .collect()
    };

    container(
        Wrap::with_elements(cards)
            .spacing(GRID_SPACING)
            .line_spacing(GRID_SPACING),
    )
    .padding(24)
    .width(Length::Fill)
    .into()
}
