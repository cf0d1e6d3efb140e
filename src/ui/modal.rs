/// Upload modal and delete confirmation dialog
use iced::widget::{button, column, container, horizontal_space, progress_bar, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};

use crate::state::gallery::{GalleryState, MAX_BATCH_SIZE};
use crate::Message;

const DIALOG_WIDTH: f32 = 450.0;

fn dialog_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: iced::border::rounded(12),
        ..container::Style::default()
    }
}

/// The upload dialog: file picker, selected-file list, progress bar,
/// Cancel / Upload buttons
pub fn upload_modal(state: &GalleryState) -> Element<'_, Message> {
    let mut content = column![
        text("Upload Images").size(20),
        text(format!(
            "Select up to {} images to add to the gallery.",
            MAX_BATCH_SIZE
        ))
        .size(14)
        .style(text::secondary),
        button(text("Choose Files..."))
            .style(button::secondary)
            .on_press(Message::PickFiles),
    ]
    .spacing(12);

    if !state.selected_files.is_empty() {
        let entries = state.selected_files.iter().map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            text(name).size(13).into()
        });

        content = content.push(
            scrollable(column(entries).spacing(4))
                .height(Length::Fixed(120.0))
                .width(Length::Fill),
        );
    }

    if state.is_uploading {
        content = content.push(
            column![
                progress_bar(0.0..=100.0, f32::from(state.upload_progress)),
                text(format!("Uploading... {}%", state.upload_progress))
                    .size(13)
                    .style(text::secondary),
            ]
            .spacing(6)
            .align_x(Alignment::Center)
            .width(Length::Fill),
        );
    }

    let upload_button = if state.is_uploading {
        // No on_press while the chain is running: the button is disabled
        button(text("Uploading..."))
    } else {
        button(text("Upload")).on_press(Message::BeginUpload)
    };

    content = content.push(
        row![
            horizontal_space(),
            button(text("Cancel"))
                .style(button::secondary)
                .on_press(Message::ToggleUploadModal),
            upload_button,
        ]
        .spacing(10),
    );

    container(content)
        .padding(24)
        .width(Length::Fixed(DIALOG_WIDTH))
        .style(dialog_card)
        .into()
}

/// "Are you sure?" dialog shown before an image is removed
pub fn delete_confirmation<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Confirm Deletion").size(20),
            text("Are you sure you want to delete this image? This action cannot be undone.")
                .size(14)
                .style(text::secondary),
            row![
                horizontal_space(),
                button(text("Cancel"))
                    .style(button::secondary)
                    .on_press(Message::CancelDelete),
                button(text("Delete"))
                    .style(button::danger)
                    .on_press(Message::ConfirmDelete),
            ]
            .spacing(10),
        ]
        .spacing(12),
    )
    .padding(24)
    .width(Length::Fixed(DIALOG_WIDTH))
    .style(dialog_card)
    .into()
}
