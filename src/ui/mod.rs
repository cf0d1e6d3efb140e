/// UI building blocks
///
/// Pure view code: every function takes state and returns an `Element`.
/// - grid.rs: header bar, thumbnail cards, skeleton loaders
/// - modal.rs: upload modal and delete confirmation dialog
/// - lightbox.rs: full-window image viewer
pub mod grid;
pub mod lightbox;
pub mod modal;

use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element};

/// Layer `content` over `base` behind a dimmed, click-to-dismiss backdrop.
/// This is the stock iced modal pattern (stack + opaque + mouse_area).
pub fn overlay<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
