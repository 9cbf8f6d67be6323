use crate::message::Message;
use iced::widget::{button, container, text};
use iced::{Alignment, Background, Element, Length, Theme};

const PROMPT: &str = "Drop DICOM files here or click to browse";
const HIGHLIGHT_PROMPT: &str = "Release to upload";

/// Clickable drop area. Drops arrive through the window subscription; the
/// widget itself only opens the picker and reflects the highlight.
pub fn drop_target(highlighted: bool) -> Element<'static, Message> {
    let label = if highlighted { HIGHLIGHT_PROMPT } else { PROMPT };

    let content = container(text(label).size(18))
        .width(Length::Fill)
        .height(Length::Fixed(110.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(move |theme| drop_zone_style(theme, highlighted));

    button(content)
        .padding(0)
        .width(Length::Fill)
        .style(|_, _| iced::widget::button::Style {
            background: None,
            ..Default::default()
        })
        .on_press(Message::PickFiles)
        .into()
}

fn drop_zone_style(theme: &Theme, highlighted: bool) -> container::Style {
    let palette = theme.extended_palette();

    let (background, border_color) = if highlighted {
        (
            palette.primary.weak.color.scale_alpha(0.35),
            palette.primary.strong.color,
        )
    } else {
        (
            palette.background.weak.color.scale_alpha(0.4),
            palette.background.strong.color,
        )
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(if highlighted {
            palette.primary.strong.text
        } else {
            palette.background.base.text
        }),
        border: iced::border::Border {
            color: if highlighted { border_color } else { border_color.scale_alpha(0.8) },
            width: 2.0,
            radius: iced::border::Radius::new(12.0),
        },
        ..Default::default()
    }
}
