use crate::message::Message;
use crate::utils::truncate_for_display;
use crate::workflow::{StatusLine, Tone};
use iced::widget::text;
use iced::widget::text::Wrapping;
use iced::{Color, Element};

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::from_rgb8(0x36, 0x66, 0x99),
        Tone::Success => Color::from_rgb8(0x2e, 0x9e, 0x48),
        Tone::Failure => Color::from_rgb8(0xd9, 0x38, 0x33),
    }
}

pub fn status_line(status: &StatusLine) -> Element<'static, Message> {
    text(truncate_for_display(&status.text))
        .size(15)
        .color(tone_color(status.tone))
        .wrapping(Wrapping::Word)
        .into()
}
