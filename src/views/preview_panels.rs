use super::status_bar::tone_color;
use crate::message::Message;
use crate::model::preview::{PANEL_NAMES, PREVIEW_UNAVAILABLE};
use crate::model::PanelContent;
use crate::workflow::Tone;
use iced::widget::image::Handle;
use iced::widget::{column, container, row, text, Image};
use iced::{Alignment, Element, Length};
use std::collections::BTreeMap;

/// Four named panels in a 2x2 grid. `images` holds the decoded previews
/// fetched for the current cycle, keyed by panel index.
pub fn preview_panels<'a>(
    panels: &'a [PanelContent],
    images: &'a BTreeMap<usize, Handle>,
) -> Element<'a, Message> {
    let mut cells = panels
        .iter()
        .enumerate()
        .map(|(index, content)| panel(index, content, images.get(&index)));

    let mut grid = column![].spacing(12);
    loop {
        let Some(left) = cells.next() else { break };
        let right = cells.next();
        let mut line = row![left].spacing(12);
        if let Some(right) = right {
            line = line.push(right);
        }
        grid = grid.push(line.height(Length::FillPortion(1)));
    }

    grid.height(Length::Fill).into()
}

fn panel<'a>(index: usize, content: &'a PanelContent, image: Option<&Handle>) -> Element<'a, Message> {
    let name = PANEL_NAMES.get(index).copied().unwrap_or("Preview");

    let body: Element<'a, Message> = match content {
        PanelContent::Empty => text("").into(),
        PanelContent::Image { reference, .. } => match image {
            Some(handle) => Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => text(format!("Loading {reference}…")).size(13).into(),
        },
        PanelContent::Unavailable => text(PREVIEW_UNAVAILABLE)
            .color(tone_color(Tone::Failure))
            .into(),
    };

    container(
        column![
            text(name).size(14),
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Alignment::Center)
                .align_y(Alignment::Center),
        ]
        .spacing(6),
    )
    .padding(8)
    .width(Length::FillPortion(1))
    .height(Length::Fill)
    .style(container::bordered_box)
    .into()
}
