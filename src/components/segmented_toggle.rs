use crate::message::Message;
use iced::border::{Border, Radius};
use iced::widget::button::{self, Status};
use iced::widget::text::Wrapping;
use iced::widget::{container, row, text, Button, Container};
use iced::{Alignment, Background, Color, Length, Theme};

/// What the right-hand column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidePanel {
    #[default]
    Results,
    Studies,
}

impl SidePanel {
    const ALL: [SidePanel; 2] = [SidePanel::Results, SidePanel::Studies];

    fn label(self) -> &'static str {
        match self {
            SidePanel::Results => "Results",
            SidePanel::Studies => "PDF Studies",
        }
    }
}

pub fn side_panel_toggle(current: SidePanel) -> Container<'static, Message> {
    let last = SidePanel::ALL.len() - 1;
    let segments = SidePanel::ALL
        .into_iter()
        .enumerate()
        .fold(row![].spacing(0), |segments, (position, panel)| {
            let edge = match position {
                0 => Edge::Leading,
                p if p == last => Edge::Trailing,
                _ => Edge::Inner,
            };
            segments.push(segment(panel, panel == current, edge).width(Length::FillPortion(1)))
        });

    container(segments)
        .padding(3)
        .width(Length::Fill)
        .style(track_style)
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    Leading,
    Inner,
    Trailing,
}

impl Edge {
    fn radius(self) -> Radius {
        const PILL: f32 = 999.0;
        const SEAM: f32 = 10.0;
        let (left, right) = match self {
            Edge::Leading => (PILL, SEAM),
            Edge::Inner => (SEAM, SEAM),
            Edge::Trailing => (SEAM, PILL),
        };
        Radius {
            top_left: left,
            bottom_left: left,
            top_right: right,
            bottom_right: right,
        }
    }
}

fn segment(panel: SidePanel, active: bool, edge: Edge) -> Button<'static, Message> {
    let label = container(text(panel.label()).size(14).wrapping(Wrapping::None))
        .width(Length::Fill)
        .height(Length::Fixed(32.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 16]);

    iced::widget::button(label)
        .padding(0)
        .on_press(Message::SelectSidePanel(panel))
        .style(move |theme, status| segment_style(theme, status, active, edge))
}

fn track_style(theme: &Theme) -> container::Style {
    let strong = theme.extended_palette().background.strong.color;
    container::Style {
        background: Some(Background::Color(strong)),
        border: Border {
            color: strong.scale_alpha(0.6),
            width: 1.0,
            radius: Radius::new(999.0),
        },
        ..Default::default()
    }
}

fn segment_style(theme: &Theme, status: Status, active: bool, edge: Edge) -> button::Style {
    let palette = theme.extended_palette();

    let (fill, text_color) = if active {
        let fill = match status {
            Status::Hovered => palette.primary.base.color,
            Status::Pressed => palette.primary.base.color.scale_alpha(0.9),
            Status::Disabled => palette.primary.weak.color,
            Status::Active => palette.primary.strong.color,
        };
        (fill, palette.primary.strong.text)
    } else {
        let alpha = match status {
            Status::Hovered => 0.8,
            Status::Pressed => 0.9,
            Status::Disabled => 0.2,
            Status::Active => 0.0,
        };
        (
            palette.background.base.color.scale_alpha(alpha),
            palette.background.base.text,
        )
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: edge.radius(),
        },
        ..Default::default()
    }
}
