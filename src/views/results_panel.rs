use super::status_bar::tone_color;
use crate::message::Message;
use crate::model::{ReportHandle, RiskLabel};
use crate::utils::{prediction_line, raw_value_line, truncate_for_display};
use crate::workflow::screen::INSUFFICIENT_PREDICTIONS;
use crate::workflow::{ResultsView, Tone};
use iced::widget::text::Wrapping;
use iced::widget::{button, column, scrollable, text, Column};
use iced::{Color, Element, Font, Length};

fn warning() -> Color {
    Color::from_rgb8(0xf2, 0x99, 0x1a)
}

pub fn results_panel<'a>(
    results: &'a ResultsView,
    report: Option<&'a ReportHandle>,
) -> Element<'a, Message> {
    let mut content: Column<'a, Message> = column![
        button("Process recent DICOMs").on_press(Message::ProcessRecent),
    ]
    .spacing(10);

    content = match results {
        ResultsView::Empty => content,
        ResultsView::Assessment(assessment) => {
            let label_tone = match assessment.label {
                RiskLabel::HighRisk => Tone::Failure,
                RiskLabel::LowRisk => Tone::Success,
            };
            content
                .push(text(prediction_line(assessment)).size(20))
                .push(
                    text(assessment.label.as_str())
                        .size(18)
                        .color(tone_color(label_tone)),
                )
                .push(text(raw_value_line(assessment)).size(13))
        }
        ResultsView::InsufficientPredictions => {
            content.push(text(INSUFFICIENT_PREDICTIONS).color(warning()))
        }
        ResultsView::RawResponse(dump) => content.push(
            scrollable(
                text(dump.as_str())
                    .font(Font::MONOSPACE)
                    .size(12)
                    .wrapping(Wrapping::Glyph),
            )
            .height(Length::Fixed(220.0)),
        ),
        ResultsView::TransportFailure(message) => content.push(
            text(truncate_for_display(message))
                .wrapping(Wrapping::Word)
                .color(tone_color(Tone::Failure)),
        ),
        ResultsView::UploadWarnings(warnings) => warnings.iter().fold(
            content.push(text("Some files were not accepted:").color(warning())),
            |content, warning| content.push(text(truncate_for_display(warning)).size(13)),
        ),
    };

    if let Some(report) = report {
        content = content.push(
            column![
                text(format!("Report ready: {}", report.file_name())),
                button("Save report…").on_press(Message::SaveReport),
            ]
            .spacing(6),
        );
    }

    content.into()
}
