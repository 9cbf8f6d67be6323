use crate::message::Message;
use crate::model::MetadataView;
use iced::widget::text::Wrapping;
use iced::widget::{column, row, text};
use iced::{Element, Length};

pub fn metadata_panel(view: &MetadataView) -> Element<'_, Message> {
    let mut table = column![row![
        text("Field").width(Length::FillPortion(2)),
        text("Value").width(Length::FillPortion(3)),
    ]
    .spacing(12)];

    for (field, value) in view.rows() {
        table = table.push(
            row![
                text(field.label()).width(Length::FillPortion(2)),
                text(value)
                    .width(Length::FillPortion(3))
                    .wrapping(Wrapping::Word),
            ]
            .spacing(12),
        );
    }

    let mut panel = column![text("Metadata").size(16)].spacing(10);
    if view.is_placeholder() {
        panel = panel.push(text("Upload DICOM files to see their metadata").size(13));
    }
    panel.push(table.spacing(6)).into()
}
