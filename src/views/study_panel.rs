use super::status_bar::status_line;
use crate::message::Message;
use crate::model::{StudyForm, StudySlot};
use crate::utils::{file_label, study_line, truncate_for_display};
use crate::workflow::{StatusLine, StudyList};
use iced::widget::{button, column, row, scrollable, text};
use iced::{Alignment, Element, Length};

pub fn study_panel<'a>(
    form: &'a StudyForm,
    status: &'a StatusLine,
    studies: &'a StudyList,
) -> Element<'a, Message> {
    let picker = |slot: StudySlot, label: &'static str| {
        row![
            button(label).on_press(Message::PickStudyPdf(slot)),
            text(file_label(form.slot(slot))).width(Length::Fill),
        ]
        .spacing(10)
        .align_y(Alignment::Center)
    };

    let listing: Element<'a, Message> = match studies {
        StudyList::NotLoaded => text("Studies not loaded yet").into(),
        StudyList::Loaded(list) if list.is_empty() => text("No studies uploaded").into(),
        StudyList::Loaded(list) => scrollable(
            list.iter()
                .fold(column![].spacing(4), |col, study| {
                    col.push(text(study_line(study)).size(13))
                }),
        )
        .height(Length::Fill)
        .into(),
        StudyList::Failed(err) => text(format!(
            "Could not load studies: {}",
            truncate_for_display(err)
        ))
        .into(),
    };

    column![
        text("Study PDFs").size(16),
        picker(StudySlot::First, "Choose PDF 1"),
        picker(StudySlot::Second, "Choose PDF 2"),
        button("Upload PDFs").on_press(Message::SubmitStudy),
        status_line(status),
        row![
            text("Uploaded studies").size(16).width(Length::Fill),
            button("Refresh").on_press(Message::RefreshStudies),
        ]
        .align_y(Alignment::Center),
        listing,
    ]
    .spacing(10)
    .into()
}
