use crate::components::segmented_toggle::SidePanel;
use crate::model::StudySlot;
use crate::workflow::{IngestEvent, ScreenUpdate};
use iced::widget::image::Handle;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    Upload,
    ProcessRecent,
    StudyUpload,
    StudyListing,
    ReportDownload,
}

#[derive(Debug, Clone)]
pub enum Message {
    PickFiles,
    FilesPicked(Option<Vec<PathBuf>>),
    Ingest(IngestEvent),
    ProcessRecent,
    Screen(ScreenUpdate),
    WorkflowFinished(Workflow),
    PreviewLoaded {
        generation: u64,
        index: usize,
        image: Result<Handle, String>,
    },
    PickStudyPdf(StudySlot),
    StudyPdfPicked(StudySlot, Option<PathBuf>),
    SubmitStudy,
    RefreshStudies,
    SaveReport,
    ReportTargetChosen(Option<PathBuf>),
    SelectSidePanel(SidePanel),
}
