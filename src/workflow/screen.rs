//! Display state shared by every workflow.
//!
//! Workflows never touch widgets. They describe each change as a
//! [`ScreenUpdate`] and hand it to a [`Render`] implementation: the GUI
//! forwards updates over a channel, tests apply them to a [`Screen`] directly.

use crate::model::preview::PANEL_COUNT;
use crate::model::{
    FileHandle, MetadataView, PanelContent, ReportHandle, RiskAssessment, StudyForm, StudySlot,
    StudySummary,
};

pub const INSUFFICIENT_PREDICTIONS: &str =
    "Not enough predictions returned to display the fifth value.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Failure,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Failure,
        }
    }
}

/// Content of the results area below the trigger buttons.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultsView {
    #[default]
    Empty,
    Assessment(RiskAssessment),
    InsufficientPredictions,
    RawResponse(String),
    TransportFailure(String),
    UploadWarnings(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StudyList {
    #[default]
    NotLoaded,
    Loaded(Vec<StudySummary>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenUpdate {
    Status(StatusLine),
    StudyStatus(StatusLine),
    Highlight(bool),
    ClearPanels,
    Panel { index: usize, content: PanelContent },
    Metadata(MetadataView),
    Results(ResultsView),
    Report(Option<ReportHandle>),
    StudyFile { slot: StudySlot, file: Option<FileHandle> },
    ClearStudyForm,
    Studies(StudyList),
}

pub trait Render {
    fn render(&mut self, update: ScreenUpdate);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub status: StatusLine,
    pub study_status: StatusLine,
    pub highlighted: bool,
    pub panels: Vec<PanelContent>,
    pub metadata: MetadataView,
    pub results: ResultsView,
    pub report: Option<ReportHandle>,
    pub study_form: StudyForm,
    pub studies: StudyList,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            status: StatusLine::default(),
            study_status: StatusLine::default(),
            highlighted: false,
            panels: vec![PanelContent::Empty; PANEL_COUNT],
            metadata: MetadataView::placeholder(),
            results: ResultsView::Empty,
            report: None,
            study_form: StudyForm::default(),
            studies: StudyList::NotLoaded,
        }
    }
}

impl Screen {
    pub fn apply(&mut self, update: ScreenUpdate) {
        match update {
            ScreenUpdate::Status(status) => self.status = status,
            ScreenUpdate::StudyStatus(status) => self.study_status = status,
            ScreenUpdate::Highlight(highlighted) => self.highlighted = highlighted,
            ScreenUpdate::ClearPanels => self.panels.fill(PanelContent::Empty),
            ScreenUpdate::Panel { index, content } => match self.panels.get_mut(index) {
                Some(panel) => *panel = content,
                None => log::warn!("Ignoring update for panel {index}, only {PANEL_COUNT} exist"),
            },
            ScreenUpdate::Metadata(view) => self.metadata = view,
            ScreenUpdate::Results(results) => self.results = results,
            ScreenUpdate::Report(report) => self.report = report,
            ScreenUpdate::StudyFile { slot, file } => self.study_form.set(slot, file),
            ScreenUpdate::ClearStudyForm => self.study_form = StudyForm::default(),
            ScreenUpdate::Studies(list) => self.studies = list,
        }
    }

    /// Panels that received content during the current cycle.
    #[cfg(test)]
    pub fn written_panels(&self) -> usize {
        self.panels.iter().filter(|panel| !panel.is_empty()).count()
    }
}

impl Render for Screen {
    fn render(&mut self, update: ScreenUpdate) {
        self.apply(update);
    }
}
