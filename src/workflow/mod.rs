pub mod ingest;
pub mod present;
pub mod process;
pub mod report;
pub mod screen;
pub mod studies;
pub mod upload;

pub use ingest::{DropZone, Ingest, IngestEvent};
pub use screen::{Render, ResultsView, Screen, ScreenUpdate, StatusLine, StudyList, Tone};
