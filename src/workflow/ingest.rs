//! Drop target and file picker, normalized into one upload batch.
//!
//! The window reports a drop as one event per file, so dropped files collect
//! in a pending batch that is released once no further drop arrived for the
//! settle period. A picker selection is complete on arrival. Drag events are
//! consumed here and nowhere else.

use super::screen::{Render, ScreenUpdate};
use crate::model::FileHandle;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestEvent {
    /// Files are dragged over the window.
    Hovered,
    /// The drag left the window without dropping.
    HoverLeft,
    Dropped(PathBuf),
    /// Settle timer for the drop with this sequence number elapsed.
    Settled(u64),
    Picked(Vec<PathBuf>),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Ingest {
    Nothing,
    /// Schedule [`IngestEvent::Settled`] with this sequence number.
    Settling(u64),
    Batch(Vec<FileHandle>),
}

#[derive(Debug, Default)]
pub struct DropZone {
    pending: Vec<FileHandle>,
    sequence: u64,
}

impl DropZone {
    pub fn handle<R: Render>(&mut self, event: IngestEvent, screen: &mut R) -> Ingest {
        match event {
            IngestEvent::Hovered => {
                screen.render(ScreenUpdate::Highlight(true));
                Ingest::Nothing
            }
            IngestEvent::HoverLeft => {
                screen.render(ScreenUpdate::Highlight(false));
                Ingest::Nothing
            }
            IngestEvent::Dropped(path) => {
                screen.render(ScreenUpdate::Highlight(false));
                self.pending.push(FileHandle::from_path(path));
                self.sequence += 1;
                Ingest::Settling(self.sequence)
            }
            IngestEvent::Settled(sequence) => {
                if sequence != self.sequence || self.pending.is_empty() {
                    return Ingest::Nothing;
                }
                let batch = std::mem::take(&mut self.pending);
                log::info!("Drop settled with {} file(s)", batch.len());
                Ingest::Batch(batch)
            }
            IngestEvent::Picked(paths) => {
                log::info!("Picker selected {} file(s)", paths.len());
                Ingest::Batch(paths.into_iter().map(FileHandle::from_path).collect())
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::screen::Screen;

    fn names(ingest: Ingest) -> Vec<String> {
        match ingest {
            Ingest::Batch(files) => files.iter().map(|f| f.name().to_string()).collect(),
            other => panic!("expected a batch, got {other:?}"),
        }
    }

    #[test]
    fn hover_highlights_and_leave_clears() {
        let mut zone = DropZone::default();
        let mut screen = Screen::default();

        assert_eq!(zone.handle(IngestEvent::Hovered, &mut screen), Ingest::Nothing);
        assert!(screen.highlighted);
        zone.handle(IngestEvent::Hovered, &mut screen);
        assert!(screen.highlighted);

        zone.handle(IngestEvent::HoverLeft, &mut screen);
        assert!(!screen.highlighted);
    }

    #[test]
    fn drop_clears_highlight_and_batches_after_settle() {
        let mut zone = DropZone::default();
        let mut screen = Screen::default();
        zone.handle(IngestEvent::Hovered, &mut screen);

        let first = zone.handle(IngestEvent::Dropped("/scans/a.dcm".into()), &mut screen);
        assert!(!screen.highlighted);
        let second = zone.handle(IngestEvent::Dropped("/scans/b.dcm".into()), &mut screen);
        assert_eq!(first, Ingest::Settling(1));
        assert_eq!(second, Ingest::Settling(2));

        assert_eq!(zone.handle(IngestEvent::Settled(1), &mut screen), Ingest::Nothing);
        assert_eq!(zone.pending(), 2);

        let batch = zone.handle(IngestEvent::Settled(2), &mut screen);
        assert_eq!(names(batch), vec!["a.dcm", "b.dcm"]);
        assert_eq!(zone.pending(), 0);
        assert_eq!(zone.handle(IngestEvent::Settled(2), &mut screen), Ingest::Nothing);
    }

    #[test]
    fn picker_and_drop_produce_the_same_batch() {
        let mut screen = Screen::default();

        let mut dropped = DropZone::default();
        dropped.handle(IngestEvent::Dropped("/scans/a.dcm".into()), &mut screen);
        dropped.handle(IngestEvent::Dropped("/scans/a.dcm".into()), &mut screen);
        let from_drop = dropped.handle(IngestEvent::Settled(2), &mut screen);

        let mut picked = DropZone::default();
        let from_picker = picked.handle(
            IngestEvent::Picked(vec!["/scans/a.dcm".into(), "/scans/a.dcm".into()]),
            &mut screen,
        );

        assert_eq!(from_drop, from_picker);
    }

    #[test]
    fn empty_selection_is_passed_through() {
        let mut zone = DropZone::default();
        let mut screen = Screen::default();
        assert_eq!(
            zone.handle(IngestEvent::Picked(Vec::new()), &mut screen),
            Ingest::Batch(Vec::new())
        );
    }
}
