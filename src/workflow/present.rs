use super::screen::{Render, ScreenUpdate};
use crate::model::preview::PANEL_COUNT;
use crate::model::{MetadataRecord, MetadataView, PanelContent};

/// Clears every panel, then writes previews in index order.
///
/// Previews past the last panel are dropped, panels past the last preview
/// stay cleared. A missing reference marks its panel unavailable.
pub fn render_previews<R: Render>(screen: &mut R, previews: &[Option<String>]) {
    screen.render(ScreenUpdate::ClearPanels);

    if previews.len() > PANEL_COUNT {
        log::debug!(
            "Ignoring {} preview(s) beyond the {PANEL_COUNT} panels",
            previews.len() - PANEL_COUNT
        );
    }

    for (index, preview) in previews.iter().take(PANEL_COUNT).enumerate() {
        let content = match preview.as_deref().filter(|reference| !reference.is_empty()) {
            Some(reference) => PanelContent::image(reference),
            None => PanelContent::Unavailable,
        };
        screen.render(ScreenUpdate::Panel { index, content });
    }
}

/// Resets all fields to the placeholder, then fills in the record.
pub fn present_metadata<R: Render>(screen: &mut R, record: Option<&MetadataRecord>) {
    screen.render(ScreenUpdate::Metadata(MetadataView::placeholder()));
    if let Some(record) = record {
        screen.render(ScreenUpdate::Metadata(MetadataView::from_record(record)));
    }
}

/// Settles the fetch of a panel's preview image.
///
/// Fetches started before the panels were last cleared carry an older
/// `generation` and are dropped. A failed fetch marks the panel unavailable.
/// Returns the image to show otherwise.
pub fn settle_preview<R: Render, T>(
    screen: &mut R,
    current_generation: u64,
    generation: u64,
    index: usize,
    image: Result<T, String>,
) -> Option<T> {
    if generation != current_generation {
        log::debug!("Discarding stale preview for panel {index}");
        return None;
    }
    match image {
        Ok(image) => Some(image),
        Err(err) => {
            log::warn!("Preview for panel {index} failed: {err}");
            screen.render(ScreenUpdate::Panel {
                index,
                content: PanelContent::Unavailable,
            });
            None
        }
    }
}

/// Empty panels and placeholder metadata.
pub fn reset_display<R: Render>(screen: &mut R) {
    render_previews(screen, &[]);
    present_metadata(screen, None);
}
