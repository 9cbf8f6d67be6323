/// Display panels, one per mammography view, in the order the upload
/// response lists its previews.
pub const PANEL_NAMES: [&str; 4] = ["Left CC", "Left MLO", "Right CC", "Right MLO"];
pub const PANEL_COUNT: usize = PANEL_NAMES.len();

pub const PREVIEW_UNAVAILABLE: &str = "Preview unavailable";

const PREVIEW_ROUTE: &str = "/previews";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelContent {
    #[default]
    Empty,
    Image {
        reference: String,
        location: String,
    },
    Unavailable,
}

impl PanelContent {
    pub fn image(reference: &str) -> Self {
        Self::Image {
            reference: reference.to_string(),
            location: preview_location(reference),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        matches!(self, PanelContent::Empty)
    }
}

pub fn preview_location(reference: &str) -> String {
    format!("{PREVIEW_ROUTE}/{reference}")
}
