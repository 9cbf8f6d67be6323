pub mod metadata_panel;
pub mod preview_panels;
pub mod results_panel;
pub mod status_bar;
pub mod study_panel;

pub use metadata_panel::metadata_panel;
pub use preview_panels::preview_panels;
pub use results_panel::results_panel;
pub use status_bar::status_line;
pub use study_panel::study_panel;
