pub mod formatting;

pub use formatting::{file_label, prediction_line, raw_value_line, study_line, truncate_for_display};
