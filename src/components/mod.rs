pub mod drop_target;
pub mod segmented_toggle;
