pub mod batch;
pub mod file_handle;
pub mod metadata;
pub mod preview;
pub mod report;
pub mod response;
pub mod risk;
pub mod study;
pub mod upload;

pub use batch::BatchOutcome;
pub use file_handle::FileHandle;
pub use metadata::{MetadataRecord, MetadataView};
pub use preview::PanelContent;
pub use report::{ReportHandle, ReportOutcome, ReportRequest};
pub use risk::{RiskAssessment, RiskLabel};
pub use study::{StudyForm, StudyOutcome, StudySlot, StudySummary};
pub use upload::{UploadOutcome, UploadResult};
