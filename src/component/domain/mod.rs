pub mod analysis_snapshot;
pub mod component_record;
pub mod date_format;
pub mod organization_record;
pub mod project_record;
pub mod qualifier;
pub mod visibility;

pub use analysis_snapshot::AnalysisSnapshot;
pub use component_record::ComponentRecord;
pub use organization_record::OrganizationRecord;
pub use project_record::ProjectRecord;
pub use visibility::Visibility;
