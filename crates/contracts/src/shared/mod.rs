pub mod catalog;
pub mod portal_seed;
pub mod portal_state;

pub use catalog::CourseCatalog;
pub use portal_seed::{CompanyProfile, DashboardPlaceholders, PortalSeed};
pub use portal_state::{ActiveView, DashboardSummary, PortalAction, PortalState};
