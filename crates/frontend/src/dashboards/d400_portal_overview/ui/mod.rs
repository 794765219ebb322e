mod dashboard;

pub use dashboard::PortalDashboard;
