pub mod d400_portal_overview;

pub use d400_portal_overview::ui::PortalDashboard;
