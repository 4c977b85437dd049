pub mod audit_action_panel;
pub mod auditor_banner;
pub mod finding_badge;
pub mod finding_indicator;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod qualitrack_title;
pub mod severity_summary;
pub mod toast;

pub use audit_action_panel::AuditActionPanel;
pub use auditor_banner::AuditorBanner;
pub use finding_badge::FindingBadge;
pub use finding_indicator::FindingIndicator;
pub use layout::Layout;
pub use navbar::Navbar;
pub use page::Page;
pub use qualitrack_title::QualitrackTitleButton;
pub use severity_summary::SeveritySummary;
pub use toast::Toast;
