//! Dashboard Views
//!
//! Named views reachable from the navigation drawer, addressed by URL hash
//! (`#/tables`, `#/kanban`, ...).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Dashboard,
    Tables,
    Charts,
    Calendar,
    Kanban,
}

impl DashboardView {
    /// Drawer order
    pub const ALL: [DashboardView; 5] = [
        DashboardView::Dashboard,
        DashboardView::Tables,
        DashboardView::Charts,
        DashboardView::Calendar,
        DashboardView::Kanban,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardView::Dashboard => "Dashboard",
            DashboardView::Tables => "Tables",
            DashboardView::Charts => "Charts",
            DashboardView::Calendar => "Calendar",
            DashboardView::Kanban => "Kanban",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            DashboardView::Dashboard => "/",
            DashboardView::Tables => "/tables",
            DashboardView::Charts => "/charts",
            DashboardView::Calendar => "/calendar",
            DashboardView::Kanban => "/kanban",
        }
    }

    /// Link target for the drawer
    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|view| view.path() == normalized)
    }

    /// Resolve a `location.hash` value. Unknown or empty hashes land on the dashboard.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        Self::from_path(path).unwrap_or_default()
    }
}
