//! UI Components
//!
//! Leptos components for the dashboard shell and its views.

mod app_bar;
mod dashboard_home;
mod data_grid;
mod kanban_board;
mod line_chart;
mod month_calendar;
mod nav_drawer;
mod new_task_form;
mod task_card;
mod theme_toggle;

pub use app_bar::AppBar;
pub use dashboard_home::DashboardHome;
pub use data_grid::TablesView;
pub use kanban_board::KanbanBoard;
pub use line_chart::ChartsView;
pub use month_calendar::CalendarView;
pub use nav_drawer::NavDrawer;
pub use new_task_form::NewTaskForm;
pub use task_card::TaskCard;
pub use theme_toggle::ThemeToggle;
