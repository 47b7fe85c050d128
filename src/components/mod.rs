//! UI Components
//!
//! Pages and widgets of the Coopera client.

mod delete_confirm_button;
mod notice;
mod login_page;
mod sidebar;
mod team_list;
mod team_detail;
mod task_form;
mod task_card;
mod kanban_board;
mod stats_panel;

pub use delete_confirm_button::DeleteConfirmButton;
pub use notice::Notice;
pub use login_page::LoginPage;
pub use sidebar::Sidebar;
pub use team_list::TeamList;
pub use team_detail::TeamDetail;
pub use task_form::{TaskForm, TaskFormMode};
pub use task_card::TaskCard;
pub use kanban_board::KanbanBoard;
pub use stats_panel::StatsPanel;
