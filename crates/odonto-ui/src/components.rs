mod composer;
mod field_error;
mod message_area;
mod new_case_modal;
mod stats_bar;
mod task_list;
mod task_modal;
mod thread_sidebar;

pub use composer::Composer;
pub use field_error::FieldError;
pub use message_area::MessageArea;
pub use new_case_modal::NewCaseModal;
pub use stats_bar::StatsBar;
pub use task_list::TaskList;
pub use task_modal::{TaskModal, TaskModalMode, TaskModalState};
pub use thread_sidebar::ThreadSidebar;
