//! UI Components
//!
//! Leptos components for the three widgets and the app shell.

mod delete_confirm_button;
mod expense_detail;
mod expense_form;
mod expense_table;
mod expense_widget;
mod fault_banner;
mod new_todo_form;
mod todo_detail;
mod todo_row;
mod todo_widget;
mod vowel_counter;
mod widget_tab_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use expense_detail::ExpenseDetail;
pub use expense_form::ExpenseForm;
pub use expense_table::ExpenseTable;
pub use expense_widget::ExpenseWidget;
pub use fault_banner::FaultBanner;
pub use new_todo_form::NewTodoForm;
pub use todo_detail::TodoDetail;
pub use todo_row::TodoRow;
pub use todo_widget::TodoWidget;
pub use vowel_counter::VowelCounter;
pub use widget_tab_bar::{Widget, WidgetTabBar};
