//! UI Components
//!
//! Reusable Leptos components.

mod add_user_dialog;
mod draft_fields;
mod edit_user_dialog;
mod modal;
mod user_row;
mod user_table;

pub use add_user_dialog::AddUserDialog;
pub use draft_fields::DraftFields;
pub use edit_user_dialog::EditUserDialog;
pub use modal::Modal;
pub use user_row::UserRow;
pub use user_table::UserTable;
