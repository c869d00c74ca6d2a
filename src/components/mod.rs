//! UI Components
//!
//! Reusable Leptos components.

mod account_shell;
mod catalog_view;
mod delete_confirm_button;
mod monkey_card;
mod monkey_form_modal;
mod toast_stack;

pub use account_shell::AccountShell;
pub use catalog_view::CatalogView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use monkey_card::MonkeyCard;
pub use monkey_form_modal::MonkeyFormModal;
pub use toast_stack::ToastStack;
