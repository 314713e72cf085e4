pub(crate) mod toast;
pub(crate) mod user_menu;

// Re-export components for convenience
pub use toast::{show_notification, ToastHost, ToastLevel, ToastState};
pub use user_menu::UserMenu;
