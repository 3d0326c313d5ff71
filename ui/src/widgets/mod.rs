pub mod toasts;
pub mod users;

pub use toasts::show_toasts;
