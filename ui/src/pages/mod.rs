pub mod register_page;
pub mod remember_password_page;
pub mod users_page;

pub use register_page::{poll_register, register_page};
pub use remember_password_page::{poll_forgot_password, remember_password_page};
pub use users_page::users_page;
