//! Business layer for the FinControl admin front-end.
//!
//! Everything that talks to the remote service or carries domain meaning
//! lives here; the `ui` crate only renders these states and dispatches
//! these commands.

mod config;
mod confirm;
mod create_user_compute;
mod forgot_compute;
pub mod http;
mod notifications;
mod register_compute;
mod roster_compute;
mod route;
pub mod users;

pub use config::BusinessConfig;
pub use confirm::{
    ActionKind, ActionOutcome, ConfirmActionCommand, ConfirmDialog, PendingAction,
    UserActionCompute, confirm_staged_action,
};
pub use create_user_compute::{
    CreateUserCommand, CreateUserCompute, CreateUserInput, CreateUserResult,
};
pub use forgot_compute::{
    ForgotPasswordCommand, ForgotPasswordCompute, ForgotPasswordInput, ForgotPasswordResult,
};
pub use notifications::{Severity, Toast, Toasts};
pub use register_compute::{
    RegisterCommand, RegisterCompute, RegisterInput, RegisterResult, parse_currency,
};
pub use roster_compute::{LoadUsersCommand, RosterCompute, RosterResult};
pub use route::Route;
pub use users::{
    PROTECTED_ADMIN_NAME, Role, UserItem, UserStatus,
};
