use fincontrol_business::{
    BusinessConfig, ConfirmDialog, CreateUserCompute, CreateUserInput, ForgotPasswordCompute,
    ForgotPasswordInput, RegisterCompute, RegisterInput, RosterCompute, Route, Toasts,
    UserActionCompute,
};
use fincontrol_states::{StateCtx, Time};

use crate::widgets::users::UsersPanelState;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

fn register_states(ctx: &mut StateCtx) {
    ctx.add_state(Time::default());
    ctx.add_state(Route::default());
    ctx.add_state(Toasts::default());
    ctx.add_state(RosterCompute::default());
    ctx.add_state(ConfirmDialog::default());
    ctx.add_state(UserActionCompute::default());
    ctx.add_state(CreateUserInput::default());
    ctx.add_state(CreateUserCompute::default());
    ctx.add_state(RegisterInput::default());
    ctx.add_state(RegisterCompute::default());
    ctx.add_state(ForgotPasswordInput::default());
    ctx.add_state(ForgotPasswordCompute::default());
    ctx.add_state(UsersPanelState::default());
}

impl Default for State {
    fn default() -> Self {
        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::default());
        register_states(&mut ctx);
        Self { ctx }
    }
}

impl State {
    /// State wired to an explicit service URL, for tests.
    pub fn test(base_url: String) -> Self {
        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::new(base_url));
        register_states(&mut ctx);
        Self { ctx }
    }
}
