//! Password recovery page.

use egui::{Button, Color32, Ui};
use fincontrol_business::{
    ForgotPasswordCommand, ForgotPasswordCompute, ForgotPasswordInput, ForgotPasswordResult,
    Route, Toasts,
};
use fincontrol_states::{StateCtx, Time};

pub fn remember_password_page(state_ctx: &mut StateCtx, ui: &mut Ui) {
    ui.heading("Recover Password");
    ui.add_space(8.0);
    ui.label("Enter your e-mail and we will send you a recovery link.");
    ui.add_space(8.0);

    let pending = state_ctx.state_ref::<ForgotPasswordCompute>().is_pending();
    let error = match &state_ctx.state_ref::<ForgotPasswordCompute>().result {
        ForgotPasswordResult::Error(message) => Some(message.clone()),
        _ => None,
    };

    let mut send_clicked = false;
    {
        let input = state_ctx.state_mut::<ForgotPasswordInput>();

        ui.horizontal(|ui| {
            ui.label("E-mail:");
            ui.text_edit_singleline(&mut input.email);
        });

        if let Some(error) = &error {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        }
        if pending {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Sending...");
            });
        }

        ui.add_space(12.0);
        if ui.add_enabled(!pending, Button::new("Send")).clicked() {
            send_clicked = true;
        }
    }

    if send_clicked {
        state_ctx.dispatch::<ForgotPasswordCommand>();
    }
}

/// Consume a settled recovery outcome exactly once: toast and go home.
pub fn poll_forgot_password(state_ctx: &mut StateCtx) {
    let result = state_ctx.state_ref::<ForgotPasswordCompute>().result.clone();
    if let ForgotPasswordResult::Success(message) = result {
        let now = *state_ctx.state_ref::<Time>().as_ref();
        state_ctx.state_mut::<Toasts>().push_success(message, now);
        state_ctx.state_mut::<ForgotPasswordCompute>().reset();
        *state_ctx.state_mut::<Route>() = Route::Users;
    }
}
