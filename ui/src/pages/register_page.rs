//! Profile completion page.
//!
//! Salary fields accept Brazilian currency formatting (`R$ 1.234,56`);
//! parsing happens when the form is submitted.

use egui::{Button, Color32, Ui};
use fincontrol_business::{
    RegisterCommand, RegisterCompute, RegisterInput, RegisterResult, Route, Toasts,
};
use fincontrol_states::{StateCtx, Time};

pub fn register_page(state_ctx: &mut StateCtx, ui: &mut Ui) {
    ui.heading("Complete Registration");
    ui.add_space(8.0);

    let pending = state_ctx.state_ref::<RegisterCompute>().is_pending();
    let error = match &state_ctx.state_ref::<RegisterCompute>().result {
        RegisterResult::Error(message) => Some(message.clone()),
        _ => None,
    };

    let mut submit_clicked = false;
    {
        let input = state_ctx.state_mut::<RegisterInput>();

        ui.horizontal(|ui| {
            ui.label("User id:");
            ui.add(egui::DragValue::new(&mut input.user_id).range(1..=i64::MAX));
        });
        ui.horizontal(|ui| {
            ui.label("Cell:");
            ui.text_edit_singleline(&mut input.cell);
        });
        ui.horizontal(|ui| {
            ui.label("Salary:");
            ui.text_edit_singleline(&mut input.salary);
        });
        ui.horizontal(|ui| {
            ui.label("Other income:");
            ui.text_edit_singleline(&mut input.others);
        });
        ui.horizontal(|ui| {
            ui.label("Photo (base64, optional):");
            ui.text_edit_singleline(&mut input.photo);
        });

        if let Some(error) = &error {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        }
        if pending {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Submitting...");
            });
        }

        ui.add_space(12.0);
        if ui.add_enabled(!pending, Button::new("Submit")).clicked() {
            submit_clicked = true;
        }
    }

    if submit_clicked {
        state_ctx.dispatch::<RegisterCommand>();
    }
}

/// Consume a settled register outcome exactly once: toast and go home.
pub fn poll_register(state_ctx: &mut StateCtx) {
    let result = state_ctx.state_ref::<RegisterCompute>().result.clone();
    if let RegisterResult::Success(message) = result {
        let now = *state_ctx.state_ref::<Time>().as_ref();
        state_ctx.state_mut::<Toasts>().push_success(message, now);
        state_ctx.state_mut::<RegisterCompute>().reset();
        *state_ctx.state_mut::<Route>() = Route::Users;
    }
}
