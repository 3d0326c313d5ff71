//! Modal dialogs for the users screen.

use egui::{Button, Color32, TextEdit, Ui, Window};
use fincontrol_business::{
    ConfirmDialog, CreateUserCommand, CreateUserCompute, CreateUserInput, CreateUserResult,
    LoadUsersCommand, Toasts, UserActionCompute,
};
use fincontrol_states::{StateCtx, Time};

use super::panel::dispatch_confirm;
use super::UsersPanelState;

/// The shared confirmation dialog.
///
/// Both buttons are disabled while the confirmed call is in flight, which
/// blocks double-submission and intent switching until the call settles.
pub fn show_confirm_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let dialog = state_ctx.state_ref::<ConfirmDialog>();
    let (Some(title), Some(description)) = (dialog.title(), dialog.description()) else {
        // Open with nothing staged; nothing sensible to render.
        state_ctx.state_mut::<ConfirmDialog>().close();
        return;
    };
    let in_flight = state_ctx.state_ref::<UserActionCompute>().is_in_flight();

    let mut open = true;
    let mut confirm_clicked = false;
    let mut cancel_clicked = false;

    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(description);
            ui.add_space(12.0);

            if in_flight {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Working...");
                });
                ui.add_space(8.0);
            }

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!in_flight, Button::new("Confirm"))
                    .clicked()
                {
                    confirm_clicked = true;
                }
                if ui.add_enabled(!in_flight, Button::new("Cancel")).clicked() {
                    cancel_clicked = true;
                }
            });
        });

    if confirm_clicked {
        dispatch_confirm(state_ctx);
    }
    if cancel_clicked || !open {
        state_ctx.state_mut::<ConfirmDialog>().cancel();
    }
}

/// The create-user modal.
pub fn show_create_user_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let result = state_ctx.state_ref::<CreateUserCompute>().result.clone();
    if let CreateUserResult::Success(message) = result {
        let now = *state_ctx.state_ref::<Time>().as_ref();
        state_ctx.state_mut::<Toasts>().push_success(message, now);
        state_ctx.state_mut::<CreateUserCompute>().reset();
        state_ctx.state_mut::<CreateUserInput>().clear();
        state_ctx.state_mut::<UsersPanelState>().create_modal_open = false;
        state_ctx.dispatch::<LoadUsersCommand>();
        return;
    }

    let pending = state_ctx.state_ref::<CreateUserCompute>().is_pending();
    let error = match &state_ctx.state_ref::<CreateUserCompute>().result {
        CreateUserResult::Error(message) => Some(message.clone()),
        _ => None,
    };

    let mut open = true;
    let mut create_clicked = false;
    let mut cancel_clicked = false;

    Window::new("Create User")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            let input = state_ctx.state_mut::<CreateUserInput>();

            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut input.name);
            });
            ui.horizontal(|ui| {
                ui.label("Email:");
                ui.text_edit_singleline(&mut input.email);
            });
            ui.horizontal(|ui| {
                ui.label("Password:");
                ui.add(TextEdit::singleline(&mut input.password).password(true));
            });
            ui.horizontal(|ui| {
                ui.label("Confirm:");
                ui.add(TextEdit::singleline(&mut input.confirm_password).password(true));
            });

            let problem = input.validate();

            if let Some(error) = &error {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
            }
            if pending {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Creating...");
                });
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!pending && problem.is_none(), Button::new("Create"))
                    .clicked()
                {
                    create_clicked = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel_clicked = true;
                }
            });
        });

    if create_clicked {
        state_ctx.dispatch::<CreateUserCommand>();
    }
    if cancel_clicked || !open {
        state_ctx.state_mut::<UsersPanelState>().create_modal_open = false;
    }
}
