//! Roster table for the user administration screen.
//!
//! Each row offers a context menu of destructive actions; every selection
//! stages the action on the shared [`ConfirmDialog`] rather than running
//! immediately. The poll step turns settled outcomes into toasts and a
//! roster refresh.

use egui::{Color32, Frame, InnerResponse, Margin, Response, RichText, ScrollArea, Stroke, Ui};
use fincontrol_business::{
    ActionOutcome, ConfirmDialog, CreateUserCompute, CreateUserInput, LoadUsersCommand,
    PROTECTED_ADMIN_NAME, PendingAction, RosterCompute, Toasts, UserActionCompute, UserStatus,
    confirm_staged_action,
};
use fincontrol_states::{StateCtx, Time};

use super::UsersPanelState;
use super::modals::{show_confirm_modal, show_create_user_modal};

/// Border color for the table frame (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

const ACTIVE_COLOR: Color32 = Color32::from_rgb(34, 139, 34);
const INACTIVE_COLOR: Color32 = Color32::from_rgb(120, 120, 120);

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Displays the roster table plus its modals.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    // Kick off the first fetch when the screen is shown.
    if state_ctx.state_ref::<RosterCompute>().is_idle() {
        state_ctx.dispatch::<LoadUsersCommand>();
    }

    let is_fetching = state_ctx.state_ref::<RosterCompute>().is_pending();

    let response = ui.vertical(|ui| {
        // Toolbar row: Refresh and Create buttons.
        let (refresh_clicked, create_clicked) = ui
            .horizontal(|ui| {
                let refresh = ui.button("Refresh").clicked();
                let create = ui.button("Create User").clicked();
                if is_fetching {
                    ui.spinner();
                    ui.label("Loading...");
                }
                (refresh, create)
            })
            .inner;

        if refresh_clicked && !is_fetching {
            state_ctx.dispatch::<LoadUsersCommand>();
        }
        if create_clicked {
            state_ctx.state_mut::<CreateUserInput>().clear();
            state_ctx.state_mut::<CreateUserCompute>().reset();
            state_ctx.state_mut::<UsersPanelState>().create_modal_open = true;
        }

        if let Some(error) = state_ctx.state_ref::<RosterCompute>().error_message() {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        }

        ui.add_space(8.0);

        // Collect the staged action after the table loop to keep borrows simple.
        let mut action_to_stage: Option<PendingAction> = None;

        let roster = state_ctx.state_ref::<RosterCompute>();
        Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("users_table")
                        .num_columns(5)
                        .striped(true)
                        .spacing([16.0, 0.0])
                        .min_col_width(60.0)
                        .show(ui, |ui| {
                            header_cell(ui, |ui| {
                                ui.strong("Name");
                            });
                            header_cell(ui, |ui| {
                                ui.strong("Email");
                            });
                            header_cell(ui, |ui| {
                                ui.strong("Role");
                            });
                            header_cell(ui, |ui| {
                                ui.strong("Status");
                            });
                            header_cell(ui, |ui| {
                                ui.strong("Actions");
                            });
                            ui.end_row();

                            for user in roster.users().unwrap_or_default() {
                                data_cell(ui, |ui| {
                                    ui.label(&user.name);
                                });
                                data_cell(ui, |ui| {
                                    ui.label(&user.email);
                                });
                                data_cell(ui, |ui| {
                                    ui.label(RichText::new(user.role.label()).monospace());
                                });
                                data_cell(ui, |ui| {
                                    let color = if user.status.is_active() {
                                        ACTIVE_COLOR
                                    } else {
                                        INACTIVE_COLOR
                                    };
                                    ui.label(
                                        RichText::new(user.status.label()).color(color),
                                    );
                                });
                                data_cell(ui, |ui| {
                                    ui.menu_button("Manage", |ui| {
                                        if ui.button("Delete").clicked() {
                                            action_to_stage = Some(PendingAction::Delete {
                                                user_id: user.user_id,
                                            });
                                            ui.close();
                                        }
                                        // The distinguished admin account keeps its role.
                                        if user.name != PROTECTED_ADMIN_NAME
                                            && ui.button("Change Role").clicked()
                                        {
                                            action_to_stage = Some(PendingAction::ChangeRole {
                                                user: user.clone(),
                                            });
                                            ui.close();
                                        }
                                        let toggle_label = match user.status {
                                            UserStatus::Active => "Deactivate",
                                            UserStatus::Inactive => "Activate",
                                        };
                                        if ui.button(toggle_label).clicked() {
                                            action_to_stage = Some(PendingAction::ToggleStatus {
                                                user: user.clone(),
                                            });
                                            ui.close();
                                        }
                                    });
                                });
                                ui.end_row();
                            }
                        });
                });
            });

        if let Some(action) = action_to_stage {
            state_ctx.state_mut::<ConfirmDialog>().stage(action);
        }
    });

    if state_ctx.state_ref::<ConfirmDialog>().is_open() {
        show_confirm_modal(state_ctx, ui);
    }
    if state_ctx.state_ref::<UsersPanelState>().create_modal_open {
        show_create_user_modal(state_ctx, ui);
    }

    response.response
}

/// Consume a settled action outcome exactly once.
///
/// Success closes the dialog, toasts with the outcome's severity and
/// refreshes the roster; failure toasts an error and leaves the dialog
/// open so the operator can retry with the same staged data.
pub fn poll_user_action(state_ctx: &mut StateCtx) {
    let outcome = state_ctx.state_ref::<UserActionCompute>().outcome.clone();
    let now = *state_ctx.state_ref::<Time>().as_ref();
    match outcome {
        ActionOutcome::Idle | ActionOutcome::InFlight(_) => {}
        ActionOutcome::Succeeded {
            message, severity, ..
        } => {
            state_ctx.state_mut::<Toasts>().push(message, severity, now);
            state_ctx.state_mut::<ConfirmDialog>().close();
            state_ctx.state_mut::<UserActionCompute>().reset();
            state_ctx.dispatch::<LoadUsersCommand>();
        }
        ActionOutcome::Failed { message, .. } => {
            state_ctx.state_mut::<Toasts>().push_error(message, now);
            state_ctx.state_mut::<UserActionCompute>().reset();
        }
    }
}

/// Confirm button handler, shared with the modal.
pub(super) fn dispatch_confirm(state_ctx: &mut StateCtx) {
    confirm_staged_action(state_ctx);
}
