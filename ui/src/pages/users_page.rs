//! The user administration page.

use egui::Ui;
use fincontrol_states::StateCtx;

use crate::widgets::users::users_panel;

pub fn users_page(state_ctx: &mut StateCtx, ui: &mut Ui) {
    ui.heading("Users");
    ui.add_space(8.0);
    users_panel(state_ctx, ui);
}
