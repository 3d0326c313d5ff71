//! Toast overlay anchored to the top-right corner.

use egui::{Align2, Area, Color32, Frame, Id, Margin, RichText, Stroke};
use fincontrol_business::{Severity, Toasts};
use fincontrol_states::StateCtx;

fn severity_colors(severity: Severity) -> (Color32, Color32) {
    match severity {
        Severity::Success => (Color32::from_rgb(34, 139, 34), Color32::from_rgb(235, 250, 235)),
        Severity::Warning => (Color32::from_rgb(217, 119, 6), Color32::from_rgb(254, 247, 224)),
        Severity::Error => (Color32::from_rgb(185, 28, 28), Color32::from_rgb(253, 236, 236)),
    }
}

/// Render all pending toasts. Clicking the close button dismisses one.
pub fn show_toasts(state_ctx: &mut StateCtx, egui_ctx: &egui::Context) {
    let toasts = state_ctx.state_ref::<Toasts>();
    if toasts.is_empty() {
        return;
    }

    let mut dismiss: Option<usize> = None;

    Area::new(Id::new("toast_overlay"))
        .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
        .show(egui_ctx, |ui| {
            for (index, toast) in toasts.iter().enumerate() {
                let (accent, fill) = severity_colors(toast.severity);
                Frame::NONE
                    .fill(fill)
                    .stroke(Stroke::new(1.0, accent))
                    .inner_margin(Margin::symmetric(10, 8))
                    .corner_radius(4.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(toast.at.format("%H:%M:%S").to_string())
                                    .small()
                                    .weak(),
                            );
                            ui.label(RichText::new(&toast.title).color(accent));
                            if toast.dismissible && ui.small_button("x").clicked() {
                                dismiss = Some(index);
                            }
                        });
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(index) = dismiss {
        state_ctx.state_mut::<Toasts>().dismiss(index);
    }
}
