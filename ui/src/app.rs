use fincontrol_business::Route;
use fincontrol_states::Time;

use crate::pages;
use crate::state::State;
use crate::widgets;
use crate::widgets::users::poll_user_action;

pub struct AdminApp {
    state: State,
}

impl AdminApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for AdminApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply state written by background commands since last frame.
        self.state.ctx.sync();
        self.state.ctx.state_mut::<Time>().set_now(chrono::Utc::now());

        // Turn settled command outcomes into toasts/navigation exactly once.
        poll_user_action(&mut self.state.ctx);
        pages::poll_register(&mut self.state.ctx);
        pages::poll_forgot_password(&mut self.state.ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("FinControl Admin");
                ui.separator();
                let route = *self.state.ctx.state_ref::<Route>();
                if ui.selectable_label(route == Route::Users, "Users").clicked() {
                    *self.state.ctx.state_mut::<Route>() = Route::Users;
                }
                if ui
                    .selectable_label(route == Route::Register, "Register")
                    .clicked()
                {
                    *self.state.ctx.state_mut::<Route>() = Route::Register;
                }
                if ui
                    .selectable_label(route == Route::RememberPassword, "Recover Password")
                    .clicked()
                {
                    *self.state.ctx.state_mut::<Route>() = Route::RememberPassword;
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match *self.state.ctx.state_ref::<Route>() {
                Route::Users => pages::users_page(&mut self.state.ctx, ui),
                Route::Register => pages::register_page(&mut self.state.ctx, ui),
                Route::RememberPassword => {
                    pages::remember_password_page(&mut self.state.ctx, ui);
                }
            }
        });

        widgets::show_toasts(&mut self.state.ctx, ctx);

        // Commands settle on background tasks; keep frames coming so the
        // poll steps observe them promptly.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
