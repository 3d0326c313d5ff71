use std::time::Duration;

use egui::Ui;
use egui_kittest::Harness;
use fincontrol_ui::pages::users_page;
use fincontrol_ui::state::State;
use fincontrol_ui::widgets::users::poll_user_action;
use wiremock::MockServer;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn users_app(ui: &mut Ui, state: &mut State) {
    state.ctx.sync();
    poll_user_action(&mut state.ctx);
    users_page(&mut state.ctx, ui);
}

/// Harness running the users page against a mock service.
pub fn users_harness(server: &MockServer) -> Harness<'static, State> {
    let state = State::test(server.uri());
    Harness::new_ui_state(users_app, state)
}

/// Step frames (letting background tasks breathe) until the predicate
/// holds, or panic after a few seconds.
pub async fn pump_until(
    harness: &mut Harness<'static, State>,
    description: &str,
    mut predicate: impl FnMut(&State) -> bool,
) {
    for _ in 0..300 {
        harness.step();
        if predicate(harness.state()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for: {description}");
}
