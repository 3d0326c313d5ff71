pub mod modals;
pub mod panel;

pub use modals::{show_confirm_modal, show_create_user_modal};
pub use panel::{poll_user_action, users_panel};

use std::any::Any;

use fincontrol_states::State;

/// UI-local state for the users screen.
#[derive(Debug, Clone, Default)]
pub struct UsersPanelState {
    /// Whether the create-user modal is showing.
    pub create_modal_open: bool,
}

impl State for UsersPanelState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Box<dyn Any + Send> {
        Box::new(self.clone())
    }
}
