//! Route state for page navigation.

use std::any::Any;

use fincontrol_states::State;
use serde::{Deserialize, Serialize};

/// Which page the application is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// User administration screen (roster + actions).
    #[default]
    Users,
    /// Self-registration / profile completion.
    Register,
    /// Password recovery.
    RememberPassword,
}

impl State for Route {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Box<dyn Any + Send> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_route_is_users() {
        assert_eq!(Route::default(), Route::Users);
    }
}
