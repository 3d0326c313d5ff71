use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

/// Virtual clock state.
///
/// Widgets read "now" from here instead of calling `Utc::now()` directly,
/// which lets tests pin the clock.
#[derive(Debug, Clone, Default)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn set_now(&mut self, now: DateTime<Utc>) {
        self.virt = now;
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}

impl State for Time {
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
