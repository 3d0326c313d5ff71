use std::any::TypeId;

use flume::Sender;

use crate::State;

/// Write-handle handed to commands.
///
/// `set` ships a whole replacement value for a state; the owning
/// [`crate::StateCtx`] applies it on the next `sync()`. Sends never block
/// (the channel is unbounded) and a dropped receiver is ignored, so a
/// command finishing after the app shut down is harmless.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<(TypeId, Box<dyn State>)>,
}

impl Updater {
    pub(crate) fn new(send: Sender<(TypeId, Box<dyn State>)>) -> Self {
        Self { send }
    }

    /// Replace the stored `T` wholesale.
    pub fn set<T: State>(&self, value: T) {
        let _ = self.send.send((TypeId::of::<T>(), Box::new(value)));
    }
}
