use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use flume::{Receiver, Sender};
use tokio_util::sync::CancellationToken;

use crate::{Command, CommandSnapshot, State, Updater};

/// Owner of all application state.
///
/// Single-threaded by construction: the UI thread reads and mutates states
/// directly, while async commands publish replacements through the
/// [`Updater`] channel. Call [`StateCtx::sync`] once per frame (before
/// rendering) to apply pending replacements.
pub struct StateCtx {
    storage: BTreeMap<TypeId, Box<dyn State>>,
    send: Sender<(TypeId, Box<dyn State>)>,
    recv: Receiver<(TypeId, Box<dyn State>)>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            storage: BTreeMap::new(),
            send,
            recv,
        }
    }

    /// Register a state. Replaces any previously registered `T`.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// # Panics
    /// Panics if `T` was never registered; that is a wiring bug.
    pub fn state_ref<T: State>(&self) -> &T {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never registered; that is a wiring bug.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", type_name::<T>()))
    }

    /// Mutate `T` in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// A write-handle for async code.
    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Apply all pending replacements published by commands.
    pub fn sync(&mut self) {
        while let Ok((id, boxed)) = self.recv.try_recv() {
            self.storage.insert(id, boxed);
        }
    }

    /// Snapshot every registered state for a command dispatch.
    pub fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::default();
        for (id, state) in &self.storage {
            snap.insert(*id, state.snapshot());
        }
        snap
    }

    /// Dispatch a command: snapshot the current states and spawn its future.
    ///
    /// Dispatch itself never blocks; results arrive through the updater
    /// channel and become visible after the next [`StateCtx::sync`].
    pub fn dispatch<C: Command>(&self) {
        let snap = self.snapshot();
        let cancel = CancellationToken::new();
        let fut = C::default().run(snap, self.updater(), cancel);
        crate::spawn(fut);
    }
}
