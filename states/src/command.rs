use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{State, Updater};

/// A read-only clone of every registered state, taken at dispatch time.
///
/// Commands run on the async runtime and must not borrow the live
/// `StateCtx`, so they get this instead.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub(crate) fn insert(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    /// Get a clone of the snapshotted `T`.
    ///
    /// # Panics
    /// Panics if `T` was never registered on the dispatching `StateCtx`;
    /// that is a wiring bug, not a runtime condition.
    pub fn state<T: State + Clone>(&self) -> T {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
            .unwrap_or_else(|| panic!("state snapshot missing for {}", type_name::<T>()))
    }
}

/// A manual-only side effect.
///
/// Commands are the only place network IO is allowed: they are dispatched
/// explicitly via `StateCtx::dispatch`, receive a [`CommandSnapshot`] and
/// an [`Updater`], and publish results back as whole replacement states.
/// The returned future is spawned on the shared runtime; the token allows
/// cooperative cancellation.
pub trait Command: Default {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}
