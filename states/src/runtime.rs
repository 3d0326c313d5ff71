use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Handle, Runtime};

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Spawn a command future.
///
/// Inside an existing tokio context (e.g. `#[tokio::test]`) the ambient
/// runtime is reused so test time control and shutdown behave as expected.
/// Outside one (the eframe event loop), a process-wide multi-thread
/// runtime is created lazily on first use.
pub fn spawn(fut: impl Future<Output = ()> + Send + 'static) {
    if let Ok(handle) = Handle::try_current() {
        handle.spawn(fut);
        return;
    }

    RUNTIME
        .get_or_init(|| {
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("failed to build command runtime")
        })
        .spawn(fut);
}
