//! Tokio Runtime Bridge
//!
//! Views run on their own event loop; backend requests need tokio. This
//! module owns one process-wide runtime and lets synchronous callers hand
//! futures to it.
//!
//! ## Pattern
//!
//! ```text
//! view event (scroll, click)
//!       │
//!       ▼
//! spawn_in_tokio(async { gateway.fetch(...) })
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! result sent back over a channel
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Execute a future in the tokio runtime and wait for the result
///
/// For callers already inside another executor.
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}

/// Spawn a detached task in the tokio runtime
pub fn spawn_in_tokio<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    get_runtime().spawn(future);
}

/// Block on a future synchronously (startup and the CLI only)
///
/// **Warning**: This blocks the current thread and panics if called from
/// inside a tokio runtime.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}
