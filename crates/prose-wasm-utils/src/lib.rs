// prose-wasm-utils/prose-wasm-utils
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::{pin, Pin};
use std::time::Duration;

use futures::future::{select, Either};

pub use future_ext::ProseFutureExt;

mod future_ext;

#[cfg(not(target_arch = "wasm32"))]
pub trait SendUnlessWasm: Send {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send> SendUnlessWasm for T {}

#[cfg(target_arch = "wasm32")]
pub trait SendUnlessWasm {}

#[cfg(target_arch = "wasm32")]
impl<T> SendUnlessWasm for T {}

#[cfg(not(target_arch = "wasm32"))]
pub trait SyncUnlessWasm: Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Sync> SyncUnlessWasm for T {}

#[cfg(target_arch = "wasm32")]
pub trait SyncUnlessWasm {}

#[cfg(target_arch = "wasm32")]
impl<T> SyncUnlessWasm for T {}

#[cfg(target_arch = "wasm32")]
pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T>>>;
#[cfg(not(target_arch = "wasm32"))]
pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub fn spawn<T>(future: T)
where
    T: Future + SendUnlessWasm + 'static,
    T::Output: SendUnlessWasm,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        future.await;
    });
    #[cfg(not(target_arch = "wasm32"))]
    tokio::spawn(future);
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(duration.as_millis().try_into().unwrap_or(u32::MAX))
        .await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Returned by `timeout` when the future did not resolve in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed(pub Duration);

impl Display for Elapsed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Operation timed out after {}ms", self.0.as_millis())
    }
}

impl std::error::Error for Elapsed {}

/// Resolves `future` or fails with `Elapsed` once `duration` has passed, whichever comes first.
/// The future is dropped on timeout.
pub async fn timeout<F: Future>(duration: Duration, future: F) -> Result<F::Output, Elapsed> {
    let future = pin!(future);
    let deadline = pin!(sleep(duration));

    match select(future, deadline).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(Elapsed(duration)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_timeout_resolves_fast_future() {
        let result = timeout(Duration::from_millis(100), async { 42 }).await;
        assert_eq!(result, Ok(42));
    }

    #[tokio::test]
    async fn test_timeout_elapses() {
        let result = timeout(Duration::from_millis(10), async {
            sleep(Duration::from_secs(5)).await;
            42
        })
        .await;
        assert_eq!(result, Err(Elapsed(Duration::from_millis(10))));
    }

    #[tokio::test]
    async fn test_spawn_runs_future() {
        let flag = Arc::new(AtomicBool::new(false));

        {
            let flag = flag.clone();
            spawn(async move { flag.store(true, Ordering::SeqCst) });
        }

        sleep(Duration::from_millis(20)).await;
        assert!(flag.load(Ordering::SeqCst));
    }
}
