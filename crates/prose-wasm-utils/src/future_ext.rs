// prose-wasm-utils/prose-wasm-utils
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;

use futures::future::Shared;
use futures::FutureExt;

use crate::{PinnedFuture, SendUnlessWasm};

impl<T: ?Sized> ProseFutureExt for T where T: Future {}

pub trait ProseFutureExt: Future {
    /// Boxes the future into a `PinnedFuture` (which is `Send` except on wasm).
    fn prose_boxed(self) -> PinnedFuture<Self::Output>
    where
        Self: Sized + SendUnlessWasm + 'static,
    {
        Box::pin(self)
    }

    /// Boxes the future and makes it awaitable from multiple places. Every clone of the returned
    /// future resolves to a clone of the same output while the underlying future runs only once.
    fn prose_shared(self) -> Shared<PinnedFuture<Self::Output>>
    where
        Self: Sized + SendUnlessWasm + 'static,
        Self::Output: Clone,
    {
        self.prose_boxed().shared()
    }
}
