// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

#[cfg(not(target_arch = "wasm32"))]
pub type UiJob = Box<dyn FnOnce() + Send>;
#[cfg(target_arch = "wasm32")]
pub type UiJob = Box<dyn FnOnce()>;

/// Runs jobs on the thread that owns the UI. Every callback that ends up mutating views is
/// delivered through a `UiDispatcher`.
pub trait UiDispatcher: SendUnlessWasm + SyncUnlessWasm {
    fn dispatch(&self, job: UiJob);
}
