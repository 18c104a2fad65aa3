// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::ClientEvent;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: SendUnlessWasm + SyncUnlessWasm {
    fn dispatch_event(&self, event: ClientEvent);
}
