// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::shared::models::PhoneNumber;
use crate::domain::threads::models::Thread;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ThreadProvider: SendUnlessWasm + SyncUnlessWasm {
    /// Returns the existing 1:1 thread with `recipient_id` or creates a new one.
    fn contact_thread(&self, recipient_id: &PhoneNumber) -> Thread;
}
