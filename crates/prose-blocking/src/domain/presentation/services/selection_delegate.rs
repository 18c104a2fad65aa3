// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::presentation::models::{SearchBarHandle, ViewHandle};
use crate::domain::threads::models::Thread;

/// Consulted by `ThreadSelectionController` for its selection policy. The controller only holds
/// a `Weak` reference to its delegate and never extends its lifetime.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SelectionDelegate: SendUnlessWasm + SyncUnlessWasm {
    fn on_select(&self, thread: Thread);
    fn can_select_blocked_contact(&self) -> bool;
    fn create_header(&self, search_bar: &SearchBarHandle) -> Option<ViewHandle>;
}
