// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use prose_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::presentation::models::{ConfirmationChoice, ConfirmationPrompt};

/// The screen from which a confirmation is presented.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PresentationAnchor: SendUnlessWasm + SyncUnlessWasm {
    /// Returns false once the screen has been dismissed.
    fn is_live(&self) -> bool;

    /// Presents `prompt` and resolves with the user's choice. There is no timeout, the prompt
    /// stays on screen until the user picks an option.
    async fn present_confirmation(&self, prompt: ConfirmationPrompt) -> ConfirmationChoice;
}
