// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BlockAction {
    Block,
    Unblock,
}

impl BlockAction {
    /// The membership state of an identity after the action has been applied.
    pub fn resulting_state(&self) -> bool {
        match self {
            BlockAction::Block => true,
            BlockAction::Unblock => false,
        }
    }

    /// Returns true if a number with the given membership state needs to be written.
    pub fn requires_write(&self, is_blocked: bool) -> bool {
        is_blocked != self.resulting_state()
    }

    /// The action that reverts `self`.
    pub fn inverse(&self) -> Self {
        match self {
            BlockAction::Block => BlockAction::Unblock,
            BlockAction::Unblock => BlockAction::Block,
        }
    }
}
