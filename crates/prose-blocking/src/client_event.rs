// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::block_list::models::BlockAction;
use crate::domain::shared::models::PhoneNumber;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Phone numbers were blocked or unblocked. Dispatched once per action after all of its
    /// writes succeeded.
    BlockListChanged { ids: Vec<PhoneNumber> },

    /// A block or unblock action failed and was rolled back. The block list is unchanged.
    BlockActionFailed {
        ids: Vec<PhoneNumber>,
        action: BlockAction,
        reason: String,
    },
}
