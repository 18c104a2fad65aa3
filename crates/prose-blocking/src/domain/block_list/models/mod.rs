// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use block_action::BlockAction;
pub use block_set::BlockSet;

mod block_action;
mod block_set;
