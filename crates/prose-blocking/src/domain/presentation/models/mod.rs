// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use confirmation::{ConfirmationChoice, ConfirmationPrompt};
pub use view_handles::{SearchBarHandle, ViewHandle};

mod confirmation;
mod view_handles;
