// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use thread_row::{BlockedRowFields, RowPhase, ThreadRow};

pub use crate::domain::block_list::models::{BlockAction, BlockSet};
pub use crate::domain::contacts::models::{Contact, ContactId, Identity};
pub use crate::domain::presentation::models::{
    ConfirmationChoice, ConfirmationPrompt, SearchBarHandle, ViewHandle,
};
pub use crate::domain::shared::models::PhoneNumber;
pub use crate::domain::threads::models::{Thread, ThreadId, ThreadKind, ThreadState};

mod thread_row;
