// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::PhoneNumber;
use crate::domain::threads::models::{ThreadId, ThreadState};

/// The rendered state of a conversation list row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThreadRow {
    /// `None` for rows that represent a conversation which does not exist yet.
    pub thread_id: Option<ThreadId>,
    /// `None` for group conversations.
    pub recipient_id: Option<PhoneNumber>,
    pub name: String,
    pub snippet: Option<String>,
    pub timestamp: Option<String>,
    pub unread_badge: Option<String>,
    pub is_blocked: bool,
    pub blocked_badge: Option<String>,
    pub state: ThreadState,
}

/// The fields of a `ThreadRow` that depend on the block list.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockedRowFields {
    pub is_blocked: bool,
    pub blocked_badge: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPhase {
    #[default]
    Visible,
    /// The disappear animation was started but did not finish yet.
    Disappearing,
    Disappeared,
}

impl ThreadRow {
    pub fn blocked_fields(&self) -> BlockedRowFields {
        BlockedRowFields {
            is_blocked: self.is_blocked,
            blocked_badge: self.blocked_badge.clone(),
        }
    }
}
