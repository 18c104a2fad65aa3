// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use prose_utils::id_string;

use crate::domain::shared::models::PhoneNumber;

id_string!(ThreadId);

/// A conversation.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub kind: ThreadKind,
    pub snippet: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub unread_count: u32,
    pub state: ThreadState,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum ThreadKind {
    /// A 1:1 conversation with `recipient_id`.
    Contact { recipient_id: PhoneNumber },
    Group {
        name: Option<String>,
        member_ids: Vec<PhoneNumber>,
    },
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Display)]
pub enum ThreadState {
    #[default]
    Inbox,
    Archived,
}

impl Thread {
    pub fn contact(id: impl Into<ThreadId>, recipient_id: impl Into<PhoneNumber>) -> Self {
        Self::new(
            id,
            ThreadKind::Contact {
                recipient_id: recipient_id.into(),
            },
        )
    }

    pub fn group(id: impl Into<ThreadId>, member_ids: Vec<PhoneNumber>) -> Self {
        Self::new(
            id,
            ThreadKind::Group {
                name: None,
                member_ids,
            },
        )
    }

    fn new(id: impl Into<ThreadId>, kind: ThreadKind) -> Self {
        Self {
            id: id.into(),
            kind,
            snippet: None,
            last_message_at: None,
            unread_count: 0,
            state: ThreadState::Inbox,
        }
    }

    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        if let ThreadKind::Group { name, .. } = &mut self.kind {
            *name = Some(group_name.into());
        }
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_last_message_at(mut self, date: DateTime<Utc>) -> Self {
        self.last_message_at = Some(date);
        self
    }

    pub fn with_unread_count(mut self, unread_count: u32) -> Self {
        self.unread_count = unread_count;
        self
    }

    pub fn with_state(mut self, state: ThreadState) -> Self {
        self.state = state;
        self
    }

    /// The counterpart of a 1:1 conversation. Groups do not have one.
    pub fn recipient_id(&self) -> Option<&PhoneNumber> {
        match &self.kind {
            ThreadKind::Contact { recipient_id } => Some(recipient_id),
            ThreadKind::Group { .. } => None,
        }
    }
}
