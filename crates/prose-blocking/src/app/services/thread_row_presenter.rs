// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::warn;

use prose_proc_macros::{DependenciesStruct, InjectDependencies};
use prose_wasm_utils::{sleep, spawn};

use crate::app::deps::{DynAppConfig, DynTimeProvider, DynUiDispatcher};
use crate::app::dtos::{RowPhase, ThreadRow};
use crate::domain::block_list::models::BlockSet;
use crate::domain::contacts::models::Contact;
use crate::domain::contacts::services::{display_name_or_id, NameResolver};
use crate::domain::presentation::services::UiJob;
use crate::domain::shared::models::PhoneNumber;
use crate::domain::threads::models::{Thread, ThreadKind, ThreadState};

const BLOCKED_BADGE: &str = "Blocked";
const UNNAMED_GROUP_NAME: &str = "New Group";
const MAX_UNREAD_COUNT: u32 = 99;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RowError {
    #[error("The row is disappearing and cannot be configured before the animation finished.")]
    RowDisappearing,
}

/// Renders a conversation list row either from an existing thread or from a contact for which
/// no thread exists yet. The blocked state of a row is always taken from the block set (or
/// value) passed in at configuration time.
#[derive(DependenciesStruct, InjectDependencies)]
pub struct ThreadRowPresenter {
    #[inject]
    config: DynAppConfig,
    #[inject]
    time_provider: DynTimeProvider,
    #[inject]
    ui_dispatcher: DynUiDispatcher,
    #[internal]
    row: ThreadRow,
    #[internal]
    phase: Arc<Mutex<RowPhase>>,
}

impl ThreadRowPresenter {
    pub fn configure_from_thread(
        &mut self,
        thread: &Thread,
        name_resolver: &dyn NameResolver,
        block_set: &BlockSet,
    ) -> Result<&ThreadRow, RowError> {
        self.prepare_for_reuse()?;

        let (name, recipient_id, is_blocked) = match &thread.kind {
            ThreadKind::Contact { recipient_id } => (
                display_name_or_id(name_resolver, recipient_id),
                Some(recipient_id.clone()),
                block_set.contains(recipient_id),
            ),
            ThreadKind::Group { name, .. } => (
                name.as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .unwrap_or(UNNAMED_GROUP_NAME)
                    .to_string(),
                None,
                false,
            ),
        };

        self.row = ThreadRow {
            thread_id: Some(thread.id.clone()),
            recipient_id,
            name,
            snippet: thread
                .snippet
                .clone()
                .filter(|snippet| !snippet.trim().is_empty()),
            timestamp: thread
                .last_message_at
                .map(|date| format_timestamp(date, self.time_provider.now())),
            unread_badge: format_unread_count(thread.unread_count),
            is_blocked,
            blocked_badge: blocked_badge(is_blocked),
            state: thread.state,
        };

        Ok(&self.row)
    }

    /// Configures the row for a conversation that will be created once the row is selected.
    /// Since there is no thread, snippet, timestamp and unread count stay empty.
    pub fn configure_from_prospective_contact(
        &mut self,
        contact: &Contact,
        recipient_id: &PhoneNumber,
        name_resolver: &dyn NameResolver,
        is_blocked: bool,
    ) -> Result<&ThreadRow, RowError> {
        self.prepare_for_reuse()?;

        let name = contact
            .name()
            .map(ToString::to_string)
            .unwrap_or_else(|| display_name_or_id(name_resolver, recipient_id));

        self.row = ThreadRow {
            thread_id: None,
            recipient_id: Some(recipient_id.clone()),
            name,
            snippet: None,
            timestamp: None,
            unread_badge: None,
            is_blocked,
            blocked_badge: blocked_badge(is_blocked),
            state: ThreadState::Inbox,
        };

        Ok(&self.row)
    }

    pub fn row(&self) -> &ThreadRow {
        &self.row
    }

    pub fn phase(&self) -> RowPhase {
        *self.phase.lock()
    }

    /// Starts the disappear animation immediately. `on_finished` is invoked asynchronously on the
    /// UI dispatcher once the animation is over. The row must not be configured again before that.
    pub fn animate_disappear(&self, on_finished: UiJob) {
        *self.phase.lock() = RowPhase::Disappearing;

        let phase = self.phase.clone();
        let ui_dispatcher = self.ui_dispatcher.clone();
        let duration = self.config.row_disappear_duration;

        spawn(async move {
            sleep(duration).await;
            ui_dispatcher.dispatch(Box::new(move || {
                *phase.lock() = RowPhase::Disappeared;
                on_finished();
            }));
        });
    }

    fn prepare_for_reuse(&self) -> Result<(), RowError> {
        let mut phase = self.phase.lock();

        if *phase == RowPhase::Disappearing {
            warn!("Ignoring attempt to configure a row while it is disappearing.");
            return Err(RowError::RowDisappearing);
        }

        *phase = RowPhase::Visible;
        Ok(())
    }
}

fn blocked_badge(is_blocked: bool) -> Option<String> {
    is_blocked.then(|| BLOCKED_BADGE.to_string())
}

fn format_unread_count(unread_count: u32) -> Option<String> {
    match unread_count {
        0 => None,
        count if count > MAX_UNREAD_COUNT => Some(format!("{MAX_UNREAD_COUNT}+")),
        count => Some(count.to_string()),
    }
}

/// Today's messages show their time, messages of the past six days their weekday and older
/// ones their date.
fn format_timestamp(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days_ago = now
        .date_naive()
        .signed_duration_since(date.date_naive())
        .num_days();

    if days_ago <= 0 {
        date.format("%H:%M").to_string()
    } else if days_ago < 7 {
        date.format("%a").to_string()
    } else {
        date.format("%d/%m/%y").to_string()
    }
}
