// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;
use std::sync::{Arc, Weak};

use thiserror::Error;
use tracing::{info, warn};

use prose_proc_macros::{DependenciesStruct, InjectDependencies};

use crate::app::deps::{
    DynAppConfig, DynBlockStore, DynNameResolver, DynThreadProvider, DynTimeProvider,
    DynUiDispatcher,
};
use crate::app::dtos::ThreadRow;
use crate::app::services::{RowError, ThreadRowPresenter, ThreadRowPresenterDependencies};
use crate::domain::block_list::models::BlockSet;
use crate::domain::contacts::models::Contact;
use crate::domain::presentation::models::{SearchBarHandle, ViewHandle};
use crate::domain::presentation::services::SelectionDelegate;
use crate::domain::shared::models::PhoneNumber;
use crate::domain::threads::models::Thread;

/// An entry of the selection list.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionItem {
    Thread(Thread),
    /// A contact's phone number for which no conversation exists yet.
    ProspectiveContact {
        contact: Contact,
        recipient_id: PhoneNumber,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Listing,
    Filtering {
        query: String,
    },
    Selected,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionResult {
    Selected(Thread),
    Rejected(SelectionFeedback),
}

/// Explains why a selection was rejected so that the host can inform the user, e.g. by offering
/// to unblock the contact.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionFeedback {
    BlockedContact {
        recipient_id: PhoneNumber,
        display_name: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectionError {
    #[error("The selection has already finished.")]
    AlreadyFinished,
    #[error("There is no item at index {0}.")]
    IndexOutOfRange(usize),
    #[error("The selection delegate is not available anymore.")]
    DelegateUnavailable,
    #[error(transparent)]
    Row(#[from] RowError),
}

/// Drives the list from which the user picks a conversation, either an existing one or a new
/// one with a contact.
///
/// Whether a blocked recipient may be selected is decided by the delegate on every attempt
/// against the current contents of the block store.
#[derive(DependenciesStruct, InjectDependencies)]
pub struct ThreadSelectionController {
    #[inject]
    block_store: DynBlockStore,
    #[inject]
    config: DynAppConfig,
    #[inject]
    name_resolver: DynNameResolver,
    #[inject]
    thread_provider: DynThreadProvider,
    #[inject]
    time_provider: DynTimeProvider,
    #[inject]
    ui_dispatcher: DynUiDispatcher,
    #[internal]
    delegate: Option<Weak<dyn SelectionDelegate>>,
    #[internal]
    items: Vec<SelectionItem>,
    #[internal]
    state: SelectionState,
    #[internal]
    header: Option<Option<ViewHandle>>,
}

impl ThreadSelectionController {
    /// The controller never upgrades the delegate for longer than a single call.
    pub fn set_delegate(&mut self, delegate: Weak<dyn SelectionDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Replaces the list's contents. Contacts are listed with one item per phone number,
    /// except for numbers that already have a conversation in `threads`.
    pub fn set_items(&mut self, threads: Vec<Thread>, contacts: Vec<Contact>) {
        let covered_ids = threads
            .iter()
            .filter_map(Thread::recipient_id)
            .map(|id| id.to_normalized().unwrap_or_else(|| id.clone()))
            .collect::<HashSet<_>>();

        let prospective_items = contacts.into_iter().flat_map(|contact| {
            contact
                .phone_numbers
                .iter()
                .filter(|id| {
                    let normalized = id.to_normalized().unwrap_or_else(|| (*id).clone());
                    !covered_ids.contains(&normalized)
                })
                .map(|id| SelectionItem::ProspectiveContact {
                    contact: contact.clone(),
                    recipient_id: id.clone(),
                })
                .collect::<Vec<_>>()
        });

        self.items = threads
            .into_iter()
            .map(SelectionItem::Thread)
            .chain(prospective_items)
            .collect();
    }

    /// Asks the delegate for a custom header on the first call made while a delegate is set.
    /// Later calls return the header created by that call.
    pub fn present(&mut self, search_bar: &SearchBarHandle) -> Option<ViewHandle> {
        if let Some(header) = &self.header {
            return header.clone();
        }

        let header = self.delegate()?.create_header(search_bar);
        self.header = Some(header.clone());
        header
    }

    /// An empty or blank `text` shows all items, anything else filters them.
    pub fn update_search_text(&mut self, text: &str) -> Result<(), SelectionError> {
        self.ensure_not_finished()?;

        let query = text.trim();
        self.state = if query.is_empty() {
            SelectionState::Listing
        } else {
            SelectionState::Filtering {
                query: query.to_string(),
            }
        };

        Ok(())
    }

    /// The items matching the current search text.
    pub fn visible_items(&self) -> Result<Vec<&SelectionItem>, SelectionError> {
        Ok(self
            .visible_rows()?
            .into_iter()
            .map(|(item, _)| item)
            .collect())
    }

    /// Renders the visible items against a fresh snapshot of the block list.
    pub fn render_rows(&self) -> Result<Vec<ThreadRow>, SelectionError> {
        Ok(self
            .visible_rows()?
            .into_iter()
            .map(|(_, row)| row)
            .collect())
    }

    /// Selects the visible item at `index`. Selecting a blocked recipient is rejected unless
    /// the delegate allows it, in which case the state does not change.
    pub fn select(&mut self, index: usize) -> Result<SelectionResult, SelectionError> {
        self.ensure_not_finished()?;

        let (item, row) = self
            .visible_rows()?
            .into_iter()
            .nth(index)
            .map(|(item, row)| (item.clone(), row))
            .ok_or(SelectionError::IndexOutOfRange(index))?;

        let delegate = self.delegate().ok_or(SelectionError::DelegateUnavailable)?;

        if let Some(recipient_id) = row.recipient_id {
            if self.block_store.is_blocked(&recipient_id) && !delegate.can_select_blocked_contact()
            {
                warn!("Rejecting selection of blocked recipient {recipient_id}.");
                return Ok(SelectionResult::Rejected(
                    SelectionFeedback::BlockedContact {
                        recipient_id,
                        display_name: row.name,
                    },
                ));
            }
        }

        let thread = match item {
            SelectionItem::Thread(thread) => thread,
            SelectionItem::ProspectiveContact { recipient_id, .. } => {
                self.thread_provider.contact_thread(&recipient_id)
            }
        };

        info!("Selected thread {}.", thread.id);
        self.state = SelectionState::Selected;
        delegate.on_select(thread.clone());

        Ok(SelectionResult::Selected(thread))
    }

    pub fn cancel(&mut self) -> Result<(), SelectionError> {
        self.ensure_not_finished()?;
        self.state = SelectionState::Cancelled;
        Ok(())
    }
}

impl ThreadSelectionController {
    fn delegate(&self) -> Option<Arc<dyn SelectionDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    fn ensure_not_finished(&self) -> Result<(), SelectionError> {
        match self.state {
            SelectionState::Selected | SelectionState::Cancelled => {
                Err(SelectionError::AlreadyFinished)
            }
            SelectionState::Listing | SelectionState::Filtering { .. } => Ok(()),
        }
    }

    fn visible_rows(&self) -> Result<Vec<(&SelectionItem, ThreadRow)>, SelectionError> {
        let block_set = self.block_store.snapshot();
        let query = match &self.state {
            SelectionState::Filtering { query } => Some(query.as_str()),
            _ => None,
        };

        let mut rows = Vec::with_capacity(self.items.len());

        for item in &self.items {
            let row = self.render_row(item, &block_set)?;

            if query.map_or(true, |query| row_matches(&row, query)) {
                rows.push((item, row));
            }
        }

        Ok(rows)
    }

    fn render_row(&self, item: &SelectionItem, block_set: &BlockSet) -> Result<ThreadRow, RowError> {
        let mut presenter = ThreadRowPresenter::from(ThreadRowPresenterDependencies {
            config: self.config.clone(),
            time_provider: self.time_provider.clone(),
            ui_dispatcher: self.ui_dispatcher.clone(),
        });

        let row = match item {
            SelectionItem::Thread(thread) => {
                presenter.configure_from_thread(thread, self.name_resolver.as_ref(), block_set)?
            }
            SelectionItem::ProspectiveContact {
                contact,
                recipient_id,
            } => presenter.configure_from_prospective_contact(
                contact,
                recipient_id,
                self.name_resolver.as_ref(),
                block_set.contains(recipient_id),
            )?,
        };

        Ok(row.clone())
    }
}

/// Case-insensitive substring match against the name and phone number of a row. If the query
/// contains digits, they are also matched against the digits of the phone number so that
/// formatting does not matter.
fn row_matches(row: &ThreadRow, query: &str) -> bool {
    let query = query.to_lowercase();

    if row.name.to_lowercase().contains(&query) {
        return true;
    }

    let Some(recipient_id) = &row.recipient_id else {
        return false;
    };

    if recipient_id.as_str().to_lowercase().contains(&query) {
        return true;
    }

    // Only queries that look like a (formatted) phone number are compared digit by digit.
    let is_phone_number_query = query.chars().all(|c| {
        c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '.' | '(' | ')' | '/')
    });
    if !is_phone_number_query {
        return false;
    }

    let query_digits = query.chars().filter(char::is_ascii_digit).collect::<String>();
    !query_digits.is_empty() && recipient_id.digits().contains(&query_digits)
}
