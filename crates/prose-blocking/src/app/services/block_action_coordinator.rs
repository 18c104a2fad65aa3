// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use futures::channel::oneshot;
use futures::future::{join_all, Shared};
use itertools::Itertools;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, error, info, warn, Instrument, Span};

use prose_proc_macros::{DependenciesStruct, InjectDependencies};
use prose_wasm_utils::{sleep, spawn, timeout, PinnedFuture, ProseFutureExt};

use crate::app::deps::{
    DynAppConfig, DynBlockStore, DynClientEventDispatcher, DynNameResolver,
    DynPresentationAnchor, DynUiDispatcher,
};
use crate::domain::block_list::models::BlockAction;
use crate::domain::contacts::models::{Identity, IdentityError, IdentityKey};
use crate::domain::presentation::models::{ConfirmationChoice, ConfirmationPrompt};
use crate::domain::shared::models::PhoneNumber;
use crate::domain::shared::utils::{
    format_display_name_for_alert_message, format_display_name_for_alert_title,
};
use crate::ClientEvent;

/// Receives the block state of an identity once an action finished or failed.
#[cfg(not(target_arch = "wasm32"))]
pub type BlockActionCompletion = Box<dyn FnOnce(bool) + Send>;
#[cfg(target_arch = "wasm32")]
pub type BlockActionCompletion = Box<dyn FnOnce(bool)>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BlockActionError {
    #[error("The user cancelled the action.")]
    UserCancelled,
    #[error(transparent)]
    InvalidIdentity(#[from] IdentityError),
    #[error("The screen to present the confirmation from is not available anymore.")]
    InvalidContext,
    #[error("Failed to update the block list. {reason}")]
    MutationFailed {
        /// The block state in effect after the failure. This is the state before the action
        /// unless reverting already written numbers failed as well.
        is_blocked: bool,
        reason: String,
    },
    #[error("The action stopped before it finished.")]
    Interrupted,
}

type PendingBlockAction = Shared<PinnedFuture<Result<bool, BlockActionError>>>;

#[derive(Clone)]
struct InFlightAction {
    id: u64,
    result: PendingBlockAction,
}

#[derive(Default)]
struct InFlightState {
    next_id: u64,
    by_identity: HashMap<IdentityKey, InFlightAction>,
    by_phone_number: HashMap<PhoneNumber, InFlightAction>,
}

#[derive(Default, Clone)]
struct InFlightActions(Arc<Mutex<InFlightState>>);

impl InFlightActions {
    fn remove(&self, id: u64) {
        let mut state = self.0.lock();
        state.by_identity.retain(|_, action| action.id != id);
        state.by_phone_number.retain(|_, action| action.id != id);
    }
}

/// Asks the user for confirmation before blocking or unblocking an identity and applies the
/// change to the block store.
///
/// Requests for an identity that already has an action in flight join the pending action
/// instead of presenting another confirmation. All callers then receive the same result.
/// A request for a different identity that shares a phone number with a pending action waits
/// for that action to finish before it presents its own confirmation.
///
/// Actions run on a spawned task, so an action completes even when all of its callers went
/// away. Requests must therefore be made from within a runtime.
#[derive(DependenciesStruct, InjectDependencies)]
pub struct BlockActionCoordinator {
    #[inject]
    block_store: DynBlockStore,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    config: DynAppConfig,
    #[inject]
    name_resolver: DynNameResolver,
    #[inject]
    ui_dispatcher: DynUiDispatcher,
    #[internal]
    in_flight: InFlightActions,
}

impl BlockActionCoordinator {
    /// Resolves with the block state of `identity` after the action. `on_complete` is invoked on
    /// the UI dispatcher when the action was applied or failed (with the unchanged state in that
    /// case). It is not invoked when the user cancels or the request is rejected.
    #[tracing::instrument(skip_all, fields(identity = %identity))]
    pub async fn request_block(
        &self,
        identity: Identity,
        anchor: DynPresentationAnchor,
        on_complete: Option<BlockActionCompletion>,
    ) -> Result<bool, BlockActionError> {
        self.request(BlockAction::Block, identity, anchor, on_complete)
            .await
    }

    /// See `request_block`.
    #[tracing::instrument(skip_all, fields(identity = %identity))]
    pub async fn request_unblock(
        &self,
        identity: Identity,
        anchor: DynPresentationAnchor,
        on_complete: Option<BlockActionCompletion>,
    ) -> Result<bool, BlockActionError> {
        self.request(BlockAction::Unblock, identity, anchor, on_complete)
            .await
    }

    pub fn is_in_flight(&self, identity: &Identity) -> bool {
        let Ok(key) = identity.key() else {
            return false;
        };
        self.in_flight.0.lock().by_identity.contains_key(&key)
    }
}

impl BlockActionCoordinator {
    async fn request(
        &self,
        action: BlockAction,
        identity: Identity,
        anchor: DynPresentationAnchor,
        on_complete: Option<BlockActionCompletion>,
    ) -> Result<bool, BlockActionError> {
        let pending_action = match self.pending_action(action, identity, anchor) {
            Ok(pending_action) => pending_action,
            Err(err) => {
                warn!("Rejecting request to {action}. {err}");
                return Err(err);
            }
        };

        let result = pending_action.await;
        self.complete(&result, on_complete);
        result
    }

    fn pending_action(
        &self,
        action: BlockAction,
        identity: Identity,
        anchor: DynPresentationAnchor,
    ) -> Result<PendingBlockAction, BlockActionError> {
        let key = identity.key()?;

        if !anchor.is_live() {
            return Err(BlockActionError::InvalidContext);
        }

        let mut in_flight = self.in_flight.0.lock();

        if let Some(pending_action) = in_flight.by_identity.get(&key) {
            info!("Joining pending block list action for {identity}.");
            return Ok(pending_action.result.clone());
        }

        let preceding_actions = key
            .phone_numbers()
            .iter()
            .filter_map(|id| in_flight.by_phone_number.get(id))
            .unique_by(|pending_action| pending_action.id)
            .map(|pending_action| pending_action.result.clone())
            .collect::<Vec<_>>();

        let (sender, receiver) = oneshot::channel();
        let pending_action = InFlightAction {
            id: in_flight.next_id,
            result: async move {
                receiver
                    .await
                    .unwrap_or(Err(BlockActionError::Interrupted))
            }
            .prose_shared(),
        };
        in_flight.next_id += 1;

        for id in key.phone_numbers() {
            in_flight
                .by_phone_number
                .insert(id.clone(), pending_action.clone());
        }
        in_flight.by_identity.insert(key, pending_action.clone());
        drop(in_flight);

        let transaction = BlockListTransaction {
            block_store: self.block_store.clone(),
            client_event_dispatcher: self.client_event_dispatcher.clone(),
            config: self.config.clone(),
            name_resolver: self.name_resolver.clone(),
        };
        let in_flight_actions = self.in_flight.clone();
        let action_id = pending_action.id;

        spawn(
            async move {
                if !preceding_actions.is_empty() {
                    debug!(
                        "Waiting for {} pending action(s) sharing a phone number with {identity}.",
                        preceding_actions.len()
                    );
                    join_all(preceding_actions).await;
                }

                let result = transaction.run(action, identity, anchor).await;
                in_flight_actions.remove(action_id);
                _ = sender.send(result);
            }
            .instrument(Span::current()),
        );

        Ok(pending_action.result)
    }

    fn complete(
        &self,
        result: &Result<bool, BlockActionError>,
        on_complete: Option<BlockActionCompletion>,
    ) {
        let is_blocked = match result {
            Ok(is_blocked) | Err(BlockActionError::MutationFailed { is_blocked, .. }) => *is_blocked,
            Err(_) => return,
        };

        if let Some(on_complete) = on_complete {
            self.ui_dispatcher
                .dispatch(Box::new(move || on_complete(is_blocked)));
        }
    }
}

struct ApplyFailure {
    error: anyhow::Error,
    is_reverted: bool,
}

/// A single confirmed block or unblock of all phone numbers of an identity.
struct BlockListTransaction {
    block_store: DynBlockStore,
    client_event_dispatcher: DynClientEventDispatcher,
    config: DynAppConfig,
    name_resolver: DynNameResolver,
}

impl BlockListTransaction {
    async fn run(
        self,
        action: BlockAction,
        identity: Identity,
        anchor: DynPresentationAnchor,
    ) -> Result<bool, BlockActionError> {
        let prompt = self.build_prompt(action, &identity);

        if anchor.present_confirmation(prompt).await == ConfirmationChoice::Cancel {
            info!("User cancelled {action} of {identity}.");
            return Err(BlockActionError::UserCancelled);
        }

        let ids = identity.phone_numbers()?;
        let snapshot = self.block_store.snapshot();
        let was_blocked = ids.iter().any(|id| snapshot.contains(id));
        let pending_ids = ids
            .iter()
            .filter(|id| action.requires_write(snapshot.contains(id)))
            .cloned()
            .collect::<Vec<_>>();

        if pending_ids.is_empty() {
            debug!("Block list already reflects {action} of {identity}.");
            return Ok(action.resulting_state());
        }

        if let Err(failure) = self.apply(action, &pending_ids).await {
            let reason = format!("{:#}", failure.error);
            error!("Failed to {action} {identity}. {reason}");

            let is_blocked = if failure.is_reverted {
                was_blocked
            } else {
                let snapshot = self.block_store.snapshot();
                ids.iter().any(|id| snapshot.contains(id))
            };

            self.client_event_dispatcher
                .dispatch_event(ClientEvent::BlockActionFailed {
                    ids: pending_ids,
                    action,
                    reason: reason.clone(),
                });
            return Err(BlockActionError::MutationFailed { is_blocked, reason
            });
        }

        info!(
            "Applied {action} to {} phone number(s) of {identity}.",
            pending_ids.len()
        );
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::BlockListChanged { ids: pending_ids });

        Ok(action.resulting_state())
    }

    /// Writes all `ids` or none of them, unless reverting the already written ones fails too.
    async fn apply(&self, action: BlockAction, ids: &[PhoneNumber]) -> Result<(), ApplyFailure> {
        let mut applied_ids = Vec::with_capacity(ids.len());

        for id in ids {
            if let Err(err) = self.write_with_retry(action, id).await {
                let is_reverted = self.roll_back(action, &applied_ids).await;
                return Err(ApplyFailure {
                    error: err.context(format!("Could not {action} {id}.")),
                    is_reverted,
                });
            }
            applied_ids.push(id);
        }

        Ok(())
    }

    /// Returns false if at least one of `applied_ids` could not be reverted.
    async fn roll_back(&self, action: BlockAction, applied_ids: &[&PhoneNumber]) -> bool {
        let mut is_reverted = true;

        for id in applied_ids.iter().rev() {
            if let Err(err) = self.write_with_retry(action.inverse(), id).await {
                error!("Failed to roll back {action} of {id}. {err:#}");
                is_reverted = false;
            }
        }

        is_reverted
    }

    async fn write_with_retry(&self, action: BlockAction, id: &PhoneNumber) -> Result<()> {
        let policy = &self.config.mutation_retry;
        let max_attempts = policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let result = match timeout(policy.attempt_timeout, self.write(action, id)).await {
                Ok(result) => result,
                Err(elapsed) => Err(elapsed.into()),
            };

            match result {
                Ok(()) => return Ok(()),
                Err(err) if attempt < max_attempts => {
                    warn!(
                        "Attempt {attempt}/{max_attempts} to {action} {id} failed. Retrying in {}ms. {err:#}",
                        policy.backoff.as_millis()
                    );
                    sleep(policy.backoff).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn write(&self, action: BlockAction, id: &PhoneNumber) -> Result<()> {
        match action {
            BlockAction::Block => self.block_store.add_blocked(id).await,
            BlockAction::Unblock => self.block_store.remove_blocked(id).await,
        }
    }

    fn build_prompt(&self, action: BlockAction, identity: &Identity) -> ConfirmationPrompt {
        let display_name = self.display_name(identity);
        let title_name =
            format_display_name_for_alert_title(&display_name, self.config.alert_title_max_chars);
        let message_name = format_display_name_for_alert_message(&display_name);

        match action {
            BlockAction::Block => ConfirmationPrompt {
                action,
                title: format!("Block {title_name}?"),
                message: format!(
                    "{message_name} will no longer be able to call you or send you messages."
                ),
                confirm_label: "Block".to_string(),
                cancel_label: "Cancel".to_string(),
            },
            BlockAction::Unblock => ConfirmationPrompt {
                action,
                title: format!("Unblock {title_name}?"),
                message: format!("{message_name} will be able to call you and send you messages."),
                confirm_label: "Unblock".to_string(),
                cancel_label: "Cancel".to_string(),
            },
        }
    }

    /// Prefers the name of the (resolved) contact, then the display name known to the resolver
    /// and falls back to the raw phone number.
    fn display_name(&self, identity: &Identity) -> String {
        let is_printable = |name: &String| !format_display_name_for_alert_message(name).is_empty();

        let contact_name = match identity {
            Identity::Contact(contact) => contact.name().map(ToString::to_string),
            Identity::PhoneNumber(id) => self
                .name_resolver
                .resolve_contact(id)
                .and_then(|contact| contact.name().map(ToString::to_string)),
        };
        let primary_id = identity.primary_phone_number();

        contact_name
            .filter(is_printable)
            .or_else(|| {
                primary_id
                    .map(|id| self.name_resolver.display_name(id))
                    .filter(is_printable)
            })
            .or_else(|| primary_id.map(ToString::to_string))
            .unwrap_or_default()
    }
}
