// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::{Arc, Weak};

use prose_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::app::deps::AppDependencies;
use crate::app::services::{BlockActionCoordinator, ThreadRowPresenter, ThreadSelectionController};
use crate::client_builder::{BlockingClientBuilder, UndefinedBlockStore, UndefinedNameResolver};
use crate::domain::block_list::models::BlockSet;
use crate::domain::presentation::services::SelectionDelegate;
use crate::ClientEvent;

/// Entry point to the blocking core. Cheap to clone.
#[derive(Clone)]
pub struct BlockingClient {
    inner: Arc<BlockingClientInner>,
}

pub struct BlockingClientInner {
    deps: AppDependencies,
    block_actions: BlockActionCoordinator,
}

/// Receives events about changes to the block list.
pub trait ClientDelegate: SendUnlessWasm + SyncUnlessWasm {
    fn handle_event(&self, event: ClientEvent);
}

impl BlockingClient {
    pub fn builder() -> BlockingClientBuilder<UndefinedBlockStore, UndefinedNameResolver> {
        BlockingClientBuilder::new()
    }

    pub(crate) fn new(deps: AppDependencies) -> Self {
        let block_actions = BlockActionCoordinator::from(&deps);
        Self {
            inner: Arc::new(BlockingClientInner {
                deps,
                block_actions,
            }),
        }
    }
}

impl BlockingClient {
    /// Shared by all callers so that concurrent requests for the same identity are coalesced.
    pub fn block_actions(&self) -> &BlockActionCoordinator {
        &self.inner.block_actions
    }

    /// A fresh copy of the block list. Don't keep it around across renders.
    pub fn block_set(&self) -> BlockSet {
        self.inner.deps.block_store.snapshot()
    }

    pub fn thread_row_presenter(&self) -> ThreadRowPresenter {
        ThreadRowPresenter::from(&self.inner.deps)
    }

    pub fn thread_selection_controller(
        &self,
        delegate: Weak<dyn SelectionDelegate>,
    ) -> ThreadSelectionController {
        let mut controller = ThreadSelectionController::from(&self.inner.deps);
        controller.set_delegate(delegate);
        controller
    }
}

impl Deref for BlockingClient {
    type Target = BlockingClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl BlockingClientInner {
    pub fn deps(&self) -> &AppDependencies {
        &self.deps
    }
}
