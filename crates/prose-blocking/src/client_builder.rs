// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppDependencies, DynBlockStore, DynNameResolver, DynThreadProvider,
    DynTimeProvider, DynUiDispatcher,
};
use crate::domain::block_list::repos::BlockStore;
use crate::domain::contacts::services::NameResolver;
use crate::domain::general::services::{SystemTimeProvider, TimeProvider};
use crate::domain::threads::services::ThreadProvider;
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::general::InlineUiDispatcher;
use crate::infra::threads::InMemoryThreadProvider;
use crate::{BlockingClient, ClientDelegate};

pub struct UndefinedBlockStore;
pub struct UndefinedNameResolver;

pub struct BlockingClientBuilder<S, N> {
    block_store: S,
    config: AppConfig,
    delegate: Option<Box<dyn ClientDelegate>>,
    name_resolver: N,
    thread_provider: DynThreadProvider,
    time_provider: DynTimeProvider,
    ui_dispatcher: DynUiDispatcher,
}

impl BlockingClientBuilder<UndefinedBlockStore, UndefinedNameResolver> {
    pub(crate) fn new() -> Self {
        BlockingClientBuilder {
            block_store: UndefinedBlockStore,
            config: Default::default(),
            delegate: None,
            name_resolver: UndefinedNameResolver,
            thread_provider: Arc::new(InMemoryThreadProvider::default()),
            time_provider: Arc::new(SystemTimeProvider::default()),
            ui_dispatcher: Arc::new(InlineUiDispatcher::default()),
        }
    }
}

impl<N> BlockingClientBuilder<UndefinedBlockStore, N> {
    pub fn set_block_store<S: BlockStore + 'static>(
        self,
        block_store: S,
    ) -> BlockingClientBuilder<DynBlockStore, N> {
        self.set_shared_block_store(Arc::new(block_store))
    }

    /// Use this variant if the store is also used outside of the client.
    pub fn set_shared_block_store(
        self,
        block_store: DynBlockStore,
    ) -> BlockingClientBuilder<DynBlockStore, N> {
        BlockingClientBuilder {
            block_store,
            config: self.config,
            delegate: self.delegate,
            name_resolver: self.name_resolver,
            thread_provider: self.thread_provider,
            time_provider: self.time_provider,
            ui_dispatcher: self.ui_dispatcher,
        }
    }
}

impl<S> BlockingClientBuilder<S, UndefinedNameResolver> {
    pub fn set_name_resolver<N: NameResolver + 'static>(
        self,
        name_resolver: N,
    ) -> BlockingClientBuilder<S, DynNameResolver> {
        BlockingClientBuilder {
            block_store: self.block_store,
            config: self.config,
            delegate: self.delegate,
            name_resolver: Arc::new(name_resolver),
            thread_provider: self.thread_provider,
            time_provider: self.time_provider,
            ui_dispatcher: self.ui_dispatcher,
        }
    }
}

impl<S, N> BlockingClientBuilder<S, N> {
    pub fn set_thread_provider<P: ThreadProvider + 'static>(mut self, thread_provider: P) -> Self {
        self.thread_provider = Arc::new(thread_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    /// Defaults to an `InlineUiDispatcher`.
    pub fn set_ui_dispatcher(mut self, ui_dispatcher: DynUiDispatcher) -> Self {
        self.ui_dispatcher = ui_dispatcher;
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl BlockingClientBuilder<DynBlockStore, DynNameResolver> {
    pub fn build(self) -> BlockingClient {
        let deps = AppDependencies {
            block_store: self.block_store,
            client_event_dispatcher: Arc::new(ImmediateClientEventDispatcher::new(self.delegate)),
            config: Arc::new(self.config),
            name_resolver: self.name_resolver,
            thread_provider: self.thread_provider,
            time_provider: self.time_provider,
            ui_dispatcher: self.ui_dispatcher,
        };

        BlockingClient::new(deps)
    }
}

