// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::AppConfig;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::block_list::repos::BlockStore;
use crate::domain::contacts::services::NameResolver;
use crate::domain::general::services::TimeProvider;
use crate::domain::presentation::services::{PresentationAnchor, UiDispatcher};
use crate::domain::threads::services::ThreadProvider;

pub type DynAppConfig = Arc<AppConfig>;
pub type DynBlockStore = Arc<dyn BlockStore>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynNameResolver = Arc<dyn NameResolver>;
pub type DynPresentationAnchor = Arc<dyn PresentationAnchor>;
pub type DynThreadProvider = Arc<dyn ThreadProvider>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
pub type DynUiDispatcher = Arc<dyn UiDispatcher>;

#[derive(Clone)]
pub struct AppDependencies {
    pub block_store: DynBlockStore,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub config: DynAppConfig,
    pub name_resolver: DynNameResolver,
    pub thread_provider: DynThreadProvider,
    pub time_provider: DynTimeProvider,
    pub ui_dispatcher: DynUiDispatcher,
}
