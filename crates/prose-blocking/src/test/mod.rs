// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use mock_app_dependencies::{
    mock_config, MockBlockActionCoordinatorDependencies, MockThreadRowPresenterDependencies,
    MockThreadSelectionControllerDependencies,
};
pub use recording_event_dispatcher::RecordingEventDispatcher;
pub use scripted_block_store::ScriptedBlockStore;
pub use scripted_presentation_anchor::ScriptedPresentationAnchor;
pub use static_name_resolver::StaticNameResolver;

mod recording_event_dispatcher;
mod scripted_block_store;
mod static_name_resolver;

pub mod mocks {
    pub use crate::app::event_handlers::MockClientEventDispatcherTrait;
    pub use crate::domain::block_list::repos::mocks::*;
    pub use crate::domain::contacts::services::mocks::*;
    pub use crate::domain::presentation::services::mocks::*;
    pub use crate::domain::threads::services::mocks::*;
}

#[macro_export]
macro_rules! phone {
    ($number:expr) => {
        $crate::domain::shared::models::PhoneNumber::from($number)
    };
}
