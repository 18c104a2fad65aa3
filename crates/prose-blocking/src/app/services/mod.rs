// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use block_action_coordinator::{
    BlockActionCompletion, BlockActionCoordinator, BlockActionCoordinatorDependencies,
    BlockActionError,
};
pub use thread_row_presenter::{RowError, ThreadRowPresenter, ThreadRowPresenterDependencies};
pub use thread_selection_controller::{
    SelectionError, SelectionFeedback, SelectionItem, SelectionResult, SelectionState,
    ThreadSelectionController, ThreadSelectionControllerDependencies,
};

mod block_action_coordinator;
mod thread_row_presenter;
mod thread_selection_controller;
