// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use presentation_anchor::PresentationAnchor;
pub use selection_delegate::SelectionDelegate;
pub use ui_dispatcher::{UiDispatcher, UiJob};

mod presentation_anchor;
mod selection_delegate;
mod ui_dispatcher;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::presentation_anchor::MockPresentationAnchor;
    pub use super::selection_delegate::MockSelectionDelegate;
}
