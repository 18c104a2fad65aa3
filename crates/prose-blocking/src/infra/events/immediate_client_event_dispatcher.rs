// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::debug;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::{ClientDelegate, ClientEvent};

/// Forwards events to the client's delegate as soon as they are dispatched.
pub struct ImmediateClientEventDispatcher {
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ImmediateClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self { delegate }
    }
}

impl ClientEventDispatcherTrait for ImmediateClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        let Some(delegate) = &self.delegate else {
            debug!("Dropping {event:?} since there is no delegate.");
            return;
        };
        delegate.handle_event(event)
    }
}
