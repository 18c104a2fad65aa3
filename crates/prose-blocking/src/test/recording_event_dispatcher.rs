// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::Mutex;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::ClientEvent;

/// Keeps all dispatched events for later inspection.
#[derive(Default)]
pub struct RecordingEventDispatcher {
    events: Mutex<Vec<ClientEvent>>,
}

impl RecordingEventDispatcher {
    pub fn events(&self) -> Vec<ClientEvent> {
        self.events.lock().clone()
    }
}

impl ClientEventDispatcherTrait for RecordingEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        self.events.lock().push(event)
    }
}
