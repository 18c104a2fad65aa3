// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::domain::shared::models::PhoneNumber;
use crate::domain::threads::models::{Thread, ThreadId};
use crate::domain::threads::services::ThreadProvider;

/// Creates 1:1 threads on demand and hands out the same thread for the same recipient.
#[derive(Default)]
pub struct InMemoryThreadProvider {
    threads: Mutex<HashMap<PhoneNumber, Thread>>,
}

impl InMemoryThreadProvider {
    pub fn new(threads: impl IntoIterator<Item = Thread>) -> Self {
        Self {
            threads: Mutex::new(
                threads
                    .into_iter()
                    .filter_map(|thread| Some((key(thread.recipient_id()?), thread)))
                    .collect(),
            ),
        }
    }
}

impl ThreadProvider for InMemoryThreadProvider {
    fn contact_thread(&self, recipient_id: &PhoneNumber) -> Thread {
        self.threads
            .lock()
            .entry(key(recipient_id))
            .or_insert_with(|| {
                Thread::contact(ThreadId::from(Uuid::new_v4().to_string()), recipient_id.clone())
            })
            .clone()
    }
}

fn key(recipient_id: &PhoneNumber) -> PhoneNumber {
    recipient_id
        .to_normalized()
        .unwrap_or_else(|| recipient_id.clone())
}
