// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use anyhow::{format_err, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::block_list::models::BlockSet;
use crate::domain::block_list::repos::BlockStore;
use crate::domain::shared::models::PhoneNumber;
use crate::infra::block_list::InMemoryBlockStore;

/// An in-memory `BlockStore` that records all writes and fails on request.
#[derive(Default)]
pub struct ScriptedBlockStore {
    store: InMemoryBlockStore,
    failing_ids: Mutex<HashSet<PhoneNumber>>,
    failing_removals: Mutex<HashSet<PhoneNumber>>,
    remaining_failures: Mutex<u32>,
    add_calls: Mutex<Vec<PhoneNumber>>,
    remove_calls: Mutex<Vec<PhoneNumber>>,
}

impl ScriptedBlockStore {
    pub fn new(blocked_ids: impl IntoIterator<Item = PhoneNumber>) -> Self {
        Self {
            store: InMemoryBlockStore::new(blocked_ids),
            ..Default::default()
        }
    }

    /// The next `count` writes fail regardless of their id.
    pub fn fail_next_writes(&self, count: u32) {
        *self.remaining_failures.lock() = count
    }

    /// Every write for `id` fails.
    pub fn fail_writes_for(&self, id: PhoneNumber) {
        self.failing_ids.lock().insert(id);
    }

    /// Every removal of `id` fails while adding it still succeeds.
    pub fn fail_removals_for(&self, id: PhoneNumber) {
        self.failing_removals.lock().insert(id);
    }

    pub fn add_calls(&self) -> Vec<PhoneNumber> {
        self.add_calls.lock().clone()
    }

    pub fn remove_calls(&self) -> Vec<PhoneNumber> {
        self.remove_calls.lock().clone()
    }

    fn check_failure(&self, id: &PhoneNumber) -> Result<()> {
        if self.failing_ids.lock().contains(id) {
            return Err(format_err!("Store rejected write for {id}."));
        }

        let mut remaining_failures = self.remaining_failures.lock();
        if *remaining_failures > 0 {
            *remaining_failures -= 1;
            return Err(format_err!("Store unreachable."));
        }

        Ok(())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl BlockStore for ScriptedBlockStore {
    async fn add_blocked(&self, id: &PhoneNumber) -> Result<()> {
        self.add_calls.lock().push(id.clone());
        self.check_failure(id)?;
        self.store.add_blocked(id).await
    }

    async fn remove_blocked(&self, id: &PhoneNumber) -> Result<()> {
        self.remove_calls.lock().push(id.clone());
        if self.failing_removals.lock().contains(id) {
            return Err(format_err!("Store rejected removal of {id}."));
        }
        self.check_failure(id)?;
        self.store.remove_blocked(id).await
    }

    fn is_blocked(&self, id: &PhoneNumber) -> bool {
        self.store.is_blocked(id)
    }

    fn snapshot(&self) -> BlockSet {
        self.store.snapshot()
    }
}
