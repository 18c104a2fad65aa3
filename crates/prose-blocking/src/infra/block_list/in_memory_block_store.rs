// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use anyhow::{format_err, Result};
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::block_list::models::BlockSet;
use crate::domain::block_list::repos::BlockStore;
use crate::domain::shared::models::PhoneNumber;

/// A `BlockStore` that keeps the block list in memory only.
#[derive(Default)]
pub struct InMemoryBlockStore {
    blocked_ids: RwLock<HashSet<PhoneNumber>>,
}

impl InMemoryBlockStore {
    pub fn new(blocked_ids: impl IntoIterator<Item = PhoneNumber>) -> Self {
        Self {
            blocked_ids: RwLock::new(BlockSet::new(blocked_ids).iter().cloned().collect()),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl BlockStore for InMemoryBlockStore {
    async fn add_blocked(&self, id: &PhoneNumber) -> Result<()> {
        let id = normalized(id)?;
        self.blocked_ids.write().insert(id);
        Ok(())
    }

    async fn remove_blocked(&self, id: &PhoneNumber) -> Result<()> {
        let id = normalized(id)?;
        self.blocked_ids.write().remove(&id);
        Ok(())
    }

    fn is_blocked(&self, id: &PhoneNumber) -> bool {
        id.to_normalized()
            .map(|id| self.blocked_ids.read().contains(&id))
            .unwrap_or(false)
    }

    fn snapshot(&self) -> BlockSet {
        BlockSet::new(self.blocked_ids.read().iter().cloned())
    }
}

fn normalized(id: &PhoneNumber) -> Result<PhoneNumber> {
    id.to_normalized()
        .ok_or_else(|| format_err!("'{id}' is not a valid phone number."))
}
