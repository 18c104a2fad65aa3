// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use prose_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::block_list::models::BlockSet;
use crate::domain::shared::models::PhoneNumber;

/// The persistent set of blocked phone numbers. Persisting and syncing the set is up to the
/// implementation.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait BlockStore: SendUnlessWasm + SyncUnlessWasm {
    async fn add_blocked(&self, id: &PhoneNumber) -> Result<()>;
    async fn remove_blocked(&self, id: &PhoneNumber) -> Result<()>;

    fn is_blocked(&self, id: &PhoneNumber) -> bool;
    fn snapshot(&self) -> BlockSet;
}
