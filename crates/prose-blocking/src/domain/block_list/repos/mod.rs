// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use block_store::BlockStore;

mod block_store;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::block_store::MockBlockStore;
}
