// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use thread_provider::ThreadProvider;

mod thread_provider;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::thread_provider::MockThreadProvider;
}
