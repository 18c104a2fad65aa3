// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use name_resolver::{display_name_or_id, NameResolver};

mod name_resolver;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::name_resolver::MockNameResolver;
}
