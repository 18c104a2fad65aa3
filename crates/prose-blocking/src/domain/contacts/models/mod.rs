// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact::{Contact, ContactId};
pub use identity::{Identity, IdentityError, IdentityKey};

mod contact;
mod identity;
