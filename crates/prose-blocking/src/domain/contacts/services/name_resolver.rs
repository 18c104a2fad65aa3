// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::contacts::models::Contact;
use crate::domain::shared::models::PhoneNumber;

/// Looks up names in the contacts directory.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait NameResolver: SendUnlessWasm + SyncUnlessWasm {
    /// Returns the name to display for `id`. May be empty if nothing is known about `id`.
    fn display_name(&self, id: &PhoneNumber) -> String;
    fn resolve_contact(&self, id: &PhoneNumber) -> Option<Contact>;
}

/// Returns the display name of `id` or `id` itself if no (printable) name is known.
pub fn display_name_or_id(resolver: &dyn NameResolver, id: &PhoneNumber) -> String {
    let name = resolver.display_name(id);

    if name.chars().all(|c| c.is_whitespace() || c.is_control()) {
        return id.to_string();
    }
    name
}
