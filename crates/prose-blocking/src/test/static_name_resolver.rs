// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use crate::domain::contacts::models::Contact;
use crate::domain::contacts::services::NameResolver;
use crate::domain::shared::models::PhoneNumber;

/// Resolves names from a fixed table. Unknown ids resolve to an empty name.
#[derive(Default)]
pub struct StaticNameResolver {
    names: HashMap<PhoneNumber, String>,
    contacts: Vec<Contact>,
}

impl StaticNameResolver {
    pub fn new<'a>(names: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            names: names
                .into_iter()
                .map(|(id, name)| (PhoneNumber::from(id), name.to_string()))
                .collect(),
            contacts: vec![],
        }
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contacts.push(contact);
        self
    }
}

impl NameResolver for StaticNameResolver {
    fn display_name(&self, id: &PhoneNumber) -> String {
        self.names.get(id).cloned().unwrap_or_default()
    }

    fn resolve_contact(&self, id: &PhoneNumber) -> Option<Contact> {
        self.contacts
            .iter()
            .find(|contact| contact.phone_numbers.contains(id))
            .cloned()
    }
}
