// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_utils::id_string;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::PhoneNumber;

id_string!(ContactId);

/// An entry of the system's address book.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub full_name: Option<String>,
    pub phone_numbers: Vec<PhoneNumber>,
}

impl Contact {
    pub fn new(id: impl Into<ContactId>) -> Self {
        Self {
            id: id.into(),
            full_name: None,
            phone_numbers: vec![],
        }
    }

    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = Some(name.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<PhoneNumber>) -> Self {
        self.phone_numbers.push(phone_number.into());
        self
    }

    /// The full name of the contact if it is set and not blank.
    pub fn name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
