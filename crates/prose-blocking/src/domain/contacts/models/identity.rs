// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use thiserror::Error;

use crate::domain::contacts::models::Contact;
use crate::domain::shared::models::PhoneNumber;

/// The unit of blocking. Either an address book contact (which may have multiple phone numbers)
/// or a bare phone number.
#[derive(Debug, PartialEq, Clone)]
pub enum Identity {
    Contact(Contact),
    PhoneNumber(PhoneNumber),
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum IdentityError {
    #[error("The identity does not have any phone number.")]
    NoPhoneNumber,
    #[error("'{0}' is not a valid phone number.")]
    MalformedPhoneNumber(String),
}

/// The normalized, sorted phone numbers of an identity. Two identities with the same key are
/// considered to be the same identity.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct IdentityKey(Vec<PhoneNumber>);

impl IdentityKey {
    pub fn phone_numbers(&self) -> &[PhoneNumber] {
        &self.0
    }
}

impl Identity {
    /// Returns the deduplicated, normalized phone numbers of the identity in their original order.
    pub fn phone_numbers(&self) -> Result<Vec<PhoneNumber>, IdentityError> {
        let raw_numbers = match self {
            Identity::Contact(contact) => contact.phone_numbers.iter().collect::<Vec<_>>(),
            Identity::PhoneNumber(number) => vec![number],
        };

        if raw_numbers.is_empty() {
            return Err(IdentityError::NoPhoneNumber);
        }

        let numbers = raw_numbers
            .into_iter()
            .map(|number| {
                number
                    .to_normalized()
                    .ok_or_else(|| IdentityError::MalformedPhoneNumber(number.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(numbers.into_iter().unique().collect())
    }

    pub fn key(&self) -> Result<IdentityKey, IdentityError> {
        let mut numbers = self.phone_numbers()?;
        numbers.sort();
        Ok(IdentityKey(numbers))
    }

    /// The number used when a single identifier is needed, i.e. as a fallback display name.
    pub fn primary_phone_number(&self) -> Option<&PhoneNumber> {
        match self {
            Identity::Contact(contact) => contact.phone_numbers.first(),
            Identity::PhoneNumber(number) => Some(number),
        }
    }
}

impl From<PhoneNumber> for Identity {
    fn from(value: PhoneNumber) -> Self {
        Identity::PhoneNumber(value)
    }
}

impl From<Contact> for Identity {
    fn from(value: Contact) -> Self {
        Identity::Contact(value)
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Identity::Contact(contact) => write!(f, "contact:{}", contact.id),
            Identity::PhoneNumber(number) => write!(f, "{}", number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_phone_numbers_are_normalized_and_deduplicated() {
        let identity = Identity::from(
            Contact::new("c1")
                .with_phone_number("+1 555 123 4567")
                .with_phone_number("+49 30 1234")
                .with_phone_number("+15551234567"),
        );

        assert_eq!(
            identity.phone_numbers(),
            Ok(vec![
                PhoneNumber::from("+15551234567"),
                PhoneNumber::from("+49301234")
            ])
        );
    }

    #[test]
    fn test_invalid_identities() {
        assert_eq!(
            Identity::from(Contact::new("c1")).phone_numbers(),
            Err(IdentityError::NoPhoneNumber)
        );
        assert_eq!(
            Identity::from(PhoneNumber::from("")).phone_numbers(),
            Err(IdentityError::MalformedPhoneNumber("".to_string()))
        );
    }

    #[test]
    fn test_key_is_order_independent() {
        let a = Identity::from(
            Contact::new("c1")
                .with_phone_number("+222")
                .with_phone_number("+111"),
        );
        let b = Identity::from(
            Contact::new("c2")
                .with_phone_number("+111")
                .with_phone_number("+2 22"),
        );
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), Identity::from(PhoneNumber::from("+111")).key());
    }
}
