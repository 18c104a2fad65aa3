// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::contacts::models::Identity;
use crate::domain::shared::models::PhoneNumber;

/// A point-in-time copy of the blocked phone numbers. Rows must be rendered from a fresh
/// snapshot each time; a `BlockSet` must never be kept around across renders.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockSet(HashSet<PhoneNumber>);

impl BlockSet {
    pub fn new(ids: impl IntoIterator<Item = PhoneNumber>) -> Self {
        Self(
            ids.into_iter()
                .map(|id| id.to_normalized().unwrap_or(id))
                .collect(),
        )
    }

    pub fn contains(&self, id: &PhoneNumber) -> bool {
        if self.0.contains(id) {
            return true;
        }
        id.to_normalized()
            .map(|normalized| self.0.contains(&normalized))
            .unwrap_or(false)
    }

    /// Returns true if any phone number of `identity` is blocked.
    pub fn contains_identity(&self, identity: &Identity) -> bool {
        match identity {
            Identity::Contact(contact) => contact.phone_numbers.iter().any(|id| self.contains(id)),
            Identity::PhoneNumber(id) => self.contains(id),
        }
    }

    pub fn contains_all<'a>(&self, ids: impl IntoIterator<Item = &'a PhoneNumber>) -> bool {
        ids.into_iter().all(|id| self.contains(id))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhoneNumber> {
        self.0.iter()
    }
}

impl FromIterator<PhoneNumber> for BlockSet {
    fn from_iter<T: IntoIterator<Item = PhoneNumber>>(iter: T) -> Self {
        BlockSet::new(iter)
    }
}
