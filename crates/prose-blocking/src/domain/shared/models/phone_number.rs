// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_utils::id_string;

id_string!(
    /// A phone number used as the identifier of a recipient. Values that participate in
    /// block list lookups should be created via `PhoneNumber::normalized`.
    PhoneNumber
);

impl PhoneNumber {
    /// Strips formatting characters (whitespace, `-`, `.`, `(`, `)`, `/`) and keeps a single
    /// leading `+` followed by digits. Returns `None` when `raw` contains any other character or
    /// no digit at all.
    pub fn normalized(raw: &str) -> Option<Self> {
        let mut normalized = String::with_capacity(raw.len());

        for c in raw.trim().chars() {
            match c {
                '+' if normalized.is_empty() => normalized.push(c),
                '0'..='9' => normalized.push(c),
                '-' | '.' | '(' | ')' | '/' => continue,
                c if c.is_whitespace() => continue,
                _ => return None,
            }
        }

        normalized
            .chars()
            .any(|c| c.is_ascii_digit())
            .then_some(PhoneNumber(normalized))
    }

    /// Returns the normalized form of `self` or `None` if it isn't a valid phone number.
    pub fn to_normalized(&self) -> Option<Self> {
        Self::normalized(&self.0)
    }

    /// The digits of the number without any leading `+`.
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}
