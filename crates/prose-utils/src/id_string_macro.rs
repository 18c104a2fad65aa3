// prose-core-client/prose-utils
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Declares a string-backed identifier type.
///
/// The generated type is ordered, hashable and (de)serializes as a plain string, so it can be
/// used as a key in sets and maps as well as in config and fixture files.
#[macro_export]
macro_rules! id_string {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
            Hash,
            Clone,
            $crate::__serde::Serialize,
            $crate::__serde::Deserialize,
        )]
        #[serde(crate = "prose_utils::__serde", transparent)]
        pub struct $t(String);

        impl $t {
            #[allow(dead_code)]
            pub fn into_inner(self) -> String {
                self.0
            }

            #[allow(dead_code)]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<T> From<T> for $t
        where
            T: Into<String>,
        {
            fn from(s: T) -> $t {
                $t(s.into())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.to_string()))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    id_string!(
        /// Identifier used in tests.
        SampleId
    );

    #[test]
    fn test_lookup_by_str() {
        let ids: HashSet<SampleId> = [SampleId::from("a"), SampleId::from("b")].into();
        assert!(ids.contains("a"));
        assert!(!ids.contains("c"));
    }

    #[test]
    fn test_serializes_transparently() {
        let id = SampleId::from("+15551234567");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"+15551234567\"");
        assert_eq!(
            serde_json::from_str::<SampleId>("\"+15551234567\"").unwrap(),
            id
        );
    }
}
