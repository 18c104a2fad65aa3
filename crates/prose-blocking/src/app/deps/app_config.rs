// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display names in the title of a confirmation alert are truncated after this many
    /// characters.
    pub alert_title_max_chars: usize,
    /// Applies to every single write to the block store.
    pub mutation_retry: RetryPolicy,
    /// The time it takes for a row to disappear.
    #[serde(with = "duration_millis")]
    pub row_disappear_duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// The total number of attempts including the first one. Values below 1 are treated as 1.
    pub max_attempts: u32,
    /// The delay between two attempts.
    #[serde(with = "duration_millis")]
    pub backoff: Duration,
    /// A single attempt that takes longer than this is considered failed.
    #[serde(with = "duration_millis")]
    pub attempt_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            alert_title_max_chars: 50,
            mutation_retry: Default::default(),
            row_disappear_duration: Duration::from_millis(250),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            backoff: Duration::from_millis(250),
            attempt_timeout: Duration::from_secs(10),
        }
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis().try_into().unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_partial_config() {
        let config = serde_json::from_str::<AppConfig>(
            r#"{
                "alert_title_max_chars": 30,
                "mutation_retry": { "backoff": 10 }
            }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            AppConfig {
                alert_title_max_chars: 30,
                mutation_retry: RetryPolicy {
                    max_attempts: 2,
                    backoff: Duration::from_millis(10),
                    attempt_timeout: Duration::from_secs(10),
                },
                row_disappear_duration: Duration::from_millis(250),
            }
        );
    }

    #[test]
    fn test_serializes_durations_as_millis() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        assert_eq!(json["mutation_retry"]["attempt_timeout"], 10_000);
        assert_eq!(json["row_disappear_duration"], 250);
    }
}
