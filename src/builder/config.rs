//! Actor configuration.

use serde::{Deserialize, Serialize};

/// History limit used when none is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Settings applied when an actor is created.
///
/// Deserializes from partial input; missing fields take their defaults.
///
/// ```rust
/// use demeanor::ActorConfig;
///
/// let config: ActorConfig = serde_json::from_str(r#"{ "history_limit": 16 }"#).unwrap();
/// assert_eq!(config.history_limit, Some(16));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Maximum number of transitions kept in history, oldest dropped first.
    /// Defaults to [`DEFAULT_HISTORY_LIMIT`]. `None` keeps every transition,
    /// `Some(0)` turns history off.
    pub history_limit: Option<usize>,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_history_is_bounded() {
        assert_eq!(
            ActorConfig::default().history_limit,
            Some(DEFAULT_HISTORY_LIMIT)
        );
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config: ActorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ActorConfig::default());
    }

    #[test]
    fn null_limit_means_unbounded() {
        let config: ActorConfig = serde_json::from_str(r#"{ "history_limit": null }"#).unwrap();
        assert_eq!(config.history_limit, None);
    }
}
