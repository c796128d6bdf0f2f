//! Transition history tracking.
//!
//! Every transition that actually changes the active state is recorded as
//! a `TransitionRecord`. The idempotent no-op of re-entering the active
//! state is not a transition and leaves no record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single transition.
///
/// `None` on either side stands for the null state.
///
/// # Example
///
/// ```rust
/// use demeanor::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: None,
///     to: Some("Open".to_string()),
///     timestamp: Utc::now(),
/// };
/// assert!(record.is_entry());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left
    pub from: Option<String>,
    /// The state being entered
    pub to: Option<String>,
    /// When the transition happened
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    pub(crate) fn now(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.map(str::to_owned),
            to: to.map(str::to_owned),
            timestamp: Utc::now(),
        }
    }

    /// True when leaving the null state.
    pub fn is_entry(&self) -> bool {
        self.from.is_none()
    }

    /// True when entering the null state.
    pub fn is_exit(&self) -> bool {
        self.to.is_none()
    }
}

/// Ordered, optionally bounded history of transitions.
///
/// # Example
///
/// ```rust
/// use demeanor::core::{TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let history = TransitionHistory::new()
///     .record(TransitionRecord {
///         from: None,
///         to: Some("Red".to_string()),
///         timestamp: Utc::now(),
///     })
///     .record(TransitionRecord {
///         from: Some("Red".to_string()),
///         to: Some("Green".to_string()),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.path(), vec![None, Some("Red"), Some("Green")]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionHistory {
    transitions: VecDeque<TransitionRecord>,
    limit: Option<usize>,
}

impl TransitionHistory {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that keeps at most `limit` records.
    ///
    /// `None` keeps everything; `Some(0)` keeps nothing.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit,
        }
    }

    /// Maximum number of records kept, `None` if unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append in place, dropping the oldest records beyond the limit.
    pub(crate) fn push(&mut self, transition: TransitionRecord) {
        self.transitions.push_back(transition);
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// States traversed, in order: the first record's origin followed by
    /// the target of every record.
    pub fn path(&self) -> Vec<Option<&str>> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from.as_deref());
        }
        path.extend(self.transitions.iter().map(|t| t.to.as_deref()));
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Iterate over the kept records, oldest first.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &TransitionRecord> {
        self.transitions.iter()
    }

    /// The most recent transition.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.transitions.back()
    }

    /// Number of kept records.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no transition has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hop(from: Option<&str>, to: Option<&str>) -> TransitionRecord {
        TransitionRecord::now(from, to)
    }

    #[test]
    fn new_history_is_empty() {
        let history = TransitionHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = TransitionHistory::new();
        let new_history = history.record(hop(None, Some("A")));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn path_includes_null_endpoints() {
        let history = TransitionHistory::new()
            .record(hop(None, Some("A")))
            .record(hop(Some("A"), Some("B")))
            .record(hop(Some("B"), None));

        assert_eq!(history.path(), vec![None, Some("A"), Some("B"), None]);
    }

    #[test]
    fn limit_drops_oldest_records() {
        let mut history = TransitionHistory::with_limit(Some(2));
        history.push(hop(None, Some("A")));
        history.push(hop(Some("A"), Some("B")));
        history.push(hop(Some("B"), Some("C")));

        assert_eq!(history.len(), 2);
        assert_eq!(history.path(), vec![Some("A"), Some("B"), Some("C")]);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut history = TransitionHistory::with_limit(Some(0));
        history.push(hop(None, Some("A")));

        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let mut history = TransitionHistory::new();
        history.push(TransitionRecord {
            from: None,
            to: Some("A".to_string()),
            timestamp: start,
        });
        history.push(TransitionRecord {
            from: Some("A".to_string()),
            to: None,
            timestamp: start + chrono::Duration::milliseconds(25),
        });

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = TransitionHistory::new().record(hop(None, Some("A")));
        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn entry_and_exit_flags() {
        assert!(hop(None, Some("A")).is_entry());
        assert!(!hop(None, Some("A")).is_exit());
        assert!(hop(Some("A"), None).is_exit());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = TransitionHistory::with_limit(Some(8))
            .record(hop(None, Some("A")))
            .record(hop(Some("A"), None));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: TransitionHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
