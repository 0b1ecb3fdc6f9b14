// Anomaly alert history
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::VecDeque;

/// Maximum number of alerts retained.
pub const ALERT_LOG_CAPACITY: usize = 5;

/// One anomaly event as shown in the detection history.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: i64,
    pub message: String,
    pub time: String,
}

/// Bounded newest-first history of anomaly events. Holds at most
/// `ALERT_LOG_CAPACITY` entries; the oldest is evicted on overflow. Every
/// anomaly observation creates a new entry, even at an unchanged score.
#[derive(Debug, Clone, Default)]
pub struct AlertLog {
    entries: VecDeque<Alert>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a new alert. Ids are millisecond timestamps, bumped past the
    /// previous entry so they stay strictly increasing within a session.
    pub fn push(&mut self, message: String, at: DateTime<Local>) {
        let stamp = at.timestamp_millis();
        let id = match self.entries.front() {
            Some(latest) => stamp.max(latest.id + 1),
            None => stamp,
        };
        self.entries.push_front(Alert {
            id,
            message,
            time: at.format("%H:%M:%S").to_string(),
        });
        self.entries.truncate(ALERT_LOG_CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.entries.iter()
    }

    /// Newest-first copy of the log, for rendering.
    pub fn to_vec(&self) -> Vec<Alert> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_newest_first() {
        let mut log = AlertLog::new();
        log.push("first".to_string(), at(1_000));
        log.push("second".to_string(), at(2_000));

        let entries = log.to_vec();
        assert_eq!(entries[0].message, "second");
        assert_eq!(entries[1].message, "first");
    }

    #[test]
    fn test_capacity_bounded_at_five() {
        let mut log = AlertLog::new();
        for i in 0..8 {
            log.push(format!("alert {i}"), at(1_000 * (i + 1)));
            assert!(log.len() <= ALERT_LOG_CAPACITY);
        }
        assert_eq!(log.len(), ALERT_LOG_CAPACITY);

        // Holds the 5 most recent, newest first
        let messages: Vec<_> = log.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["alert 7", "alert 6", "alert 5", "alert 4", "alert 3"]);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut log = AlertLog::new();
        // Same clock reading twice
        log.push("a".to_string(), at(5_000));
        log.push("b".to_string(), at(5_000));

        let entries = log.to_vec();
        assert!(entries[0].id > entries[1].id);
    }

    #[test]
    fn test_duplicate_scores_not_deduplicated() {
        let mut log = AlertLog::new();
        log.push("Leak Detected (Score: 0.3100)".to_string(), at(1_000));
        log.push("Leak Detected (Score: 0.3100)".to_string(), at(2_000));
        assert_eq!(log.len(), 2);
    }
}
