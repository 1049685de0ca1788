use serde::{Deserialize, Serialize};

/// A completed timed interval tagged with an activity label.
///
/// Serialized form (one element of a session file):
/// `{ "activity": "Study", "start": 1718000000.25, "end": 1718003600.5 }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub activity: String, // never empty
    pub start: f64,       // epoch seconds
    pub end: f64,         // epoch seconds, >= start unless the wall clock went back
}

impl Session {
    pub fn new(activity: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            activity: activity.into(),
            start,
            end,
        }
    }

    /// Length of the interval in seconds (fractional).
    pub fn duration_secs(&self) -> f64 {
        self.end - self.start
    }

    /// Whole elapsed seconds, truncated like the list view shows them.
    pub fn whole_secs(&self) -> i64 {
        self.duration_secs() as i64
    }
}
