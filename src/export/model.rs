// src/export/model.rs

use crate::models::activity_total::ActivityTotal;
use crate::models::session::Session;
use crate::utils::formatting::{format_hms, human_duration};
use crate::utils::time::to_zoned;
use chrono::FixedOffset;
use serde::Serialize;

/// Flat row for one session.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub activity: String,
    pub start: f64,
    pub end: f64,
    pub start_local: String,
    pub end_local: String,
    pub elapsed: String,
    pub seconds: f64,
}

impl SessionExport {
    pub fn from_session(s: &Session, offset: &FixedOffset) -> Self {
        Self {
            activity: s.activity.clone(),
            start: s.start,
            end: s.end,
            start_local: to_zoned(s.start, offset).to_rfc3339(),
            end_local: to_zoned(s.end, offset).to_rfc3339(),
            elapsed: format_hms(s.whole_secs()),
            seconds: s.duration_secs(),
        }
    }
}

/// Flat row for one activity total.
#[derive(Serialize, Clone, Debug)]
pub struct TotalExport {
    pub activity: String,
    pub sessions: usize,
    pub seconds: f64,
    pub share: String,
    pub duration: String,
}

impl TotalExport {
    pub fn from_total(t: &ActivityTotal, grand_total: f64) -> Self {
        let share = if grand_total > 0.0 {
            t.seconds / grand_total * 100.0
        } else {
            0.0
        };
        Self {
            activity: t.activity.clone(),
            sessions: t.sessions,
            seconds: t.seconds,
            share: format!("{:.2}", share),
            duration: human_duration(t.seconds),
        }
    }
}
