//! In-memory session recorder: the running interval, the completed
//! sessions, and their JSON persistence.
//!
//! The store has two states. **Idle** has no running interval; `start`
//! moves it to **Running**, and `stop` records a session and goes back to
//! Idle. `start` while Running and `stop` while Idle do nothing.

use crate::config::FALLBACK_ACTIVITY;
use crate::core::clock::{Clock, SystemClock};
use crate::errors::{LoadError, SaveError};
use crate::models::activity_total::ActivityTotal;
use crate::models::running::RunningInterval;
use crate::models::session::Session;
use crate::utils::time::file_stamp;
use chrono::FixedOffset;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SessionStore<C: Clock = SystemClock> {
    clock: C,
    fallback: String,
    sessions: Vec<Session>,
    running: Option<RunningInterval>,
}

impl SessionStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SessionStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            fallback: FALLBACK_ACTIVITY.to_string(),
            sessions: Vec::new(),
            running: None,
        }
    }

    /// Replace the label used when `stop` receives a blank activity.
    /// A blank fallback is ignored.
    pub fn with_fallback(mut self, label: &str) -> Self {
        let label = label.trim();
        if !label.is_empty() {
            self.fallback = label.to_string();
        }
        self
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Completed sessions in insertion order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn running(&self) -> Option<RunningInterval> {
        self.running
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Seconds since the running interval started, `None` when idle.
    pub fn elapsed(&self) -> Option<f64> {
        self.running.map(|r| r.elapsed_at(self.clock.now()))
    }

    /// Begin timing. No effect while an interval is already running.
    pub fn start(&mut self) {
        if self.running.is_none() {
            self.running = Some(RunningInterval {
                start: self.clock.now(),
            });
        }
    }

    /// Close the running interval under `activity` (or the fallback label
    /// when blank). Returns the recorded session, or `None` when idle.
    pub fn stop(&mut self, activity: &str) -> Option<&Session> {
        let running = self.running.take()?;
        let end = self.clock.now();

        let label = activity.trim();
        let label = if label.is_empty() {
            self.fallback.as_str()
        } else {
            label
        };

        self.sessions.push(Session::new(label, running.start, end));
        self.sessions.last()
    }

    /// Drop every session and any running interval.
    pub fn clear(&mut self) {
        self.sessions.clear();
        self.running = None;
    }

    /// Sessions ordered by `end`, most recent first. Equal ends keep
    /// insertion order.
    pub fn list_for_display(&self) -> Vec<&Session> {
        let mut list: Vec<&Session> = self.sessions.iter().collect();
        list.sort_by(|a, b| b.end.total_cmp(&a.end));
        list
    }

    /// Total seconds per activity label.
    pub fn aggregate_by_activity(&self) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for s in &self.sessions {
            *totals.entry(s.activity.clone()).or_insert(0.0) += s.duration_secs();
        }
        totals
    }

    /// Per-activity totals with session counts, in order of first appearance.
    pub fn totals(&self) -> Vec<ActivityTotal> {
        totals_of(&self.sessions)
    }

    /// Completed sessions as a JSON array. The running interval is not part
    /// of the output: stop before saving to keep it.
    pub fn serialize(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(&self.sessions)?)
    }

    /// Replace all sessions with the ones in `blob`. On error the current
    /// sessions are left as they were. The running interval is untouched.
    pub fn deserialize(&mut self, blob: &str) -> Result<usize, LoadError> {
        let parsed = parse_sessions(blob)?;
        let count = parsed.len();
        self.sessions = parsed;
        Ok(count)
    }

    /// Write the sessions to `<dir>/<YYYY-MM-DD_HH-MM-SS>.json`, creating
    /// `dir` if needed, and return the written path.
    pub fn save_to_dir(&self, dir: &Path, offset: &FixedOffset) -> Result<PathBuf, SaveError> {
        let body = self.serialize()?;

        fs::create_dir_all(dir).map_err(|source| SaveError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(format!("{}.json", file_stamp(self.clock.now(), offset)));
        fs::write(&path, body).map_err(|source| SaveError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Load a session file of any extension, replacing the current sessions
    /// only when the whole file is valid.
    pub fn load_from_path(&mut self, path: &Path) -> Result<usize, LoadError> {
        let parsed = read_sessions(path)?;
        let count = parsed.len();
        self.sessions = parsed;
        Ok(count)
    }
}

/// Parse a JSON session array.
pub fn parse_sessions(blob: &str) -> Result<Vec<Session>, LoadError> {
    let sessions: Vec<Session> = serde_json::from_str(blob)?;

    if let Some(index) = sessions.iter().position(|s| s.activity.trim().is_empty()) {
        return Err(LoadError::EmptyActivity { index });
    }

    Ok(sessions)
}

/// Read and parse a session file without touching any store.
pub fn read_sessions(path: &Path) -> Result<Vec<Session>, LoadError> {
    let blob = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sessions(&blob)
}

/// Group sessions by label, keeping the order labels first appear in.
pub fn totals_of(sessions: &[Session]) -> Vec<ActivityTotal> {
    let mut out: Vec<ActivityTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for s in sessions {
        match index.get(s.activity.as_str()) {
            Some(&i) => {
                out[i].seconds += s.duration_secs();
                out[i].sessions += 1;
            }
            None => {
                index.insert(s.activity.as_str(), out.len());
                out.push(ActivityTotal {
                    activity: s.activity.clone(),
                    seconds: s.duration_secs(),
                    sessions: 1,
                });
            }
        }
    }

    out
}
