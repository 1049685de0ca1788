//! Text views of the store: the session list and the live readout.

use crate::core::clock::Clock;
use crate::core::store::SessionStore;
use crate::models::session::Session;
use crate::utils::formatting::{format_hms, format_readout};
use crate::utils::time::hh_mm;
use chrono::FixedOffset;

/// `Study: 09:00 ~ 10:30 (1:30:00)`
pub fn display_line(session: &Session, offset: &FixedOffset) -> String {
    format!(
        "{}: {} ~ {} ({})",
        session.activity,
        hh_mm(session.start, offset),
        hh_mm(session.end, offset),
        format_hms(session.whole_secs())
    )
}

/// One line per session, most recent first.
pub fn display_lines<'a, I>(sessions: I, offset: &FixedOffset) -> Vec<String>
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions
        .into_iter()
        .map(|s| display_line(s, offset))
        .collect()
}

pub fn store_lines<C: Clock>(store: &SessionStore<C>, offset: &FixedOffset) -> Vec<String> {
    display_lines(store.list_for_display(), offset)
}

/// `Time: 00:01:02.345`; zeroes while idle.
pub fn readout<C: Clock>(store: &SessionStore<C>) -> String {
    format!("Time: {}", format_readout(store.elapsed().unwrap_or(0.0)))
}
