//! Time sources for the session store.

use crate::utils::time::epoch_now;
use std::cell::Cell;
use std::rc::Rc;

/// Something that can tell the current time as epoch seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock. Not monotonic: a backwards system time adjustment between
/// start and stop shows up as a negative session length.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        epoch_now()
    }
}

/// Hand-driven clock. Clones share the same instant, so a test can keep a
/// handle after moving one into a store.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, t: f64) {
        self.now.set(t);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
