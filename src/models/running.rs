/// The single in-progress interval. The activity is only known at stop time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningInterval {
    pub start: f64,
}

impl RunningInterval {
    pub fn elapsed_at(&self, now: f64) -> f64 {
        now - self.start
    }
}
