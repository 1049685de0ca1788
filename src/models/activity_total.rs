use serde::Serialize;

/// Sum of session lengths for one activity label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityTotal {
    pub activity: String,
    pub seconds: f64,
    pub sessions: usize,
}
