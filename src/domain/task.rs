use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single task record. The serde shape is the persisted format: integer
/// `id`, string `text`, boolean `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task
    pub fn new(id: i64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Allocate a fresh id: wall-clock milliseconds at creation, bumped past the
/// current maximum when the clock would collide (rapid adds land in the same
/// millisecond; skewed clocks can go backwards).
pub fn next_id(tasks: &[Task]) -> i64 {
    let now = Utc::now().timestamp_millis();
    let max = tasks.iter().map(|t| t.id).max().unwrap_or(0);
    if now > max {
        now
    } else {
        max + 1
    }
}
