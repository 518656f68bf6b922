use crate::domain::Task;

/// Store key for the task collection
pub const TASKS_KEY: &str = "tasks";

/// Serialize the task sequence for the store slot (a JSON array of records)
pub fn encode_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Parse a raw store value. Malformed payloads yield `None` with a warning;
/// the caller falls back to an empty list.
pub fn decode_tasks(raw: &str) -> Option<Vec<Task>> {
    match serde_json::from_str(raw) {
        Ok(tasks) => Some(tasks),
        Err(e) => {
            eprintln!("Warning: ignoring unparsable task data: {}", e);
            None
        }
    }
}
