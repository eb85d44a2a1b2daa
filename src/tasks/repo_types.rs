use serde::{Deserialize, Deserializer, Serialize};

/// Status every new or edited task starts with.
pub const DEFAULT_STATUS: &str = "pending";

/// Task record as kept in memory and in `tasks.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: String,       // lookup key, not guaranteed unique
    pub description: String,
    pub priority: i32,
    pub due_date: String,    // free text, never parsed
    #[serde(default = "default_status", deserialize_with = "status_or_default")]
    pub status: String,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: i32,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
            due_date: due_date.into(),
            status: default_status(),
        }
    }
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

// `null` and `""` both fall back to the default status.
fn status_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default_status))
}
