//! To-do domain events carried in queue message bodies.
//!
//! The worker only decodes these to log a readable summary; an undecodable
//! body is still logged and deleted like any other message.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Med,
    High,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event_name", rename_all = "snake_case")]
pub enum TodoEvent {
    ListCreated {
        event_id: String,
        version: u64,
        utc_timestamp: i64,
        list_id: String,
        title: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        due_by: Option<i64>,
    },
    TaskAddedToList {
        event_id: String,
        version: u64,
        utc_timestamp: i64,
        list_id: String,
        task_id: String,
        title: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        due_by: Option<i64>,
        priority: Priority,
    },
    TaskCompleted {
        event_id: String,
        version: u64,
        utc_timestamp: i64,
        list_id: String,
        task_id: String,
    },
}

impl TodoEvent {
    /// Decodes a message body, returning `None` for anything that is not a
    /// known to-do event.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    pub fn name(&self) -> &'static str {
        match self {
            TodoEvent::ListCreated { .. } => "list_created",
            TodoEvent::TaskAddedToList { .. } => "task_added_to_list",
            TodoEvent::TaskCompleted { .. } => "task_completed",
        }
    }

    pub fn event_id(&self) -> &str {
        match self {
            TodoEvent::ListCreated { event_id, .. }
            | TodoEvent::TaskAddedToList { event_id, .. }
            | TodoEvent::TaskCompleted { event_id, .. } => event_id,
        }
    }

    pub fn list_id(&self) -> &str {
        match self {
            TodoEvent::ListCreated { list_id, .. }
            | TodoEvent::TaskAddedToList { list_id, .. }
            | TodoEvent::TaskCompleted { list_id, .. } => list_id,
        }
    }

    pub fn version(&self) -> u64 {
        match self {
            TodoEvent::ListCreated { version, .. }
            | TodoEvent::TaskAddedToList { version, .. }
            | TodoEvent::TaskCompleted { version, .. } => *version,
        }
    }
}
