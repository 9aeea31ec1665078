//! Frontend Models
//!
//! Data structures matching the hosted todo API.

use serde::{Deserialize, Serialize};

/// Task data structure (matches the remote service)
///
/// The service owns the whole lifecycle: ids are assigned remotely and
/// `complete` is only ever changed through the toggle endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub complete: bool,
}

/// Envelope the list endpoint wraps its payload in: `{ "data": [...] }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskListResponse {
    pub data: Vec<Task>,
}

/// Request body for creating a task
#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_list_envelope() {
        let body = r#"{"data":[{"_id":"1","title":"Buy milk","complete":false}]}"#;
        let response: TaskListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, "1");
        assert_eq!(response.data[0].title, "Buy milk");
        assert!(!response.data[0].complete);
    }

    #[test]
    fn missing_optional_fields_default() {
        let body = r#"{"_id":"a","title":"Bare"}"#;
        let task: Task = serde_json::from_str(body).unwrap();
        assert_eq!(task.description, "");
        assert!(!task.complete);
    }

    #[test]
    fn serializes_new_task_body() {
        let body = NewTask {
            title: "Buy milk",
            description: "Task created via Todo App",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["description"], "Task created via Todo App");
    }
}
