use serde::{Deserialize, Serialize};

use super::{de_id, Owner};

/// Workflow state of a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Parse a select-box or query value. Empty or unknown means none.
    pub fn parse(s: &str) -> Option<TaskStatus> {
        TaskStatus::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// CSS class of the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "todo-style",
            TaskStatus::InProgress => "in-progress-style",
            TaskStatus::Done => "success-style",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task row from `GET /tasks/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "de_id")]
    pub task_id: String,
    pub task_title: String,
    pub task_description: String,
    pub task_status: TaskStatus,
    #[serde(deserialize_with = "de_id")]
    pub project_id: String,
    pub project_title: String,
    #[serde(flatten)]
    pub owner: Owner,
}

/// `POST /tasks/` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub task_title: String,
    pub task_description: String,
    pub project_id: String,
    pub task_status: TaskStatus,
    pub task_user_id: String,
}

/// `PUT /tasks/{id}` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub updated_task_title: String,
    pub updated_task_description: String,
    pub task_status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::parse(""), None);
        assert_eq!(TaskStatus::parse("todo"), None);
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(TaskStatus::ToDo.badge_class(), "todo-style");
        assert_eq!(TaskStatus::InProgress.badge_class(), "in-progress-style");
        assert_eq!(TaskStatus::Done.badge_class(), "success-style");
    }

    #[test]
    fn test_task_rows_deserialize() {
        let task: Task = serde_json::from_str(
            r#"{
                "task_id": "t-1",
                "task_title": "Write docs",
                "task_description": "All of them",
                "task_status": "In Progress",
                "project_id": 4,
                "project_title": "Launch",
                "user_id": 2,
                "first_name": "Grace",
                "last_name": "Hopper",
                "role": "Admin",
                "email_id": "grace@example.com"
            }"#,
        )
        .unwrap();
        assert_eq!(task.task_id, "t-1");
        assert_eq!(task.task_status, TaskStatus::InProgress);
        assert_eq!(task.project_id, "4");
        assert_eq!(task.owner.user_id, "2");
        assert_eq!(task.owner.full_name(), "Grace Hopper");
    }

    #[test]
    fn test_task_bodies_use_camel_case() {
        let body = serde_json::to_value(NewTask {
            task_title: "T".to_string(),
            task_description: "D".to_string(),
            project_id: "4".to_string(),
            task_status: TaskStatus::ToDo,
            task_user_id: "2".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "taskTitle": "T",
                "taskDescription": "D",
                "projectId": "4",
                "taskStatus": "To Do",
                "taskUserId": "2"
            })
        );

        let body = serde_json::to_value(TaskUpdate {
            updated_task_title: "T".to_string(),
            updated_task_description: "D".to_string(),
            task_status: TaskStatus::Done,
        })
        .unwrap();
        assert_eq!(body["taskStatus"], "Done");
        assert_eq!(body["updatedTaskTitle"], "T");
    }
}
