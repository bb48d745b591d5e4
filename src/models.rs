use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item, exactly as the server returns it.
///
/// `id` and `created_at` are server-assigned; the client passes them through
/// and never fabricates or rewrites either one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Creation timestamp; not every server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The uncommitted form fields, bound to the title/description inputs.
///
/// Serialized as the JSON body of create and update calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    /// Pre-populate the form from an existing item (entering edit mode).
    pub fn from_todo(todo: &Todo) -> Self {
        Draft {
            title: todo.title.clone(),
            description: todo.description.clone(),
        }
    }

    /// Empty both fields (after a successful submit, or on cancel).
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }

    /// Required-field presence: a draft needs a non-blank title to submit.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_decodes_without_created_at() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":1,"title":"A","description":"d1"}"#).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "A");
        assert_eq!(todo.description, "d1");
        assert!(todo.created_at.is_none());
    }

    #[test]
    fn test_todo_decodes_with_created_at() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":2,"title":"B","description":"","created_at":"2026-08-01T09:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(todo.id, 2);
        let ts = todo.created_at.expect("timestamp should decode");
        assert_eq!(ts.to_rfc3339(), "2026-08-01T09:30:00+00:00");
    }

    #[test]
    fn test_draft_serializes_title_and_description_only() {
        let draft = Draft {
            title: "Buy milk".to_string(),
            description: "2 liters".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["description"], "2 liters");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_blank_title_is_not_submittable() {
        let draft = Draft {
            title: "   ".to_string(),
            description: "text".to_string(),
        };
        assert!(!draft.has_title());
    }
}
