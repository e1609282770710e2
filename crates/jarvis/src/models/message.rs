use super::role::Role;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single entry in a conversation transcript
pub struct Message {
    pub role: Role,
    pub created: i64,
    pub content: String,
}

impl Message {
    /// Create a new user message with the current timestamp
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant message with the current timestamp
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn new<S: Into<String>>(role: Role, content: S) -> Self {
        Message {
            role,
            created: Utc::now().timestamp(),
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_constructors() {
        let user = Message::user("hi");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "hi");
        assert!(user.is_user());

        let assistant = Message::assistant(String::from("hello"));
        assert_eq!(assistant.role, Role::Assistant);
        assert!(!assistant.is_user());
    }

    #[test]
    fn test_message_serialization() -> anyhow::Result<()> {
        let message = Message {
            role: Role::Assistant,
            created: 1_700_000_000,
            content: "4".to_string(),
        };
        let value = serde_json::to_value(&message)?;
        assert_eq!(
            value,
            json!({"role": "assistant", "created": 1_700_000_000, "content": "4"})
        );
        Ok(())
    }
}
