//! The persisted record shape.

/// A single system message: an immutable role name plus its editable text.
///
/// On disk a record appears as `{ "role": "...", "content": "..." }`. For
/// records the registry creates itself, the map key and the `role` field
/// always agree; loaded data is taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MessageRecord {
    pub role: String,
    /// Arbitrary text, may be empty.
    pub content: String,
}

impl MessageRecord {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_to_role_content_object() {
        let record = MessageRecord::new("default", "You are a helpful assistant.");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"role":"default","content":"You are a helpful assistant."}"#
        );
    }

    #[test]
    fn deserialises_from_object() {
        let record: MessageRecord =
            serde_json::from_str(r#"{"role":"greeter","content":"Say hi."}"#).unwrap();
        assert_eq!(record, MessageRecord::new("greeter", "Say hi."));
    }
}
