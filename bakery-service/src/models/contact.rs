use serde::{Deserialize, Serialize};
use validator::Validate;

/// A contact-form submission. Stored as received and never read back.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "Message cannot be empty"))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            subject: Some("Wedding cake".to_string()),
            message: "Do you take custom orders?".to_string(),
        }
    }

    #[test]
    fn valid_message_passes() {
        assert!(message().validate().is_ok());
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut msg = message();
        msg.email = "ada-at-example".to_string();
        assert!(msg.validate().unwrap_err().field_errors().contains_key("email"));
    }

    #[test]
    fn empty_body_is_rejected() {
        let mut msg = message();
        msg.message.clear();
        assert!(msg
            .validate()
            .unwrap_err()
            .field_errors()
            .contains_key("message"));
    }

    #[test]
    fn missing_field_fails_to_deserialize() {
        let result: Result<ContactMessage, _> =
            serde_json::from_str(r#"{"name": "Ada", "email": "ada@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn absent_optionals_are_not_stored() {
        let mut msg = message();
        msg.subject = None;
        let doc = bson::to_document(&msg).unwrap();
        assert!(!doc.contains_key("phone"));
        assert!(!doc.contains_key("subject"));
    }
}
