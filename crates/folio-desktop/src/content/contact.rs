//! Contact form submission
//!
//! Validation and the e-mail relay payload. Sending is one JSON POST made by
//! the wasm layer; there is no retry.

use serde::{Deserialize, Serialize};

use crate::config::RelayConfig;
use crate::error::ContactError;

/// What the visitor typed into the contact window
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    /// Recipient display name, filled from config
    #[serde(default)]
    pub to_name: String,
}

impl ContactMessage {
    pub fn new(from_name: &str, from_email: &str, message: &str) -> Self {
        Self {
            from_name: from_name.to_string(),
            from_email: from_email.to_string(),
            message: message.to_string(),
            to_name: String::new(),
        }
    }

    /// Check required fields; returns the trimmed message on success
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let from_name = self.from_name.trim();
        let from_email = self.from_email.trim();
        let message = self.message.trim();

        if from_name.is_empty() {
            return Err(ContactError::Invalid {
                field: "name",
                reason: "required",
            });
        }
        if from_email.is_empty() {
            return Err(ContactError::Invalid {
                field: "email",
                reason: "required",
            });
        }
        if !is_plausible_email(from_email) {
            return Err(ContactError::Invalid {
                field: "email",
                reason: "not an e-mail address",
            });
        }
        if message.is_empty() {
            return Err(ContactError::Invalid {
                field: "message",
                reason: "required",
            });
        }

        Ok(ContactMessage {
            from_name: from_name.to_string(),
            from_email: from_email.to_string(),
            message: message.to_string(),
            to_name: self.to_name.trim().to_string(),
        })
    }
}

/// `local@domain.tld` with non-empty parts
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Body of the relay POST
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPayload {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: ContactMessage,
}

impl RelayPayload {
    /// Validate `message` and address it using the relay config
    pub fn build(
        relay: &RelayConfig,
        owner_name: &str,
        message: &ContactMessage,
    ) -> Result<Self, ContactError> {
        let mut params = message.validate()?;
        if params.to_name.is_empty() {
            params.to_name = owner_name.to_string();
        }
        Ok(Self {
            service_id: relay.service_id.clone(),
            template_id: relay.template_id.clone(),
            user_id: relay.user_id.clone(),
            template_params: params,
        })
    }

    pub fn to_json(&self) -> Result<String, ContactError> {
        serde_json::to_string(self).map_err(|e| ContactError::Network(e.to_string()))
    }
}

/// Contact window status line
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "camelCase")]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl ContactStatus {
    /// Text shown under the form
    pub fn message(&self) -> String {
        match self {
            ContactStatus::Idle => String::new(),
            ContactStatus::Sending => "Sending...".to_string(),
            ContactStatus::Sent => "Message sent! I'll get back to you soon.".to_string(),
            ContactStatus::Failed(reason) => {
                format!("Failed to send message ({reason}). Please try again later.")
            }
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, ContactStatus::Sending)
    }

    /// Status after the relay answered
    pub fn from_result(result: Result<(), ContactError>) -> Self {
        match result {
            Ok(()) => ContactStatus::Sent,
            Err(e) => ContactStatus::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn relay() -> RelayConfig {
        RelayConfig {
            endpoint: "https://relay.test/send".into(),
            service_id: "svc".into(),
            template_id: "tpl".into(),
            user_id: "pub".into(),
            sdk_url: None,
        }
    }

    #[test]
    fn test_validate_trims() {
        let msg = ContactMessage::new("  Ada ", " ada@example.com ", " hi ");
        let ok = msg.validate().unwrap();
        assert_eq!(ok.from_name, "Ada");
        assert_eq!(ok.from_email, "ada@example.com");
        assert_eq!(ok.message, "hi");
    }

    #[test]
    fn test_validate_reports_field() {
        let err = ContactMessage::new(" ", "a@b.c", "hi").validate().unwrap_err();
        assert_eq!(err, ContactError::Invalid { field: "name", reason: "required" });

        let err = ContactMessage::new("Ada", "a@b.c", "   ").validate().unwrap_err();
        assert!(matches!(err, ContactError::Invalid { field: "message", .. }));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_plausible_email("a@b.co"));
        assert!(is_plausible_email("first.last@sub.example.org"));
        assert!(!is_plausible_email("nobody"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("a@localhost"));
        assert!(!is_plausible_email("a@b."));
        assert!(!is_plausible_email("a@@b.com"));
        assert!(!is_plausible_email("a b@c.com"));
    }

    #[test]
    fn test_payload_shape() {
        let payload = RelayPayload::build(&relay(), "Owner", &ContactMessage::new("Ada", "ada@example.com", "Hello")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pub",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello",
                    "to_name": "Owner"
                }
            })
        );
    }

    #[test]
    fn test_payload_rejects_invalid() {
        assert!(RelayPayload::build(&relay(), "Owner", &ContactMessage::default()).is_err());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(ContactStatus::Idle.message(), "");
        assert!(ContactStatus::Sending.is_sending());
        assert_eq!(ContactStatus::from_result(Ok(())), ContactStatus::Sent);
        let failed = ContactStatus::from_result(Err(ContactError::Relay(500)));
        assert!(failed.message().contains("HTTP 500"));
    }
}
