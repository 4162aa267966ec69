use serde::{Deserialize, Serialize};

use crate::vars::USER_PRIVILEGE;
use crate::ClientError;

/// Validated form content, built at submit time and sent once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialChangeRequest {
    pub email: String,
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl CredentialChangeRequest {
    pub fn into_payload(self) -> ChangePasswordPayload {
        ChangePasswordPayload {
            email_address: self.email,
            old_password: self.old_password,
            new_password: self.new_password,
            privilege: USER_PRIVILEGE.to_string(),
        }
    }
}

// field names must match crate::vars::ACCOUNT_*
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChangePasswordPayload {
    pub email_address: String,
    pub old_password: String,
    pub new_password: String,
    pub privilege: String,
}

impl ChangePasswordPayload {
    pub fn to_json(&self) -> Result<String, ClientError> {
        serde_json::to_string(self).map_err(ClientError::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusReply {
    pub status_message: String,
}

impl StatusReply {
    pub fn parse(reply: &str) -> Result<Self, ClientError> {
        serde_json::from_str(reply).map_err(ClientError::from)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::vars::{
        ACCOUNT_EMAIL_ADDRESS, ACCOUNT_NEW_PASSWORD, ACCOUNT_OLD_PASSWORD,
        ACCOUNT_PRIVILEGE,
    };

    #[test]
    fn test_payload_field_mapping() {
        let request = CredentialChangeRequest {
            email: "user@example.org".to_string(),
            old_password: "old".to_string(),
            new_password: "new".to_string(),
            confirm_password: "new".to_string(),
        };
        let json = request.into_payload().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object[ACCOUNT_EMAIL_ADDRESS], "user@example.org");
        assert_eq!(object[ACCOUNT_OLD_PASSWORD], "old");
        assert_eq!(object[ACCOUNT_NEW_PASSWORD], "new");
        assert_eq!(object[ACCOUNT_PRIVILEGE], "user");
    }

    #[test]
    fn test_status_reply_parse() {
        let reply = StatusReply::parse(
            r#"{"status": "OK", "status_message": "Password changed"}"#,
        )
        .unwrap();
        assert_eq!(reply.status_message, "Password changed");

        assert!(StatusReply::parse(r#"{"status": "OK"}"#).is_err());
        assert!(StatusReply::parse("not json").is_err());
        assert!(StatusReply::parse(r#"{"status_message": 5}"#).is_err());
    }
}
