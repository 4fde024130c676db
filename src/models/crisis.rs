//! Crisis resources and personal emergency contacts.

use serde::{Deserialize, Serialize};

/// A user-maintained emergency contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisContact {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub is_emergency: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCrisisContact {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    pub is_emergency: bool,
}

/// An institutional hotline or service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisResource {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub text_line: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

/// Resources shown before (or without) a successful fetch.
pub fn default_resources() -> Vec<CrisisResource> {
    vec![
        CrisisResource {
            id: "builtin-988".to_string(),
            name: "988 Suicide & Crisis Lifeline".to_string(),
            phone: Some("988".to_string()),
            text_line: Some("988".to_string()),
            website: Some("https://988lifeline.org".to_string()),
            description: Some("Free, confidential support for people in distress.".to_string()),
            availability: Some("24/7".to_string()),
        },
        CrisisResource {
            id: "builtin-ctl".to_string(),
            name: "Crisis Text Line".to_string(),
            phone: None,
            text_line: Some("Text HOME to 741741".to_string()),
            website: Some("https://www.crisistextline.org".to_string()),
            description: Some("Text with a trained crisis counselor.".to_string()),
            availability: Some("24/7".to_string()),
        },
        CrisisResource {
            id: "builtin-911".to_string(),
            name: "Emergency services".to_string(),
            phone: Some("911".to_string()),
            text_line: None,
            website: None,
            description: Some("If you are in immediate danger.".to_string()),
            availability: Some("24/7".to_string()),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrisisSeverity {
    Low,
    #[default]
    Medium,
    High,
}

impl CrisisSeverity {
    pub const ALL: [CrisisSeverity; 3] =
        [CrisisSeverity::Low, CrisisSeverity::Medium, CrisisSeverity::High];

    pub fn label(&self) -> &'static str {
        match self {
            CrisisSeverity::Low => "Low: I need someone to talk to",
            CrisisSeverity::Medium => "Medium: I'm struggling to cope",
            CrisisSeverity::High => "High: I'm not safe right now",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            CrisisSeverity::Low => CrisisSeverity::Medium,
            CrisisSeverity::Medium => CrisisSeverity::High,
            CrisisSeverity::High => CrisisSeverity::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrisisSupportRequest {
    pub severity: CrisisSeverity,
}

/// Server acknowledgement of a support request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportReceipt {
    pub message: Option<String>,
    pub contacts_notified: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resources_are_reachable() {
        let resources = default_resources();
        assert!(!resources.is_empty());
        assert!(resources
            .iter()
            .all(|r| r.phone.is_some() || r.text_line.is_some()));
    }

    #[test]
    fn test_support_request_body() {
        let body = CrisisSupportRequest {
            severity: CrisisSeverity::High,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"severity": "high"})
        );
        let receipt: SupportReceipt = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(receipt.contacts_notified, 0);
    }

    #[test]
    fn test_contact_json_shape() {
        let contact = NewCrisisContact {
            name: "Jo".to_string(),
            phone: "555-0100".to_string(),
            relationship: None,
            is_emergency: true,
        };
        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            serde_json::json!({"name": "Jo", "phone": "555-0100", "isEmergency": true})
        );
    }
}
