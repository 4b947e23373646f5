// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use folio_model::ContactMessage;
use serde::{Deserialize, Serialize};

/// Inbound contact payload. `fullName` is accepted as a synonym for
/// `name`; `name` wins when both are present and non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Which fields a rejected submission actually carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPresence {
    pub name: bool,
    pub email: bool,
    pub message: bool,
}

impl FieldPresence {
    #[must_use]
    pub fn all(&self) -> bool {
        self.name && self.email && self.message
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl ContactSubmission {
    /// The effective name: `name` if non-empty, else `fullName`.
    #[must_use]
    pub fn effective_name(&self) -> Option<&str> {
        non_empty(self.name.as_deref()).or_else(|| non_empty(self.full_name.as_deref()))
    }

    #[must_use]
    pub fn presence(&self) -> FieldPresence {
        FieldPresence {
            name: self.effective_name().is_some(),
            email: non_empty(self.email.as_deref()).is_some(),
            message: non_empty(self.message.as_deref()).is_some(),
        }
    }

    /// Runs the full validation ladder: field presence, then email shape,
    /// then length bounds, producing the persistable record on success.
    pub fn validate(&self) -> Result<ContactMessage, ApiError> {
        let presence = self.presence();
        if !presence.all() {
            return Err(ApiError::missing_fields(presence));
        }
        let name = self.effective_name().unwrap_or_default();
        let email = self.email.as_deref().unwrap_or_default();
        let message = self.message.as_deref().unwrap_or_default();
        ContactMessage::new(name, email, message).map_err(ApiError::from)
    }
}

/// The fixed contact channels served by `GET /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannels {
    pub email: String,
    pub phone: String,
    pub social: SocialHandles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialHandles {
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

impl Default for ContactChannels {
    fn default() -> Self {
        Self {
            email: "faisal@example.com".to_string(),
            phone: "+91-XXXXXXXXXX".to_string(),
            social: SocialHandles {
                linkedin: "https://linkedin.com/in/faisal".to_string(),
                github: "https://github.com/faisal".to_string(),
                twitter: "https://twitter.com/faisal".to_string(),
            },
        }
    }
}
