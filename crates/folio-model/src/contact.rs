use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    InvalidEmail,
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::InvalidEmail => write!(f, "email must look like local@domain.tld"),
            Self::LengthOutOfRange { field, min, max } => {
                write!(f, "{field} must be between {min} and {max} characters")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Strips angle brackets from user-supplied text. This is minimal markup
/// sanitization for stored documents, not a substitute for output encoding.
#[must_use]
pub fn sanitize_markup(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

/// Accepts `local@domain.tld` shapes: one `@`, at least one `.` after it,
/// no whitespace, every segment non-empty.
#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    let segment_ok =
        |s: &str| !s.is_empty() && s.chars().all(|c| !c.is_whitespace() && c != '@');
    let Some((local, rest)) = input.split_once('@') else {
        return false;
    };
    let Some((domain, tld)) = rest.rsplit_once('.') else {
        return false;
    };
    segment_ok(local) && segment_ok(domain) && segment_ok(tld)
}

/// A visitor-submitted contact message. Created only through [`ContactMessage::new`],
/// never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Validates and normalizes a submission into a persistable record:
    /// fields are trimmed, the email lowercased, and angle brackets
    /// stripped from name and message. Validation runs before stripping,
    /// so length bounds apply to what the visitor actually typed.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let email = email.trim().to_lowercase();
        let message = message.trim();

        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if message.is_empty() {
            return Err(ValidationError::MissingField("message"));
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        if name.chars().count() < NAME_MIN_LEN || name.chars().count() > NAME_MAX_LEN {
            return Err(ValidationError::LengthOutOfRange {
                field: "name",
                min: NAME_MIN_LEN,
                max: NAME_MAX_LEN,
            });
        }
        let message_len = message.chars().count();
        if message_len < MESSAGE_MIN_LEN || message_len > MESSAGE_MAX_LEN {
            return Err(ValidationError::LengthOutOfRange {
                field: "message",
                min: MESSAGE_MIN_LEN,
                max: MESSAGE_MAX_LEN,
            });
        }

        let now = Utc::now();
        Ok(Self {
            id: None,
            name: sanitize_markup(name),
            email,
            message: sanitize_markup(message),
            created_at: now,
            updated_at: now,
        })
    }
}
