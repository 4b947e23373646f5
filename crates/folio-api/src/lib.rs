#![forbid(unsafe_code)]

mod dto;
mod envelope;
mod errors;

pub use dto::{ContactChannels, ContactSubmission, FieldPresence, SocialHandles};
pub use envelope::Envelope;
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "folio-api";
