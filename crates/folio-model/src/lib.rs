#![forbid(unsafe_code)]
//! Folio model SSOT.
//!
//! Every document this service persists or serves is defined here. The
//! constructors are the only way to obtain a valid [`ContactMessage`], so
//! a value of that type always satisfies the field constraints.

mod contact;
mod profile;

pub use contact::{
    is_valid_email, sanitize_markup, ContactMessage, ValidationError, MESSAGE_MAX_LEN,
    MESSAGE_MIN_LEN, NAME_MAX_LEN, NAME_MIN_LEN,
};
pub use profile::{
    AboutBlock, PortfolioBlock, PortfolioItem, PortfolioProfile, ProfileSource, ResumeBlock, Role,
    ServiceItem, ServicesBlock, SocialLink, Testimonial, TestimonialsBlock,
};

pub const CRATE_NAME: &str = "folio-model";
