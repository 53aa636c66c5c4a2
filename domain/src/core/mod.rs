//! Core domain concepts shared across all subdomains.
//!
//! - [`dimension::CreativityDimension`]: the four fixed scoring axes
//! - [`question::QuestionItem`]: a catalog entry presented to the subject
//! - [`error::DomainError`]: domain-level errors

pub mod dimension;
pub mod error;
pub mod question;
