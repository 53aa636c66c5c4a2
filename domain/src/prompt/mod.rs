//! Prompt domain
//!
//! Fixed rubric templates sent to the judges.

mod template;

pub use template::PromptTemplate;
