//! Prompt domain
//!
//! The constant system instruction and the template that turns a completed
//! questionnaire into the user prompt.

mod template;

pub use template::DiagnosticPromptTemplate;
