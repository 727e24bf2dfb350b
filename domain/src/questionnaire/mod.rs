//! Questionnaire domain
//!
//! The fixed list of five questions and the answers collected for them.

pub mod answers;
pub mod question;
