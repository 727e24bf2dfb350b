//! Diagnosis domain
//!
//! The wizard that drives one questionnaire run and the report it ends in.

pub mod report;
pub mod wizard;
