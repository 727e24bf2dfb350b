//! Use cases (application services)
//!
//! - [`submit_diagnosis`]: compose the prompt, call the model once, render the answer
//! - [`diagnostic_controller`]: turn submissions into [`UiEvent`](crate::UiEvent)s

pub mod diagnostic_controller;
pub mod submit_diagnosis;
