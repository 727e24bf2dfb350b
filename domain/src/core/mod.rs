//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the hosted generative models the diagnosis can run on
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
