//! Validation rules applied to request payloads before they reach the
//! database layer.

pub mod rules;

pub use validator::Validate;
