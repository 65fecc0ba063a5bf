//! Per-field validation state and the controller that drives it.

pub mod controller;
pub mod state;

pub use controller::{Readiness, ValidationController};
pub use state::{ValidationRule, ValidationState, Validator, ValidatorRegistry};
