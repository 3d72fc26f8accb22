use thiserror::Error;

/// Errors surfaced while building an axis scene.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AxisError {
    /// A logarithmic axis cannot represent a domain that crosses zero.
    #[error("log axis domain [{min}, {max}] straddles zero")]
    InvalidLogDomain { min: f64, max: f64 },
}
