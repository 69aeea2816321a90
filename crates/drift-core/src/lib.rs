// crates/drift-core/src/lib.rs
pub mod geometry;
pub mod item;
pub mod layout_units;
pub mod text;
pub mod document;

pub use geometry::*;
pub use item::*;
pub use layout_units::*;
pub use text::*;
pub use document::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlowError {
    #[error("Invalid parameter {name}: {value} (must be finite and non-negative)")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("Item {index} measured an invalid size {width}x{height}")]
    InvalidItemSize { index: usize, width: f32, height: f32 },

    #[error("Layout solver error: {0}")]
    Solver(String),

    #[error("Unsupported input: {0}")]
    Unsupported(String),

    #[error("Invalid layout document: {0}")]
    Document(String),
}

pub type Result<T> = std::result::Result<T, FlowError>;

/// Rejects negative and NaN values. `allow_infinite` admits `+inf`, which is
/// how an unbounded width travels through the engines.
pub fn check_non_negative(name: &'static str, value: f32, allow_infinite: bool) -> Result<f32> {
    let finite_ok = value.is_finite() || (allow_infinite && value == f32::INFINITY);
    if value.is_nan() || value < 0.0 || !finite_ok {
        return Err(FlowError::InvalidParameter { name, value });
    }
    Ok(value)
}
