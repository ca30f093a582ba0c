use thiserror::Error;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 1e-9;
const MAX_DECIMALS: u32 = 15;

/// Errors raised while building, reading or writing geometries
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid parameter: {0}")]
    ParameterError(String),
    #[error("parsing error: {0}")]
    ParsingError(String),
    #[error("unsupported: {0}")]
    Unsupported(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type GeomResult<T> = Result<T, GeometryError>;

/// Trait with common functionality for all geometric objects
pub trait GeometricObject {
    fn wkt(&self) -> String;
}

/// Macro to implement the Display trait for Geometric Object types
macro_rules! display_for_geom {
    ($type:ty) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.wkt())
            }
        }
    };
}

pub(crate) use display_for_geom;

/// Return whether two numbers are approximately equal.
///
/// Determines if the given numbers are close with the given absolute and relative tolerances.
///
/// Panics if either tolerance is negative.
///
/// Examples:
/// ```rust
/// use geoformat;
///
/// assert!(geoformat::is_close(1.0, 1.0 + 1e-11, 1e-10, 1e-10));
/// ```
pub fn is_close(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    assert!(rtol >= 0.0 && atol >= 0.0);
    let scale = a.abs().max(b.abs());
    (a - b).abs() < (atol + rtol * scale)
}

/// Determine if two values are approximately equal to one another.
///
/// Equivalent to calling `is_close` with relative tolerance of `1e-9` and absolute
/// tolerance of `1e-12`.
pub fn approx(a: f64, b: f64) -> bool {
    is_close(a, b, RTOL, ATOL)
}

/// Round a value to the given number of decimal places
///
/// More than 15 decimals are treated as 15. Values that are already integral at
/// that scale, or not finite, are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round() / factor
}
