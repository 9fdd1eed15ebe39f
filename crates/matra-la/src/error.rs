//! Error types for the dense engine.

use alloc::string::String;
use core::fmt;

/// Errors surfaced by matrix and vector operations.
///
/// All failures are synchronous and fail-fast: no operation retries and no
/// partial result is written to the destination once validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinAlgError {
    /// Exactly one of the two dimensions is zero.
    InvalidShape { rows: usize, cols: usize },
    /// Wrong operand count or operand dimensions for a vector product.
    InvalidArgument(String),
    /// Operand or destination shape differs from the required one.
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Flat buffer length does not match the requested shape.
    BufferLength { rows: usize, cols: usize, len: usize },
    /// Contraction dimensions disagree (multiplication, dot product, ...).
    DimensionMismatch { left: usize, right: usize },
    /// Determinant of a 0x0 matrix.
    EmptyMatrix,
    /// Determinant-chain operation on a non-square matrix.
    NonSquare { rows: usize, cols: usize },
    /// Inverse of a matrix whose determinant is exactly zero.
    Singular,
    /// Row/column access outside the matrix shape.
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { rows, cols } => {
                write!(f, "invalid shape: {rows}x{cols} has exactly one zero dimension")
            }
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "shape mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::BufferLength { rows, cols, len } => {
                write!(f, "an array of length {len} cannot back a {rows}x{cols} matrix")
            }
            Self::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: {left} vs {right}")
            }
            Self::EmptyMatrix => write!(f, "determinant of an empty matrix is undefined"),
            Self::NonSquare { rows, cols } => {
                write!(f, "operation requires a square matrix, got {rows}x{cols}")
            }
            Self::Singular => write!(f, "matrix is singular (determinant is zero)"),
            Self::IndexOutOfBounds { row, col, rows, cols } => {
                write!(f, "index ({row}, {col}) out of bounds for {rows}x{cols} matrix")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinAlgError {}

/// Convenience alias used across the crate.
pub type Result<T> = core::result::Result<T, LinAlgError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_shape_mismatch() {
        let err = LinAlgError::ShapeMismatch {
            expected: (2, 3),
            actual: (3, 2),
        };
        assert_eq!(err.to_string(), "shape mismatch: expected 2x3, got 3x2");
    }

    #[test]
    fn display_dimension_mismatch() {
        let err = LinAlgError::DimensionMismatch { left: 2, right: 3 };
        assert!(err.to_string().contains("2 vs 3"));
    }

    #[test]
    fn display_singular() {
        assert!(LinAlgError::Singular.to_string().contains("singular"));
    }

    #[test]
    fn display_index_out_of_bounds() {
        let err = LinAlgError::IndexOutOfBounds {
            row: 5,
            col: 0,
            rows: 2,
            cols: 2,
        };
        assert!(err.to_string().contains("(5, 0)"));
        assert!(err.to_string().contains("2x2"));
    }
}
