//! In-place complex triangular matrix-vector multiply over strided vectors.
//!
//! This crate provides [`ztrmv`], the double-precision complex Level-2 BLAS
//! primitive `x ← op(A)·x`, where A is an n×n triangular matrix stored inside
//! a row-major general buffer with an explicit leading dimension, x is a
//! vector addressed through a fixed (possibly negative) stride, and `op` is
//! the identity, transpose, or conjugate transpose.
//!
//! # Core guarantees
//!
//! - Only the configured triangle of A is ever dereferenced; with
//!   [`Diag::Unit`] the diagonal storage is never read either. The rest of
//!   the buffer (padding past the logical row, the opposite triangle) may
//!   hold arbitrary garbage, including NaN.
//! - A is read-only; x is updated strictly in place with a single scalar
//!   temporary per row, no O(n) scratch.
//! - A negative stride walks the logical sequence from the end of the
//!   buffer backwards (the CBLAS convention), so the logical result is
//!   independent of the stride's sign and magnitude.
//!
//! # Example
//!
//! ```rust
//! use num_complex::Complex64;
//! use ztrmv_rs::{ztrmv, Diag, Transpose, Uplo};
//!
//! // A = [[1, 2], [·, 3]] row-major; the lower-left slot is never read.
//! let a = vec![
//!     Complex64::new(1.0, 0.0),
//!     Complex64::new(2.0, 0.0),
//!     Complex64::new(f64::NAN, f64::NAN),
//!     Complex64::new(3.0, 0.0),
//! ];
//! let mut x = vec![Complex64::new(1.0, 0.0); 2];
//!
//! ztrmv(Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, &a, 2, &mut x, 1).unwrap();
//!
//! assert_eq!(x[0], Complex64::new(3.0, 0.0));
//! assert_eq!(x[1], Complex64::new(3.0, 0.0));
//! ```

mod kernel;
mod types;

pub use kernel::ztrmv;
pub use types::{Diag, Transpose, Uplo};

// ============================================================================
// Error types
// ============================================================================

/// Caller-contract violations detected before any element is touched.
///
/// These are programmer errors, not recoverable conditions: the operands are
/// left untouched when any of them is returned. Arithmetic non-finites in
/// referenced entries are *not* errors; they propagate through the
/// computation with ordinary IEEE semantics.
#[derive(Debug, thiserror::Error)]
pub enum TrmvError {
    /// The leading dimension is smaller than the matrix order allows.
    #[error("leading dimension {lda} too small for order {n}")]
    InvalidLeadingDimension { lda: usize, n: usize },

    /// A zero vector stride would alias every logical element.
    #[error("vector increment must be non-zero")]
    ZeroIncrement,

    /// The matrix buffer cannot hold n rows at the given leading dimension.
    #[error("matrix buffer too short: {len} < {required}")]
    ShortMatrix { len: usize, required: usize },

    /// The vector buffer cannot hold n elements at the given stride.
    #[error("vector buffer too short: {len} < {required}")]
    ShortVector { len: usize, required: usize },
}

/// Result type for triangular matrix-vector operations.
pub type Result<T> = std::result::Result<T, TrmvError>;
