//! The triangular matrix-vector multiply kernel.
//!
//! Six loop shapes cover the (triangle, transform) fan-out; conjugation and
//! the implicit unit diagonal are innermost conditionals rather than
//! duplicated loop nests. The no-transpose shapes accumulate a row dot
//! product into a scalar before storing; the transpose shapes broadcast each
//! `x_i` into the rows it contributes to. In both forms the outer traversal
//! direction is chosen so that no element of x still needed by a later row
//! has been overwritten, which is what lets the update run in place with a
//! single scalar temporary.
//!
//! All shapes walk A row-contiguously. The inner loop bounds are derived
//! from the triangle and the row index, so storage outside the triangle is
//! never dereferenced.

use num_complex::Complex64;
use num_traits::Zero;

use crate::types::{Diag, Transpose, Uplo};
use crate::{Result, TrmvError};

/// Computes `x ← op(A)·x` in place for a triangular matrix A.
///
/// A is n×n, stored row-major inside `a` with leading dimension `lda`
/// (entry (i, j) at `a[i*lda + j]`); only the triangle selected by `uplo` is
/// read, and with [`Diag::Unit`] the diagonal storage is skipped as well.
/// `x` holds n logical elements at stride `incx`: element i lives at offset
/// `kx + i*incx`, where `kx` is 0 for a positive stride and
/// `(n-1)*|incx|` for a negative one.
///
/// # Errors
///
/// Returns an error without touching either operand if `lda < max(1, n)`,
/// `incx == 0`, or either buffer is too short for the requested geometry.
/// `n == 0` is a valid no-op.
#[allow(clippy::too_many_arguments)]
pub fn ztrmv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[Complex64],
    lda: usize,
    x: &mut [Complex64],
    incx: isize,
) -> Result<()> {
    if lda < n.max(1) {
        return Err(TrmvError::InvalidLeadingDimension { lda, n });
    }
    if incx == 0 {
        return Err(TrmvError::ZeroIncrement);
    }

    // Quick return, before the slice-length checks: with no elements in
    // play the buffers may legitimately be empty.
    if n == 0 {
        return Ok(());
    }

    let min_a = (n - 1) * lda + n;
    if a.len() < min_a {
        return Err(TrmvError::ShortMatrix {
            len: a.len(),
            required: min_a,
        });
    }
    let min_x = (n - 1) * incx.unsigned_abs() + 1;
    if x.len() < min_x {
        return Err(TrmvError::ShortVector {
            len: x.len(),
            required: min_x,
        });
    }

    // Offset of the first logical element.
    let kx = if incx > 0 {
        0
    } else {
        (n - 1) * incx.unsigned_abs()
    };

    let unit = diag == Diag::Unit;
    match (uplo, trans) {
        (Uplo::Upper, Transpose::NoTrans) => upper_notrans(n, a, lda, x, incx, kx, unit),
        (Uplo::Lower, Transpose::NoTrans) => lower_notrans(n, a, lda, x, incx, kx, unit),
        (Uplo::Upper, Transpose::Trans) => upper_trans(n, a, lda, x, incx, kx, unit, false),
        (Uplo::Upper, Transpose::ConjTrans) => upper_trans(n, a, lda, x, incx, kx, unit, true),
        (Uplo::Lower, Transpose::Trans) => lower_trans(n, a, lda, x, incx, kx, unit, false),
        (Uplo::Lower, Transpose::ConjTrans) => lower_trans(n, a, lda, x, incx, kx, unit, true),
    }
    Ok(())
}

/// Physical offset of logical element `i`.
#[inline]
fn at(kx: usize, i: usize, incx: isize) -> usize {
    (kx as isize + i as isize * incx) as usize
}

/// Optional conjugation, applied per element inside the transpose shapes.
#[inline]
fn op(conj: bool, v: Complex64) -> Complex64 {
    if conj {
        v.conj()
    } else {
        v
    }
}

/// x ← A·x, upper triangle. Row i depends on x[j] for j ≥ i, so rows are
/// processed first to last.
fn upper_notrans(
    n: usize,
    a: &[Complex64],
    lda: usize,
    x: &mut [Complex64],
    incx: isize,
    kx: usize,
    unit: bool,
) {
    if incx == 1 {
        for i in 0..n {
            let row = &a[i * lda..i * lda + n];
            let mut sum = Complex64::zero();
            for j in i + 1..n {
                sum += row[j] * x[j];
            }
            x[i] = if unit { x[i] + sum } else { row[i] * x[i] + sum };
        }
    } else {
        for i in 0..n {
            let row = i * lda;
            let mut sum = Complex64::zero();
            for j in i + 1..n {
                sum += a[row + j] * x[at(kx, j, incx)];
            }
            let xi = at(kx, i, incx);
            x[xi] = if unit {
                x[xi] + sum
            } else {
                a[row + i] * x[xi] + sum
            };
        }
    }
}

/// x ← A·x, lower triangle. Row i depends on x[j] for j ≤ i, so rows are
/// processed last to first.
fn lower_notrans(
    n: usize,
    a: &[Complex64],
    lda: usize,
    x: &mut [Complex64],
    incx: isize,
    kx: usize,
    unit: bool,
) {
    if incx == 1 {
        for i in (0..n).rev() {
            let row = &a[i * lda..i * lda + i + 1];
            let mut sum = Complex64::zero();
            for j in 0..i {
                sum += row[j] * x[j];
            }
            x[i] = if unit { x[i] + sum } else { row[i] * x[i] + sum };
        }
    } else {
        for i in (0..n).rev() {
            let row = i * lda;
            let mut sum = Complex64::zero();
            for j in 0..i {
                sum += a[row + j] * x[at(kx, j, incx)];
            }
            let xi = at(kx, i, incx);
            x[xi] = if unit {
                x[xi] + sum
            } else {
                a[row + i] * x[xi] + sum
            };
        }
    }
}

/// x ← Aᵀ·x or Aᴴ·x, upper triangle. Row i of A contributes x_i into every
/// x[j] with j > i, so rows are processed last to first: when row i runs,
/// x[i] still holds its original value while the slots above it accumulate.
/// Keeping the broadcast form makes the access to A row-contiguous.
#[allow(clippy::too_many_arguments)]
fn upper_trans(
    n: usize,
    a: &[Complex64],
    lda: usize,
    x: &mut [Complex64],
    incx: isize,
    kx: usize,
    unit: bool,
    conj: bool,
) {
    if incx == 1 {
        for i in (0..n).rev() {
            let row = &a[i * lda..i * lda + n];
            let xi = x[i];
            for j in i + 1..n {
                x[j] += op(conj, row[j]) * xi;
            }
            x[i] = if unit { xi } else { op(conj, row[i]) * xi };
        }
    } else {
        for i in (0..n).rev() {
            let row = i * lda;
            let xi = x[at(kx, i, incx)];
            for j in i + 1..n {
                x[at(kx, j, incx)] += op(conj, a[row + j]) * xi;
            }
            x[at(kx, i, incx)] = if unit { xi } else { op(conj, a[row + i]) * xi };
        }
    }
}

/// x ← Aᵀ·x or Aᴴ·x, lower triangle. Row i contributes x_i into every x[j]
/// with j < i, so rows are processed first to last.
#[allow(clippy::too_many_arguments)]
fn lower_trans(
    n: usize,
    a: &[Complex64],
    lda: usize,
    x: &mut [Complex64],
    incx: isize,
    kx: usize,
    unit: bool,
    conj: bool,
) {
    if incx == 1 {
        for i in 0..n {
            let row = &a[i * lda..i * lda + i + 1];
            let xi = x[i];
            for j in 0..i {
                x[j] += op(conj, row[j]) * xi;
            }
            x[i] = if unit { xi } else { op(conj, row[i]) * xi };
        }
    } else {
        for i in 0..n {
            let row = i * lda;
            let xi = x[at(kx, i, incx)];
            for j in 0..i {
                x[at(kx, j, incx)] += op(conj, a[row + j]) * xi;
            }
            x[at(kx, i, incx)] = if unit { xi } else { op(conj, a[row + i]) * xi };
        }
    }
}
