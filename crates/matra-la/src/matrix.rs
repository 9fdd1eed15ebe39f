use crate::error::{LinAlgError, Result};
use crate::vector::Vector;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Index, Mul, MulAssign, Neg, Sub};
use matra::Scalar;

/// Heap-allocated row-major matrix.
///
/// Element (row, col) is stored at `data[row * cols + col]`. Shape is fixed
/// at construction; exactly-one-zero dimensions are rejected, so `rows == 0`
/// always implies `cols == 0` and vice versa.
///
/// Operations that write a result take an explicit `&mut` destination
/// (`*_into`), so the caller decides where results land; the allocating
/// variants are thin wrappers that create the destination themselves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<S> {
    data: Vec<S>,
    rows: usize,
    cols: usize,
}

impl<S: Scalar> Matrix<S> {
    /// Create from raw row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<S>) -> Result<Self> {
        Self::check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(LinAlgError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create from nested rows, inferring the shape.
    pub fn from_nested(rows2d: &[Vec<S>]) -> Result<Self> {
        let rows = rows2d.len();
        let cols = rows2d.first().map_or(0, Vec::len);
        for (i, row) in rows2d.iter().enumerate() {
            if row.len() != cols {
                return Err(LinAlgError::InvalidArgument(alloc::format!(
                    "nested row {i} has length {}, expected {cols}",
                    row.len()
                )));
            }
        }
        let mut data = Vec::with_capacity(rows * cols);
        for row in rows2d {
            data.extend_from_slice(row);
        }
        Self::from_vec(rows, cols, data)
    }

    /// Create from a function.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> S) -> Result<Self> {
        Self::check_dims(rows, cols)?;
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(Self { data, rows, cols })
    }

    /// Zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::check_dims(rows, cols)?;
        Ok(Self::with_shape(rows, cols))
    }

    /// Identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::with_shape(n, n);
        for i in 0..n {
            m.data[i * n + i] = S::ONE;
        }
        m
    }

    fn with_shape(rows: usize, cols: usize) -> Self {
        Self {
            data: alloc::vec![S::ZERO; rows * cols],
            rows,
            cols,
        }
    }

    fn check_dims(rows: usize, cols: usize) -> Result<()> {
        if (rows == 0) != (cols == 0) {
            return Err(LinAlgError::InvalidShape { rows, cols });
        }
        Ok(())
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Raw row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    /// Row slice.
    pub fn row(&self, i: usize) -> &[S] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    // Every bounds-checked access path funnels through here.
    fn checked_offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(LinAlgError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        match self.checked_offset(row, col) {
            Ok(i) => i,
            Err(e) => panic!("{e}"),
        }
    }

    /// Element access (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self.data[self.offset(row, col)]
    }

    /// Set element.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: S) {
        let i = self.offset(row, col);
        self.data[i] = val;
    }

    /// Fallible element access.
    pub fn try_get(&self, row: usize, col: usize) -> Result<S> {
        Ok(self.data[self.checked_offset(row, col)?])
    }

    /// Fallible element write.
    pub fn try_set(&mut self, row: usize, col: usize, val: S) -> Result<()> {
        let i = self.checked_offset(row, col)?;
        self.data[i] = val;
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinAlgError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        Ok(())
    }

    /// Apply `f(element, flat_index, source)` into the destination.
    ///
    /// The generic escape hatch the elementwise operations are built from.
    pub fn map_into(&self, dest: &mut Self, f: impl Fn(S, usize, &Self) -> S) -> Result<()> {
        self.check_same_shape(dest)?;
        for i in 0..self.data.len() {
            dest.data[i] = f(self.data[i], i, self);
        }
        Ok(())
    }

    /// Allocating [`map_into`](Self::map_into).
    pub fn map(&self, f: impl Fn(S, usize, &Self) -> S) -> Self {
        let mut dest = Self::with_shape(self.rows, self.cols);
        for i in 0..self.data.len() {
            dest.data[i] = f(self.data[i], i, self);
        }
        dest
    }

    /// Elementwise sum into the destination.
    pub fn add_into(&self, rhs: &Self, dest: &mut Self) -> Result<()> {
        self.check_same_shape(rhs)?;
        self.map_into(dest, |x, i, _| x + rhs.data[i])
    }

    /// Elementwise difference into the destination.
    pub fn sub_into(&self, rhs: &Self, dest: &mut Self) -> Result<()> {
        self.check_same_shape(rhs)?;
        self.map_into(dest, |x, i, _| x - rhs.data[i])
    }

    /// Scale all elements into the destination.
    pub fn scale_into(&self, x: S, dest: &mut Self) -> Result<()> {
        self.map_into(dest, |n, _, _| n * x)
    }

    /// Scale all elements.
    pub fn scale(&self, x: S) -> Self {
        self.map(|n, _, _| n * x)
    }

    /// Map every nonzero element to one, zero stays zero.
    pub fn boolean_projection_into(&self, dest: &mut Self) -> Result<()> {
        self.map_into(dest, |n, _, _| if n == S::ZERO { S::ZERO } else { S::ONE })
    }

    /// Allocating [`boolean_projection_into`](Self::boolean_projection_into).
    pub fn boolean_projection(&self) -> Self {
        self.map(|n, _, _| if n == S::ZERO { S::ZERO } else { S::ONE })
    }

    /// Matrix product into the destination, which must be shaped
    /// `(self.rows, rhs.cols)`.
    pub fn mul_into(&self, rhs: &Self, dest: &mut Self) -> Result<()> {
        if self.cols != rhs.rows {
            return Err(LinAlgError::DimensionMismatch {
                left: self.cols,
                right: rhs.rows,
            });
        }
        if dest.shape() != (self.rows, rhs.cols) {
            return Err(LinAlgError::ShapeMismatch {
                expected: (self.rows, rhs.cols),
                actual: dest.shape(),
            });
        }
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = S::ZERO;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j];
                }
                dest.data[i * rhs.cols + j] = sum;
            }
        }
        Ok(())
    }

    /// Matrix product: C = A * B.
    pub fn mul_mat(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(LinAlgError::DimensionMismatch {
                left: self.cols,
                right: rhs.rows,
            });
        }
        let mut dest = Self::with_shape(self.rows, rhs.cols);
        self.mul_into(rhs, &mut dest)?;
        Ok(dest)
    }

    /// Matrix-vector product: y = A * x.
    pub fn mul_vec(&self, x: &Vector<S>) -> Result<Vector<S>> {
        if self.cols != x.len() {
            return Err(LinAlgError::DimensionMismatch {
                left: self.cols,
                right: x.len(),
            });
        }
        let xs = x.as_slice();
        let mut y = Vec::with_capacity(self.rows);
        for i in 0..self.rows {
            let mut sum = S::ZERO;
            for j in 0..self.cols {
                sum += self.data[i * self.cols + j] * xs[j];
            }
            y.push(sum);
        }
        Ok(Vector::from_vec(y))
    }

    /// OR/AND-semiring product into the destination: a cell is one when any
    /// `self[i, k] && rhs[k, j]` pair is nonzero, with early exit per cell.
    pub fn compose_into(&self, rhs: &Self, dest: &mut Self) -> Result<()> {
        if self.cols != rhs.rows {
            return Err(LinAlgError::DimensionMismatch {
                left: self.cols,
                right: rhs.rows,
            });
        }
        if dest.shape() != (self.rows, rhs.cols) {
            return Err(LinAlgError::ShapeMismatch {
                expected: (self.rows, rhs.cols),
                actual: dest.shape(),
            });
        }
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut any = false;
                for k in 0..self.cols {
                    if self.data[i * self.cols + k] != S::ZERO
                        && rhs.data[k * rhs.cols + j] != S::ZERO
                    {
                        any = true;
                        break;
                    }
                }
                dest.data[i * rhs.cols + j] = if any { S::ONE } else { S::ZERO };
            }
        }
        Ok(())
    }

    /// Allocating [`compose_into`](Self::compose_into).
    pub fn compose(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(LinAlgError::DimensionMismatch {
                left: self.cols,
                right: rhs.rows,
            });
        }
        let mut dest = Self::with_shape(self.rows, rhs.cols);
        self.compose_into(rhs, &mut dest)?;
        Ok(dest)
    }

    /// Transpose into the destination, which must be shaped `(cols, rows)`.
    pub fn transpose_into(&self, dest: &mut Self) -> Result<()> {
        if dest.shape() != (self.cols, self.rows) {
            return Err(LinAlgError::ShapeMismatch {
                expected: (self.cols, self.rows),
                actual: dest.shape(),
            });
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                dest.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Ok(())
    }

    /// Transpose.
    pub fn transposed(&self) -> Self {
        let mut dest = Self::with_shape(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                dest.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        dest
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    // Leftmost column >= start holding a nonzero entry at row >= start.
    fn leading_nonzero_col(&self, start: usize) -> Option<usize> {
        for i in start..self.cols {
            for j in start..self.rows {
                if self.data[j * self.cols + i] != S::ZERO {
                    return Some(i);
                }
            }
        }
        None
    }

    // First row >= start with a nonzero entry in the given column.
    fn nonzero_row_in_col(&self, col: usize, start: usize) -> Option<usize> {
        (start..self.rows).find(|&i| self.data[i * self.cols + col] != S::ZERO)
    }

    /// Gauss-Jordan reduction toward upper-triangular form, on a copy.
    ///
    /// Rows are swapped only to dodge an exact-zero pivot, never to improve
    /// conditioning. Returns the reduced matrix and the row-swap count.
    pub fn to_upper_triangle(&self) -> (Self, usize) {
        let mut res = self.clone();
        let (rows, cols) = (self.rows, self.cols);
        let mut swaps = 0;
        let mut i = 0;
        while i + 1 < rows && i < cols {
            let Some(pivot_col) = res.leading_nonzero_col(i) else {
                break;
            };
            if res.data[i * cols + pivot_col] == S::ZERO {
                match res.nonzero_row_in_col(pivot_col, i) {
                    Some(row) => {
                        res.swap_rows(i, row);
                        swaps += 1;
                    }
                    None => {
                        i += 1;
                        continue;
                    }
                }
            }
            let pivot = res.data[i * cols + pivot_col];
            let divider = if pivot == S::ZERO { S::ONE } else { pivot };
            for j in (i + 1)..rows.min(cols) {
                let factor = res.data[j * cols + i];
                for k in i..cols {
                    let sub = res.data[i * cols + k] / divider * factor;
                    res.data[j * cols + k] -= sub;
                }
            }
            i += 1;
        }
        (res, swaps)
    }

    /// Determinant via elimination: product of the reduced diagonal, negated
    /// once per odd row-swap count, short-circuiting at the first zero.
    pub fn determinant(&self) -> Result<S> {
        if !self.is_square() {
            return Err(LinAlgError::NonSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows == 0 {
            return Err(LinAlgError::EmptyMatrix);
        }
        let (upper, swaps) = self.to_upper_triangle();
        let mut det = S::ONE;
        for i in 0..self.rows {
            det = det * upper.data[i * self.cols + i];
            if det == S::ZERO {
                break;
            }
        }
        Ok(if swaps % 2 == 0 { det } else { -det })
    }

    /// Rank: leading rows of the reduced form that are not entirely zero
    /// across the leading `min(rows, cols)` columns.
    pub fn rank(&self) -> usize {
        let (upper, _) = self.to_upper_triangle();
        let min = self.rows.min(self.cols);
        let mut rank = min;
        let mut i = 0;
        while i < min && rank > 0 {
            if (0..min).all(|j| upper.data[i * self.cols + j] == S::ZERO) {
                rank -= 1;
            }
            i += 1;
        }
        rank
    }

    // Submatrix with the given row and column deleted.
    fn cross_out(&self, row: usize, col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    /// Minor: determinant of the submatrix excluding the given row and column.
    pub fn minor(&self, row: usize, col: usize) -> Result<S> {
        self.checked_offset(row, col)?;
        self.cross_out(row, col).determinant()
    }

    /// Adjugate (transposed cofactor matrix) into the destination:
    /// `dest[i, j] = sign(i + j) * minor(j, i)`.
    pub fn adjugate_into(&self, dest: &mut Self) -> Result<()> {
        if !self.is_square() {
            return Err(LinAlgError::NonSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.check_same_shape(dest)?;
        let n = self.rows;
        for i in 0..n {
            for j in 0..n {
                let minor = self.minor(j, i)?;
                let sign = if (i + j) % 2 == 0 { S::ONE } else { -S::ONE };
                dest.data[i * n + j] = sign * minor;
            }
        }
        Ok(())
    }

    /// Allocating [`adjugate_into`](Self::adjugate_into).
    pub fn adjugate(&self) -> Result<Self> {
        let mut dest = Self::with_shape(self.rows, self.cols);
        self.adjugate_into(&mut dest)?;
        Ok(dest)
    }

    /// Inverse into the destination: adjugate scaled by the reciprocal
    /// determinant. The determinant must be exactly nonzero.
    pub fn inverse_into(&self, dest: &mut Self) -> Result<()> {
        let det = self.determinant()?;
        if det == S::ZERO {
            return Err(LinAlgError::Singular);
        }
        self.adjugate_into(dest)?;
        *dest *= det.recip();
        Ok(())
    }

    /// Allocating [`inverse_into`](Self::inverse_into).
    pub fn inverse(&self) -> Result<Self> {
        let mut dest = Self::with_shape(self.rows, self.cols);
        self.inverse_into(&mut dest)?;
        Ok(dest)
    }

    /// Integer power by repeated multiplication; negative exponents finish
    /// with an inversion, zero yields the identity.
    pub fn pow(&self, n: i32) -> Result<Self> {
        if !self.is_square() {
            return Err(LinAlgError::NonSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if n == 0 {
            return Ok(Self::identity(self.rows));
        }
        let mut res = self.clone();
        for _ in 1..n.unsigned_abs() {
            res = res.mul_mat(self)?;
        }
        if n < 0 {
            res.inverse()
        } else {
            Ok(res)
        }
    }
}

impl<S: Scalar> Index<(usize, usize)> for Matrix<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        &self.data[self.offset(row, col)]
    }
}

impl<S: Scalar> Add for &Matrix<S> {
    type Output = Matrix<S>;
    fn add(self, rhs: &Matrix<S>) -> Matrix<S> {
        let mut dest = Matrix::with_shape(self.rows, self.cols);
        match self.add_into(rhs, &mut dest) {
            Ok(()) => dest,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: Scalar> Sub for &Matrix<S> {
    type Output = Matrix<S>;
    fn sub(self, rhs: &Matrix<S>) -> Matrix<S> {
        let mut dest = Matrix::with_shape(self.rows, self.cols);
        match self.sub_into(rhs, &mut dest) {
            Ok(()) => dest,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: Scalar> Neg for &Matrix<S> {
    type Output = Matrix<S>;
    fn neg(self) -> Matrix<S> {
        self.map(|x, _, _| -x)
    }
}

impl<S: Scalar> Mul for &Matrix<S> {
    type Output = Matrix<S>;
    fn mul(self, rhs: &Matrix<S>) -> Matrix<S> {
        match self.mul_mat(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: Scalar> Mul<S> for &Matrix<S> {
    type Output = Matrix<S>;
    fn mul(self, rhs: S) -> Matrix<S> {
        self.scale(rhs)
    }
}

impl<S: Scalar> MulAssign<S> for Matrix<S> {
    fn mul_assign(&mut self, rhs: S) {
        for x in &mut self.data {
            *x *= rhs;
        }
    }
}

impl<S: Scalar> fmt::Display for Matrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
