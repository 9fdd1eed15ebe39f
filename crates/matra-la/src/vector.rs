use crate::error::{LinAlgError, Result};
use crate::matrix::Matrix;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use matra::Scalar;

/// Absolute tolerance of the parallel-vector test. Orthogonality and the
/// pivot search compare against exact zero instead; the asymmetry is part of
/// the reference behavior.
const PARALLEL_TOLERANCE: f64 = 1e-6;

/// Heap-allocated vector of scalars.
///
/// Follows the same explicit-destination convention as [`Matrix`]: the
/// `*_into` operations write into a caller-supplied vector, the allocating
/// variants create their own.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector<S> {
    data: Vec<S>,
}

impl<S: Scalar> Vector<S> {
    /// Create from raw data.
    #[inline]
    pub fn from_vec(data: Vec<S>) -> Self {
        Self { data }
    }

    /// Create from a slice.
    pub fn from_slice(s: &[S]) -> Self {
        Self { data: s.to_vec() }
    }

    /// Create a zero vector of given length.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: alloc::vec![S::ZERO; n],
        }
    }

    /// Create from a function.
    pub fn from_fn(n: usize, f: impl Fn(usize) -> S) -> Self {
        Self {
            data: (0..n).map(f).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<S> {
        self.data
    }

    /// Element access.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[inline]
    pub fn get(&self, i: usize) -> S {
        self.data[i]
    }

    /// Set element.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[inline]
    pub fn set(&mut self, i: usize, val: S) {
        self.data[i] = val;
    }

    /// Iterator over elements.
    pub fn iter(&self) -> core::slice::Iter<'_, S> {
        self.data.iter()
    }

    fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinAlgError::DimensionMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> Result<S> {
        self.check_same_len(other)?;
        let mut sum = S::ZERO;
        for i in 0..self.len() {
            sum += self.data[i] * other.data[i];
        }
        Ok(sum)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> S {
        let mut sum = S::ZERO;
        for &x in &self.data {
            sum += x * x;
        }
        sum.sqrt()
    }

    /// Apply `f(element, index, source)` into the destination.
    pub fn map_into(&self, dest: &mut Self, f: impl Fn(S, usize, &Self) -> S) -> Result<()> {
        self.check_same_len(dest)?;
        for i in 0..self.data.len() {
            dest.data[i] = f(self.data[i], i, self);
        }
        Ok(())
    }

    /// Allocating [`map_into`](Self::map_into).
    pub fn map(&self, f: impl Fn(S, usize, &Self) -> S) -> Self {
        let mut dest = Self::zeros(self.len());
        for i in 0..self.data.len() {
            dest.data[i] = f(self.data[i], i, self);
        }
        dest
    }

    /// Elementwise sum into the destination.
    pub fn add_into(&self, rhs: &Self, dest: &mut Self) -> Result<()> {
        self.check_same_len(rhs)?;
        self.map_into(dest, |x, i, _| x + rhs.data[i])
    }

    /// Elementwise difference into the destination.
    pub fn sub_into(&self, rhs: &Self, dest: &mut Self) -> Result<()> {
        self.check_same_len(rhs)?;
        self.map_into(dest, |x, i, _| x - rhs.data[i])
    }

    /// Scale all elements into the destination.
    pub fn scale_into(&self, x: S, dest: &mut Self) -> Result<()> {
        self.map_into(dest, |n, _, _| n * x)
    }

    /// Divide by the norm into the destination.
    ///
    /// A zero vector yields non-finite components; the division is not
    /// special-cased.
    pub fn normalize_into(&self, dest: &mut Self) -> Result<()> {
        let n = self.norm();
        self.map_into(dest, |x, _, _| x / n)
    }

    /// Allocating [`normalize_into`](Self::normalize_into).
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        self.map(|x, _, _| x / n)
    }

    /// Exact orthogonality test: the dot product is compared against zero
    /// with no tolerance.
    pub fn is_orthogonal_to(&self, other: &Self) -> Result<bool> {
        Ok(self.dot(other)? == S::ZERO)
    }

    /// Parallelism test: every componentwise ratio must match the first one
    /// within an absolute tolerance of 1e-6. A zero denominator maps its
    /// ratio to zero.
    pub fn is_parallel_to(&self, other: &Self) -> Result<bool> {
        self.check_same_len(other)?;
        if self.is_empty() {
            return Ok(true);
        }
        let tolerance = S::from_f64(PARALLEL_TOLERANCE);
        let ratio = |a: S, b: S| if b == S::ZERO { S::ZERO } else { a / b };
        let reference = ratio(self.data[0], other.data[0]);
        for i in 1..self.len() {
            if (ratio(self.data[i], other.data[i]) - reference).abs() > tolerance {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Angle between two vectors: `acos(dot / (|a| * |b|))`.
    pub fn angle_to(&self, other: &Self) -> Result<S> {
        Ok((self.dot(other)? / (self.norm() * other.norm())).acos())
    }

    /// Mixed (triple) product of `n` vectors in `n`-dimensional space:
    /// the determinant of the matrix stacking them as rows.
    pub fn mixed_product(vectors: &[Self]) -> Result<S> {
        let n = vectors.len();
        if n == 0 {
            return Err(LinAlgError::InvalidArgument(String::from(
                "mixed product needs at least one vector",
            )));
        }
        for v in vectors {
            if v.len() != n {
                return Err(LinAlgError::InvalidArgument(alloc::format!(
                    "mixed product of {n} vectors needs dimension {n}, got {}",
                    v.len()
                )));
            }
        }
        let stacked = Matrix::from_fn(n, n, |i, j| vectors[i].data[j])?;
        stacked.determinant()
    }

    /// Generalized cross product of `n - 1` vectors in `n`-dimensional
    /// space: the inputs become the first `n - 1` rows of an `n x n` matrix
    /// whose last row stays zero, and the last column of its adjugate is the
    /// result. Cofactor expansion along the omitted row makes it orthogonal
    /// to every input.
    pub fn cross_product(vectors: &[Self]) -> Result<Self> {
        if vectors.is_empty() {
            return Err(LinAlgError::InvalidArgument(String::from(
                "cross product needs at least one vector",
            )));
        }
        let n = vectors.len() + 1;
        for v in vectors {
            if v.len() != n {
                return Err(LinAlgError::InvalidArgument(alloc::format!(
                    "cross product of {} vectors needs dimension {n}, got {}",
                    n - 1,
                    v.len()
                )));
            }
        }
        let stacked = Matrix::from_fn(n, n, |i, j| {
            if i + 1 < n {
                vectors[i].data[j]
            } else {
                S::ZERO
            }
        })?;
        let adjugate = stacked.adjugate()?;
        Ok(Self::from_fn(n, |i| adjugate.get(i, n - 1)))
    }
}

impl<S: Scalar> Index<usize> for Vector<S> {
    type Output = S;
    #[inline]
    fn index(&self, i: usize) -> &S {
        &self.data[i]
    }
}

impl<S: Scalar> IndexMut<usize> for Vector<S> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut S {
        &mut self.data[i]
    }
}

impl<S: Scalar> Add for &Vector<S> {
    type Output = Vector<S>;
    fn add(self, rhs: &Vector<S>) -> Vector<S> {
        let mut dest = Vector::zeros(self.len());
        match self.add_into(rhs, &mut dest) {
            Ok(()) => dest,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: Scalar> Sub for &Vector<S> {
    type Output = Vector<S>;
    fn sub(self, rhs: &Vector<S>) -> Vector<S> {
        let mut dest = Vector::zeros(self.len());
        match self.sub_into(rhs, &mut dest) {
            Ok(()) => dest,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: Scalar> Neg for &Vector<S> {
    type Output = Vector<S>;
    fn neg(self) -> Vector<S> {
        self.map(|x, _, _| -x)
    }
}

impl<S: Scalar> Mul<S> for &Vector<S> {
    type Output = Vector<S>;
    fn mul(self, rhs: S) -> Vector<S> {
        self.map(|x, _, _| x * rhs)
    }
}

impl<S: Scalar> AddAssign<&Vector<S>> for Vector<S> {
    fn add_assign(&mut self, rhs: &Vector<S>) {
        if let Err(e) = self.check_same_len(rhs) {
            panic!("{e}");
        }
        for i in 0..self.len() {
            self.data[i] += rhs.data[i];
        }
    }
}

impl<S: Scalar> SubAssign<&Vector<S>> for Vector<S> {
    fn sub_assign(&mut self, rhs: &Vector<S>) {
        if let Err(e) = self.check_same_len(rhs) {
            panic!("{e}");
        }
        for i in 0..self.len() {
            self.data[i] -= rhs.data[i];
        }
    }
}

impl<S: Scalar> MulAssign<S> for Vector<S> {
    fn mul_assign(&mut self, rhs: S) {
        for x in &mut self.data {
            *x *= rhs;
        }
    }
}

impl<S: Scalar> fmt::Display for Vector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn dot_product() {
        let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b).unwrap(), 32.0);

        let short = Vector::from_slice(&[1.0]);
        assert_eq!(
            a.dot(&short).unwrap_err(),
            LinAlgError::DimensionMismatch { left: 3, right: 1 }
        );
    }

    #[test]
    fn norm() {
        let v = Vector::from_slice(&[3.0, 4.0]);
        assert!((v.norm() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn normalize() {
        let v = Vector::from_slice(&[3.0, 4.0]);
        let n = v.normalized();
        assert!((n.norm() - 1.0).abs() < 1e-10);
        assert_eq!(n.as_slice(), &[0.6, 0.8]);
    }

    #[test]
    fn normalize_zero_vector_is_not_special_cased() {
        let v = Vector::from_slice(&[0.0, 0.0]);
        let n = v.normalized();
        assert!(n.as_slice().iter().all(|x: &f64| x.is_nan()));
    }

    #[test]
    fn destination_convention() {
        let a = Vector::from_slice(&[1.0, 2.0]);
        let b = Vector::from_slice(&[3.0, 4.0]);
        let mut dest = Vector::zeros(2);
        a.add_into(&b, &mut dest).unwrap();
        assert_eq!(dest.as_slice(), &[4.0, 6.0]);
        a.sub_into(&b, &mut dest).unwrap();
        assert_eq!(dest.as_slice(), &[-2.0, -2.0]);
        a.scale_into(10.0, &mut dest).unwrap();
        assert_eq!(dest.as_slice(), &[10.0, 20.0]);

        let mut wrong = Vector::zeros(3);
        assert!(a.add_into(&b, &mut wrong).is_err());
    }

    #[test]
    fn orthogonality_is_exact() {
        let a = Vector::from_slice(&[1.0, 0.0]);
        let b = Vector::from_slice(&[0.0, 5.0]);
        assert!(a.is_orthogonal_to(&b).unwrap());

        // 1e-12 off axis: no tolerance applies.
        let c = Vector::from_slice(&[1e-12, 5.0]);
        assert!(!a.is_orthogonal_to(&c).unwrap());
    }

    #[test]
    fn parallel_within_tolerance() {
        let a = Vector::from_slice(&[1.0, 2.0, 4.0]);
        let b = Vector::from_slice(&[0.5, 1.0, 2.0]);
        assert!(a.is_parallel_to(&b).unwrap());

        let skew = Vector::from_slice(&[1.0, 2.0, 5.0]);
        assert!(!a.is_parallel_to(&skew).unwrap());

        // Componentwise ratios 2.0 and 2.0000005 agree within 1e-6.
        let near = Vector::from_slice(&[2.0, 4.000001]);
        let base = Vector::from_slice(&[1.0, 2.0]);
        assert!(near.is_parallel_to(&base).unwrap());
    }

    #[test]
    fn parallel_zero_denominator_ratio_is_zero() {
        // Reference ratio is 0 because other[0] is 0; all further ratios
        // must be 0 as well.
        let a = Vector::from_slice(&[1.0, 0.0]);
        let b = Vector::from_slice(&[0.0, 2.0]);
        assert!(a.is_parallel_to(&b).unwrap());

        let c = Vector::from_slice(&[1.0, 2.0]);
        assert!(!c.is_parallel_to(&b).unwrap());

        let short = Vector::from_slice(&[1.0]);
        assert!(a.is_parallel_to(&short).is_err());
    }

    #[test]
    fn angle_between_axes() {
        let a = Vector::from_slice(&[1.0, 0.0]);
        let b = Vector::from_slice(&[0.0, 3.0]);
        assert!((a.angle_to(&b).unwrap() - core::f64::consts::FRAC_PI_2).abs() < 1e-10);
        assert!(a.angle_to(&a).unwrap().abs() < 1e-7);
    }

    #[test]
    fn mixed_product_is_stacked_determinant() {
        let v1 = Vector::from_slice(&[1.0, 0.0, 0.0]);
        let v2 = Vector::from_slice(&[0.0, 1.0, 0.0]);
        let v3 = Vector::from_slice(&[0.0, 0.0, 2.0]);
        assert_eq!(Vector::mixed_product(&[v1, v2, v3]).unwrap(), 2.0);
    }

    #[test]
    fn mixed_product_argument_checks() {
        assert!(matches!(
            Vector::<f64>::mixed_product(&[]),
            Err(LinAlgError::InvalidArgument(_))
        ));
        // Two 3-dimensional vectors are not a valid 2-vector mixed product.
        let v1 = Vector::from_slice(&[1.0, 0.0, 0.0]);
        let v2 = Vector::from_slice(&[0.0, 1.0, 0.0]);
        assert!(matches!(
            Vector::mixed_product(&[v1, v2]),
            Err(LinAlgError::InvalidArgument(_))
        ));
    }

    #[test]
    fn cross_product_3d() {
        let x = Vector::from_slice(&[1.0, 0.0, 0.0]);
        let y = Vector::from_slice(&[0.0, 1.0, 0.0]);
        let z = Vector::cross_product(&[x, y]).unwrap();
        assert_eq!(z.as_slice(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn cross_product_2d_perpendicular() {
        let v = Vector::from_slice(&[3.0, 4.0]);
        let p = Vector::cross_product(&[v.clone()]).unwrap();
        assert_eq!(p.as_slice(), &[-4.0, 3.0]);
        assert!(v.is_orthogonal_to(&p).unwrap());
    }

    #[test]
    fn cross_product_orthogonal_to_all_inputs() {
        let v1 = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let v2 = Vector::from_slice(&[0.0, 1.0, 0.0, 1.0]);
        let v3 = Vector::from_slice(&[2.0, 0.0, 1.0, 0.0]);
        let c = Vector::cross_product(&[v1.clone(), v2.clone(), v3.clone()]).unwrap();
        for v in [v1, v2, v3] {
            assert!(v.dot(&c).unwrap().abs() < 1e-10);
        }
    }

    #[test]
    fn cross_product_argument_checks() {
        assert!(matches!(
            Vector::<f64>::cross_product(&[]),
            Err(LinAlgError::InvalidArgument(_))
        ));
        // One 3-dimensional vector would need a 2-dimensional space.
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            Vector::cross_product(&[v]),
            Err(LinAlgError::InvalidArgument(_))
        ));
    }

    #[test]
    fn operators() {
        let a = Vector::from_slice(&[1.0, 2.0]);
        let b = Vector::from_slice(&[3.0, 4.0]);
        assert_eq!((&a + &b).as_slice(), &[4.0, 6.0]);
        assert_eq!((&a - &b).as_slice(), &[-2.0, -2.0]);
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0]);
        assert_eq!((-&a).as_slice(), &[-1.0, -2.0]);

        let mut c = a.clone();
        c += &b;
        assert_eq!(c.as_slice(), &[4.0, 6.0]);
        c -= &b;
        assert_eq!(c.as_slice(), &[1.0, 2.0]);
        c *= 3.0;
        assert_eq!(c.as_slice(), &[3.0, 6.0]);
    }

    #[test]
    fn map_passes_index_and_source() {
        let a = Vector::from_slice(&[5.0, 6.0]);
        let b = a.map(|x, i, src| x + i as f64 + src.get(0));
        assert_eq!(b.as_slice(), &[10.0, 12.0]);
    }

    #[test]
    fn display() {
        let v = Vector::from_vec(vec![1.0, 2.5]);
        assert_eq!(alloc::format!("{v}"), "(1, 2.5)");
    }
}
