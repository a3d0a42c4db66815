//! N-dimensional vector algebra.
//!
//! `Vector` is the numeric primitive the whole engine is built on:
//! positions, velocities, steering forces and world bounds are all
//! vectors of some fixed dimension. Every instance owns its own
//! component buffer, and every binary operation checks that both
//! operands agree on dimension before touching the components.

use crate::error::{FlockError, Result};
use std::fmt;

/// An N-dimensional vector over `f64` components.
///
/// Binary operations between vectors of unequal dimension fail with
/// [`FlockError::DimensionMismatch`]; nothing is ever silently coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// A vector of the given dimension with every component zero.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            components: vec![0.0; dimension],
        }
    }

    /// Builds a vector that takes ownership of the given components.
    /// The dimension is the length of the input.
    pub fn from_components(components: Vec<f64>) -> Self {
        Self { components }
    }

    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Read-only view of the component buffer.
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Single component read; the index must be in `[0, dimension)`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.components
            .get(index)
            .copied()
            .ok_or(FlockError::IndexOutOfRange {
                index,
                dimension: self.components.len(),
            })
    }

    /// Single component write; the index must be in `[0, dimension)`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let dimension = self.components.len();
        match self.components.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(FlockError::IndexOutOfRange { index, dimension }),
        }
    }

    fn check_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(FlockError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    /// Component-wise sum as a new vector.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        let components = self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Vector { components })
    }

    /// Component-wise difference as a new vector.
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        let components = self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Vector { components })
    }

    /// Component-wise multiplication by a scalar.
    pub fn scale(&self, scalar: f64) -> Vector {
        Vector {
            components: self.components.iter().map(|c| c * scalar).collect(),
        }
    }

    /// Component-wise division by a nonzero scalar.
    pub fn divide(&self, scalar: f64) -> Result<Vector> {
        if scalar == 0.0 {
            return Err(FlockError::InvalidArgument(
                "cannot divide a vector by zero".to_string(),
            ));
        }
        Ok(Vector {
            components: self.components.iter().map(|c| c / scalar).collect(),
        })
    }

    /// Component-wise sign negation.
    pub fn inverse(&self) -> Vector {
        Vector {
            components: self.components.iter().map(|c| -c).collect(),
        }
    }

    /// The standard inner product `Σ aᵢ·bᵢ`.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dimension(other)?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Generalization of the 3D cross product formula
    /// `c[i] = a[i+1]·b[i+2] − a[i+2]·b[i+1]` with indices taken modulo
    /// the dimension. Only a true cross product for dimension 3; for any
    /// other dimension the result is defined purely by this formula.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        let n = self.dimension();
        let mut components = vec![0.0; n];
        for i in 0..n {
            let j = (i + 1) % n;
            let k = (i + 2) % n;
            components[i] =
                self.components[j] * other.components[k] - self.components[k] * other.components[j];
        }
        Ok(Vector { components })
    }

    /// Euclidean length, `sqrt(dot(self, self))`.
    pub fn magnitude(&self) -> f64 {
        self.components
            .iter()
            .map(|c| c * c)
            .sum::<f64>()
            .sqrt()
    }

    /// A copy scaled to unit magnitude. A zero-magnitude vector has no
    /// direction, so it is returned unchanged.
    pub fn normalize(&self) -> Vector {
        let mag = self.magnitude();
        if mag > 0.0 {
            Vector {
                components: self.components.iter().map(|c| c / mag).collect(),
            }
        } else {
            self.clone()
        }
    }

    /// Clamps the magnitude to `cap`, preserving direction. Vectors at or
    /// under the cap are returned unchanged, bit for bit.
    pub fn limit(&self, cap: f64) -> Vector {
        if self.magnitude() > cap {
            self.normalize().scale(cap)
        } else {
            self.clone()
        }
    }

    /// Euclidean distance to another vector of the same dimension.
    pub fn distance(&self, other: &Vector) -> Result<f64> {
        Ok(self.subtract(other)?.magnitude())
    }

    /// In-place component-wise sum.
    pub fn add_assign(&mut self, other: &Vector) -> Result<()> {
        self.check_dimension(other)?;
        for (a, b) in self.components.iter_mut().zip(&other.components) {
            *a += b;
        }
        Ok(())
    }

    /// In-place component-wise difference.
    pub fn subtract_assign(&mut self, other: &Vector) -> Result<()> {
        self.check_dimension(other)?;
        for (a, b) in self.components.iter_mut().zip(&other.components) {
            *a -= b;
        }
        Ok(())
    }

    /// In-place scalar multiplication.
    pub fn scale_assign(&mut self, scalar: f64) {
        for c in self.components.iter_mut() {
            *c *= scalar;
        }
    }

    /// In-place division by a nonzero scalar.
    pub fn divide_assign(&mut self, scalar: f64) -> Result<()> {
        if scalar == 0.0 {
            return Err(FlockError::InvalidArgument(
                "cannot divide a vector by zero".to_string(),
            ));
        }
        for c in self.components.iter_mut() {
            *c /= scalar;
        }
        Ok(())
    }

    /// In-place sign negation.
    pub fn inverse_assign(&mut self) {
        for c in self.components.iter_mut() {
            *c = -*c;
        }
    }

    /// In-place normalization; a zero-magnitude vector is left unchanged.
    pub fn normalize_assign(&mut self) {
        let mag = self.magnitude();
        if mag > 0.0 {
            for c in self.components.iter_mut() {
                *c /= mag;
            }
        }
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Self {
        Self {
            components: components.to_vec(),
        }
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self {
            components: components.to_vec(),
        }
    }
}

impl fmt::Display for Vector {
    /// Renders as `[v0, v1, ..., vN-1]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let v = Vector::zeros(4);
        assert_eq!(v.dimension(), 4);
        assert_eq!(v.components(), &[0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_components_owns_storage() {
        let data = vec![1.0, 2.0];
        let mut a = Vector::from_components(data.clone());
        let b = Vector::from_components(data);
        a.set(0, 9.0).unwrap();
        // b must be untouched by writes through a
        assert_eq!(b.get(0).unwrap(), 1.0);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut v = Vector::zeros(2);
        v.set(1, 5.0).unwrap();
        assert_eq!(v.get(1).unwrap(), 5.0);
        assert_eq!(
            v.get(2),
            Err(FlockError::IndexOutOfRange {
                index: 2,
                dimension: 2
            })
        );
        assert_eq!(
            v.set(7, 1.0),
            Err(FlockError::IndexOutOfRange {
                index: 7,
                dimension: 2
            })
        );
    }

    #[test]
    fn test_add_zero_identity() {
        let a = Vector::from([4.0, 2.0]);
        let sum = a.add(&Vector::zeros(2)).unwrap();
        assert_eq!(sum, a);
    }

    #[test]
    fn test_subtract_large_integers() {
        // f64 carries integers this size exactly
        let a = Vector::from([6.0, 123123123123.0]);
        let b = Vector::from([4.0, 2.0]);
        let diff = a.subtract(&b).unwrap();
        assert_eq!(diff, Vector::from([2.0, 123123123121.0]));
    }

    #[test]
    fn test_scale() {
        let v = Vector::from([4.0, 2.0]).scale(2.0);
        assert_eq!(v, Vector::from([8.0, 4.0]));
    }

    #[test]
    fn test_add_then_subtract_recovers() {
        let a = Vector::from([1.5, -2.0, 7.25]);
        let b = Vector::from([0.5, 3.0, -1.25]);
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_scale_then_divide_recovers() {
        let a = Vector::from([3.0, -6.0]);
        let back = a.scale(4.0).divide(4.0).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_divide_by_zero_fails() {
        let v = Vector::from([1.0, 1.0]);
        assert!(matches!(
            v.divide(0.0),
            Err(FlockError::InvalidArgument(_))
        ));
        let mut m = v.clone();
        assert!(matches!(
            m.divide_assign(0.0),
            Err(FlockError::InvalidArgument(_))
        ));
        // receiver untouched on failure
        assert_eq!(m, v);
    }

    #[test]
    fn test_inverse() {
        let v = Vector::from([1.0, -2.0, 0.0]).inverse();
        assert_eq!(v, Vector::from([-1.0, 2.0, 0.0]));
    }

    #[test]
    fn test_dot_is_inner_product() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([4.0, -5.0, 6.0]);
        assert_eq!(a.dot(&b).unwrap(), 4.0 - 10.0 + 18.0);
    }

    #[test]
    fn test_dot_symmetric_and_matches_magnitude() {
        let a = Vector::from([3.0, 4.0]);
        let b = Vector::from([-1.0, 2.5]);
        assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
        // dot(a, a) == |a|^2 -- this fails for the additive formula
        let mag = a.magnitude();
        assert!((a.dot(&a).unwrap() - mag * mag).abs() < 1e-9);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Vector::zeros(2);
        let b = Vector::zeros(3);
        let expected = FlockError::DimensionMismatch { left: 2, right: 3 };
        assert_eq!(a.add(&b).unwrap_err(), expected);
        assert_eq!(a.subtract(&b).unwrap_err(), expected);
        assert_eq!(a.dot(&b).unwrap_err(), expected);
        assert_eq!(a.cross(&b).unwrap_err(), expected);
    }

    #[test]
    fn test_cross_product_3d_basis() {
        let x = Vector::from([1.0, 0.0, 0.0]);
        let y = Vector::from([0.0, 1.0, 0.0]);
        assert_eq!(x.cross(&y).unwrap(), Vector::from([0.0, 0.0, 1.0]));
        assert_eq!(y.cross(&x).unwrap(), Vector::from([0.0, 0.0, -1.0]));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector::from([3.0, 4.0]).magnitude(), 5.0);
        assert_eq!(Vector::zeros(3).magnitude(), 0.0);
    }

    #[test]
    fn test_normalize_unit_magnitude() {
        let v = Vector::from([3.0, 4.0, 12.0]);
        assert!((v.normalize().magnitude() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_zero_stays_zero() {
        let zero = Vector::zeros(3);
        assert_eq!(zero.normalize(), zero);
        let mut m = Vector::zeros(2);
        m.normalize_assign();
        assert_eq!(m, Vector::zeros(2));
    }

    #[test]
    fn test_limit_under_cap_unchanged() {
        let v = Vector::from([1.0, 2.0]);
        assert_eq!(v.limit(10.0), v);
    }

    #[test]
    fn test_limit_over_cap_clamps_preserving_direction() {
        let v = Vector::from([3.0, 4.0]);
        let capped = v.limit(1.0);
        assert!((capped.magnitude() - 1.0).abs() < 1e-9);
        // same direction: components stay proportional
        assert!((capped.get(0).unwrap() - 0.6).abs() < 1e-9);
        assert!((capped.get(1).unwrap() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_distance() {
        let a = Vector::from([0.0, 0.0]);
        let b = Vector::from([3.0, 4.0]);
        assert_eq!(a.distance(&b).unwrap(), 5.0);
    }

    #[test]
    fn test_assign_ops() {
        let mut v = Vector::from([1.0, 2.0]);
        v.add_assign(&Vector::from([1.0, 1.0])).unwrap();
        assert_eq!(v, Vector::from([2.0, 3.0]));
        v.subtract_assign(&Vector::from([2.0, 2.0])).unwrap();
        assert_eq!(v, Vector::from([0.0, 1.0]));
        v.scale_assign(4.0);
        assert_eq!(v, Vector::from([0.0, 4.0]));
        v.divide_assign(2.0).unwrap();
        assert_eq!(v, Vector::from([0.0, 2.0]));
        v.inverse_assign();
        assert_eq!(v, Vector::from([0.0, -2.0]));
        v.normalize_assign();
        assert_eq!(v, Vector::from([0.0, -1.0]));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Vector::from([1.0, 2.0]), Vector::from([1.0, 2.0]));
        assert_ne!(Vector::from([1.0, 2.0]), Vector::from([1.0, 3.0]));
        // differing dimension compares unequal, it does not error
        assert_ne!(Vector::zeros(2), Vector::zeros(3));
    }

    #[test]
    fn test_display() {
        let v = Vector::from([1.0, -2.5, 3.0]);
        assert_eq!(v.to_string(), "[1, -2.5, 3]");
        assert_eq!(Vector::zeros(1).to_string(), "[0]");
    }
}
