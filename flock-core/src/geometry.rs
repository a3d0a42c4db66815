//! Obstacle geometry capability.
//!
//! The world stores obstacles opaquely behind a single containment test;
//! concrete shapes implement [`Obstacle`] and nothing else leaks into the
//! engine. The current force rules do not consult obstacles yet; the
//! collection is the extension point for avoidance.

use crate::vector::Vector;

/// The one capability an obstacle must expose: does the given point
/// intersect it. Queries of a different dimension than the obstacle
/// answer `false`.
pub trait Obstacle {
    fn contains(&self, point: &Vector) -> bool;
}

/// A hypersphere: all points within `radius` of `center`.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Vector,
    pub radius: f64,
}

impl Obstacle for Sphere {
    fn contains(&self, point: &Vector) -> bool {
        match point.distance(&self.center) {
            Ok(d) => d <= self.radius,
            Err(_) => false,
        }
    }
}

/// An axis-aligned box spanning `[min[i], max[i]]` on every axis.
#[derive(Debug, Clone)]
pub struct AxisAlignedBox {
    pub min: Vector,
    pub max: Vector,
}

impl Obstacle for AxisAlignedBox {
    fn contains(&self, point: &Vector) -> bool {
        if point.dimension() != self.min.dimension() || point.dimension() != self.max.dimension() {
            return false;
        }
        point
            .components()
            .iter()
            .zip(self.min.components())
            .zip(self.max.components())
            .all(|((p, lo), hi)| *p >= *lo && *p <= *hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_containment() {
        let s = Sphere {
            center: Vector::from([0.0, 0.0, 0.0]),
            radius: 5.0,
        };
        assert!(s.contains(&Vector::from([3.0, 4.0, 0.0])));
        assert!(!s.contains(&Vector::from([3.0, 4.0, 1.0])));
    }

    #[test]
    fn test_sphere_dimension_mismatch_is_false() {
        let s = Sphere {
            center: Vector::zeros(3),
            radius: 5.0,
        };
        assert!(!s.contains(&Vector::zeros(2)));
    }

    #[test]
    fn test_box_containment() {
        let b = AxisAlignedBox {
            min: Vector::from([0.0, 0.0]),
            max: Vector::from([10.0, 5.0]),
        };
        assert!(b.contains(&Vector::from([10.0, 5.0])));
        assert!(b.contains(&Vector::from([0.0, 0.0])));
        assert!(!b.contains(&Vector::from([10.1, 5.0])));
        assert!(!b.contains(&Vector::from([-0.1, 2.0])));
    }
}
