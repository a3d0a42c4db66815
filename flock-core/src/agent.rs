//! The simulated agent (a "boid").
//!
//! An agent is pure state: position, velocity and a group tag. All
//! movement logic lives in the [`World`](crate::world::World).

use crate::error::{FlockError, Result};
use crate::vector::Vector;
use rand::Rng;

/// A flocking agent: position plus velocity of equal dimension and a
/// group tag. Only agents sharing a group tag steer off one another.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub position: Vector,
    pub velocity: Vector,
    /// Place in the food chain. 0 means everyone can hunt it; cross-group
    /// hunting is an extension point, not part of the current rule set.
    group: i32,
}

impl Agent {
    /// An agent at the origin of the given dimension, at rest, group 0.
    pub fn new(dimension: usize) -> Self {
        Self {
            position: Vector::zeros(dimension),
            velocity: Vector::zeros(dimension),
            group: 0,
        }
    }

    /// An agent at the given position, at rest, group 0. The velocity
    /// inherits the position's dimension.
    pub fn at(position: Vector) -> Self {
        let velocity = Vector::zeros(position.dimension());
        Self {
            position,
            velocity,
            group: 0,
        }
    }

    /// An agent at the given position with a group tag. The tag must be
    /// at least zero.
    pub fn with_group(position: Vector, group: i32) -> Result<Self> {
        if group < 0 {
            return Err(FlockError::InvalidArgument(format!(
                "group tag must be at least zero, got {}",
                group
            )));
        }
        let velocity = Vector::zeros(position.dimension());
        Ok(Self {
            position,
            velocity,
            group,
        })
    }

    /// Full construction: position, velocity and group tag. The velocity
    /// must share the position's dimension.
    pub fn with_velocity(position: Vector, velocity: Vector, group: i32) -> Result<Self> {
        if position.dimension() != velocity.dimension() {
            return Err(FlockError::DimensionMismatch {
                left: position.dimension(),
                right: velocity.dimension(),
            });
        }
        let mut agent = Self::with_group(position, group)?;
        agent.velocity = velocity;
        Ok(agent)
    }

    /// A random agent inside `[0, bounds[i])` per axis with a per-axis
    /// velocity drawn from `[-max_speed, max_speed)`. Bounds components
    /// must be positive.
    pub fn random<R: Rng>(bounds: &Vector, max_speed: f64, group: i32, rng: &mut R) -> Result<Self> {
        let dimension = bounds.dimension();
        let mut position = Vector::zeros(dimension);
        let mut velocity = Vector::zeros(dimension);
        for i in 0..dimension {
            let bound = bounds.get(i)?;
            if bound <= 0.0 {
                return Err(FlockError::InvalidArgument(format!(
                    "bounds component {} must be positive to spawn, got {}",
                    i, bound
                )));
            }
            position.set(i, rng.gen_range(0.0..bound))?;
            velocity.set(i, rng.gen_range(-max_speed..max_speed))?;
        }
        Self::with_velocity(position, velocity, group)
    }

    pub fn group(&self) -> i32 {
        self.group
    }

    pub fn dimension(&self) -> usize {
        self.position.dimension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_at_rest() {
        let a = Agent::new(3);
        assert_eq!(a.position, Vector::zeros(3));
        assert_eq!(a.velocity, Vector::zeros(3));
        assert_eq!(a.group(), 0);
    }

    #[test]
    fn test_at_inherits_dimension() {
        let a = Agent::at(Vector::from([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(a.velocity, Vector::zeros(4));
    }

    #[test]
    fn test_with_group_validates_sign() {
        let a = Agent::with_group(Vector::zeros(2), 3).unwrap();
        assert_eq!(a.group(), 3);
        assert!(matches!(
            Agent::with_group(Vector::zeros(2), -1),
            Err(FlockError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_with_velocity_checks_dimensions() {
        let err = Agent::with_velocity(Vector::zeros(2), Vector::zeros(3), 0).unwrap_err();
        assert_eq!(err, FlockError::DimensionMismatch { left: 2, right: 3 });
    }

    #[test]
    fn test_random_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Vector::from([100.0, 50.0, 10.0]);
        for _ in 0..20 {
            let a = Agent::random(&bounds, 3.0, 1, &mut rng).unwrap();
            for i in 0..3 {
                let p = a.position.get(i).unwrap();
                assert!(p >= 0.0 && p < bounds.get(i).unwrap());
                let v = a.velocity.get(i).unwrap();
                assert!(v >= -3.0 && v < 3.0);
            }
            assert_eq!(a.group(), 1);
        }
    }

    #[test]
    fn test_random_rejects_degenerate_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Vector::from([100.0, 0.0]);
        assert!(matches!(
            Agent::random(&bounds, 3.0, 0, &mut rng),
            Err(FlockError::InvalidArgument(_))
        ));
    }
}
