//! The three steering forces.
//!
//! Each force is computed for one agent against its allies (the other
//! agents sharing its group tag) and returns a new vector; the world
//! sums them into a per-tick acceleration. All three yield a zero vector
//! of the agent's dimension when no ally contributes.

use crate::agent::Agent;
use crate::error::Result;
use crate::vector::Vector;

/// Distance inside which cohesion slows the approach toward the ally
/// centroid instead of overshooting it, in world units.
pub const ARRIVAL_RADIUS: f64 = 100.0;

/// Steering toward the centroid of the allies, with an arrival ramp:
/// inside [`ARRIVAL_RADIUS`] the desired speed falls off linearly with
/// the remaining distance.
pub fn cohesion<'a, I>(agent: &Agent, allies: I, max_speed: f64, max_force: f64) -> Result<Vector>
where
    I: IntoIterator<Item = &'a Agent>,
{
    let mut sum = Vector::zeros(agent.dimension());
    let mut count = 0usize;
    for ally in allies {
        sum.add_assign(&ally.position)?;
        count += 1;
    }
    if count == 0 {
        return Ok(sum);
    }
    let centroid = sum.divide(count as f64)?;

    let desired = agent.position.subtract(&centroid)?;
    let d = desired.magnitude();
    if d == 0.0 {
        return Ok(Vector::zeros(agent.dimension()));
    }
    let speed = if d < ARRIVAL_RADIUS {
        max_speed * (d / ARRIVAL_RADIUS)
    } else {
        max_speed
    };
    let desired = desired.normalize().scale(speed);
    let steer = desired.subtract(&agent.velocity)?;
    Ok(steer.limit(max_force))
}

/// Repulsion away from allies closer than `min_separation`, each
/// contribution weighted by the inverse of its distance. Allies exactly
/// on top of the agent (distance zero) carry no direction and are
/// skipped, as are allies at or beyond the threshold.
pub fn separation<'a, I>(agent: &Agent, allies: I, min_separation: f64) -> Result<Vector>
where
    I: IntoIterator<Item = &'a Agent>,
{
    let mut steer = Vector::zeros(agent.dimension());
    let mut count = 0usize;
    for ally in allies {
        let d = agent.position.distance(&ally.position)?;
        if d > 0.0 && d < min_separation {
            let away = agent.position.subtract(&ally.position)?.normalize();
            steer.add_assign(&away.divide(d)?)?;
            count += 1;
        }
    }
    if count > 0 {
        steer.divide_assign(count as f64)?;
    }
    Ok(steer)
}

/// Matching the average velocity of the allies, clamped to `max_force`.
pub fn alignment<'a, I>(agent: &Agent, allies: I, max_force: f64) -> Result<Vector>
where
    I: IntoIterator<Item = &'a Agent>,
{
    let mut sum = Vector::zeros(agent.dimension());
    let mut count = 0usize;
    for ally in allies {
        sum.add_assign(&ally.velocity)?;
        count += 1;
    }
    if count == 0 {
        return Ok(sum);
    }
    Ok(sum.divide(count as f64)?.limit(max_force))
}
