//! The simulation world.
//!
//! Owns the agent population, the opaque obstacle list, the world bounds
//! and the per-tick force limits, and advances everything one discrete
//! time step at a time. Single-threaded and synchronous: `tick` runs to
//! completion with no I/O and no internal locking, so any concurrent
//! reader of the agent view must be serialized against it externally.

use crate::agent::Agent;
use crate::behavior;
use crate::error::{FlockError, Result};
use crate::geometry::Obstacle;
use crate::vector::Vector;
use rand::Rng;

pub const DEFAULT_BOUND: f64 = 100.0;
pub const DEFAULT_MAX_SPEED: f64 = 3.0;
pub const DEFAULT_MAX_FORCE: f64 = 0.05;
pub const DEFAULT_MIN_SEPARATION: f64 = 6.0;

/// The flocking world. Agents interact only with allies (agents sharing
/// their group tag); obstacles are carried for future avoidance rules and
/// are not consulted by the current forces.
pub struct World {
    agents: Vec<Agent>,
    obstacles: Vec<Box<dyn Obstacle>>,
    bounds: Vector,
    max_speed: f64,
    max_force: f64,
    min_separation: f64,
    ticks: u64,
}

impl World {
    /// An empty world with a `DEFAULT_BOUND`-sized cube of the given
    /// dimension and production-default force limits.
    pub fn new(dimension: usize) -> Self {
        Self {
            agents: Vec::new(),
            obstacles: Vec::new(),
            bounds: Vector::from_components(vec![DEFAULT_BOUND; dimension]),
            max_speed: DEFAULT_MAX_SPEED,
            max_force: DEFAULT_MAX_FORCE,
            min_separation: DEFAULT_MIN_SEPARATION,
            ticks: 0,
        }
    }

    pub fn bounds(&self) -> &Vector {
        &self.bounds
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_force(&self) -> f64 {
        self.max_force
    }

    pub fn min_separation(&self) -> f64 {
        self.min_separation
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Reassigns the world bounds and eagerly removes every agent whose
    /// position falls outside `[0, bounds[i]]` on any axis, or whose
    /// dimension no longer matches the bounds. This is a standing
    /// invariant, re-applied on every bounds mutation.
    pub fn set_bounds(&mut self, bounds: Vector) {
        self.bounds = bounds;
        let before = self.agents.len();
        let bounds = self.bounds.clone();
        self.agents.retain(|agent| Self::in_bounds(agent, &bounds));
        let removed = before - self.agents.len();
        if removed > 0 {
            log::debug!("bounds reassigned to {}, removed {} agent(s)", bounds, removed);
        }
    }

    fn in_bounds(agent: &Agent, bounds: &Vector) -> bool {
        if agent.dimension() != bounds.dimension() {
            return false;
        }
        agent
            .position
            .components()
            .iter()
            .zip(bounds.components())
            .all(|(p, b)| *p >= 0.0 && *p <= *b)
    }

    pub fn set_max_speed(&mut self, max_speed: f64) -> Result<()> {
        if max_speed <= 0.0 {
            return Err(FlockError::InvalidArgument(format!(
                "max_speed must be positive, got {}",
                max_speed
            )));
        }
        self.max_speed = max_speed;
        Ok(())
    }

    pub fn set_max_force(&mut self, max_force: f64) -> Result<()> {
        if max_force <= 0.0 {
            return Err(FlockError::InvalidArgument(format!(
                "max_force must be positive, got {}",
                max_force
            )));
        }
        self.max_force = max_force;
        Ok(())
    }

    pub fn set_min_separation(&mut self, min_separation: f64) -> Result<()> {
        if min_separation <= 0.0 {
            return Err(FlockError::InvalidArgument(format!(
                "min_separation must be positive, got {}",
                min_separation
            )));
        }
        self.min_separation = min_separation;
        Ok(())
    }

    pub fn add_agent(&mut self, agent: Agent) {
        self.agents.push(agent);
    }

    pub fn remove_agent(&mut self, index: usize) -> Option<Agent> {
        if index < self.agents.len() {
            Some(self.agents.remove(index))
        } else {
            None
        }
    }

    /// Read-only view of the population, for a renderer or any other
    /// external collaborator snapshotting positions between ticks.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn add_obstacle(&mut self, obstacle: Box<dyn Obstacle>) {
        self.obstacles.push(obstacle);
    }

    pub fn obstacles(&self) -> &[Box<dyn Obstacle>] {
        &self.obstacles
    }

    /// Spawns `count` random agents of the given group inside the current
    /// bounds, with per-axis velocities within the speed limit.
    pub fn spawn_random<R: Rng>(&mut self, count: usize, group: i32, rng: &mut R) -> Result<()> {
        for _ in 0..count {
            let agent = Agent::random(&self.bounds, self.max_speed, group, rng)?;
            self.agents.push(agent);
        }
        Ok(())
    }

    /// Advances every agent by exactly one time step.
    ///
    /// Snapshot-then-commit semantics: each agent's new velocity and
    /// position are computed purely from the pre-tick population, and no
    /// write lands until every agent's new state has been computed. A
    /// failed force computation therefore aborts the whole tick and
    /// leaves the population exactly as it was.
    pub fn tick(&mut self) -> Result<()> {
        let mut next = Vec::with_capacity(self.agents.len());
        for (i, agent) in self.agents.iter().enumerate() {
            let allies: Vec<&Agent> = self
                .agents
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && other.group() == agent.group())
                .map(|(_, other)| other)
                .collect();

            let mut acceleration = behavior::cohesion(
                agent,
                allies.iter().copied(),
                self.max_speed,
                self.max_force,
            )?;
            acceleration.add_assign(&behavior::separation(
                agent,
                allies.iter().copied(),
                self.min_separation,
            )?)?;
            acceleration.add_assign(&behavior::alignment(
                agent,
                allies.iter().copied(),
                self.max_force,
            )?)?;

            let velocity = agent.velocity.add(&acceleration)?.limit(self.max_speed);
            let position = agent.position.add(&velocity)?;
            next.push((position, velocity));
        }

        for (agent, (position, velocity)) in self.agents.iter_mut().zip(next) {
            agent.position = position;
            agent.velocity = velocity;
        }
        self.ticks += 1;
        log::trace!("tick {} complete, {} agent(s)", self.ticks, self.agents.len());
        Ok(())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(3)
    }
}
