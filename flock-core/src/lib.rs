//! Core flocking engine: N-dimensional vector algebra, agents and the
//! simulation world that advances them tick by tick with the three
//! classic steering rules (cohesion, separation, alignment).

pub mod agent;
pub mod behavior;
pub mod error;
pub mod geometry;
pub mod vector;
pub mod world;

pub use agent::Agent;
pub use error::{FlockError, Result};
pub use geometry::{AxisAlignedBox, Obstacle, Sphere};
pub use vector::Vector;
pub use world::World;
