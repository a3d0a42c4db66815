//! Plain-data exchange types shared with external collaborators.
//!
//! These carry no engine logic: a settings document a caller can load
//! from JSON, and the per-frame snapshot a renderer consumes. The crate
//! deliberately does not depend on the engine so that thin clients can
//! speak these types without pulling in the simulation.

use serde::{Deserialize, Serialize};

/// World configuration as callers exchange it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldSettings {
    /// Per-axis upper limit; the lower limit is 0 on every axis.
    pub bounds: Vec<f64>,
    pub max_speed: f64,
    pub max_force: f64,
    pub min_separation: f64,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            bounds: vec![100.0, 100.0, 100.0],
            max_speed: 3.0,
            max_force: 0.05,
            min_separation: 6.0,
        }
    }
}

/// One agent's state as exposed to a renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentState {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub group: i32,
}

/// A read-only view of the whole population after a given tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub agents: Vec<AgentState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = WorldSettings::default();
        assert_eq!(settings.bounds, vec![100.0, 100.0, 100.0]);
        assert_eq!(settings.max_speed, 3.0);
        assert_eq!(settings.max_force, 0.05);
        assert_eq!(settings.min_separation, 6.0);
    }

    #[test]
    fn test_settings_json_round_trip() {
        let settings = WorldSettings {
            bounds: vec![200.0, 50.0],
            max_speed: 2.5,
            max_force: 0.1,
            min_separation: 4.0,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: WorldSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_frame_snapshot_serializes() {
        let frame = FrameSnapshot {
            tick: 7,
            agents: vec![AgentState {
                position: vec![1.0, 2.0],
                velocity: vec![0.5, -0.5],
                group: 1,
            }],
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"tick\":7"));
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}
