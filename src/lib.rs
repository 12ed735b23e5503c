//! Penta Snake - a trailing body bouncing inside a rotating polygon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, polygon, body, collisions, tick)
//! - `config`: Data-driven simulation parameters and presets
//! - `error`: Construction-time validation errors
//!
//! Rendering, input and frame pacing are left to whoever drives
//! [`sim::SimState::step`].

pub mod config;
pub mod error;
pub mod sim;

pub use config::{ArenaPreset, SimConfig};
pub use error::SimError;

use glam::Vec2;

/// Simulation defaults
pub mod consts {
    /// Screen-space center the arena is built around (800x600 canvas)
    pub const ARENA_CENTER: (f32, f32) = (400.0, 300.0);
    /// Polygon circumradius
    pub const ARENA_RADIUS: f32 = 200.0;
    /// A pentagon
    pub const ARENA_SIDES: usize = 5;
    /// Radians per tick
    pub const ROTATION_SPEED: f32 = 0.01;

    /// Head velocity in units per tick
    pub const BODY_VELOCITY: (f32, f32) = (3.0, -3.0);
    /// Collision margin around the head
    pub const BODY_RADIUS: f32 = 10.0;
    /// Number of trailing points kept for drawing
    pub const TRAIL_LENGTH: usize = 30;

    /// Fixed timestep. Velocities are expressed per tick, so one tick is one unit.
    pub const SIM_DT: f32 = 1.0;

    /// Below this length a vector is treated as zero when normalizing
    pub const GEOM_EPSILON: f32 = 1e-6;
}

/// Wrap an angle to [-PI, PI)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
