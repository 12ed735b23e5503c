//! Simulation configuration and presets
//!
//! Loaded from JSON (every field optional) or picked from a preset. All
//! validation happens in [`SimConfig::build`]; a config that builds can be
//! ticked forever without errors.

use std::f32::consts::TAU;
use std::path::Path;
use std::str::FromStr;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;
use crate::sim::{Body, Polygon, SimState};

/// Arena presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ArenaPreset {
    /// Small pentagon, short tail, slow spin in degrees
    Compact,
    #[default]
    Standard,
    /// Wider pentagon with a longer tail
    Large,
    /// Wide pentagon, very long tail, lazy spin
    Long,
}

impl ArenaPreset {
    pub const ALL: [ArenaPreset; 4] = [
        ArenaPreset::Compact,
        ArenaPreset::Standard,
        ArenaPreset::Large,
        ArenaPreset::Long,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArenaPreset::Compact => "Compact",
            ArenaPreset::Standard => "Standard",
            ArenaPreset::Large => "Large",
            ArenaPreset::Long => "Long",
        }
    }

    /// Polygon circumradius
    pub fn radius(&self) -> f32 {
        match self {
            ArenaPreset::Compact | ArenaPreset::Standard => 200.0,
            ArenaPreset::Large | ArenaPreset::Long => 250.0,
        }
    }

    /// Number of trailing points
    pub fn trail_length(&self) -> usize {
        match self {
            ArenaPreset::Compact => 20,
            ArenaPreset::Standard => 30,
            ArenaPreset::Large => 50,
            ArenaPreset::Long => 100,
        }
    }

    /// Radians per tick
    pub fn rotation_speed(&self) -> f32 {
        match self {
            ArenaPreset::Compact | ArenaPreset::Large => 0.5_f32.to_radians(),
            ArenaPreset::Standard => 0.01,
            ArenaPreset::Long => 0.005,
        }
    }

    pub fn body_radius(&self) -> f32 {
        match self {
            ArenaPreset::Compact => 5.0,
            ArenaPreset::Standard => 10.0,
            ArenaPreset::Large => 8.0,
            ArenaPreset::Long => 5.0,
        }
    }

    /// Launch velocity in units per tick
    pub fn body_velocity(&self) -> Vec2 {
        match self {
            ArenaPreset::Compact => Vec2::new(4.0, 4.0),
            ArenaPreset::Standard => Vec2::new(3.0, -3.0),
            ArenaPreset::Large => Vec2::new(3.0, 0.0),
            ArenaPreset::Long => Vec2::new(3.0, 2.0),
        }
    }
}

impl FromStr for ArenaPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" | "small" => Ok(ArenaPreset::Compact),
            "standard" | "default" => Ok(ArenaPreset::Standard),
            "large" => Ok(ArenaPreset::Large),
            "long" => Ok(ArenaPreset::Long),
            other => Err(format!(
                "unknown preset '{other}' (expected compact, standard, large or long)"
            )),
        }
    }
}

impl std::fmt::Display for ArenaPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to build a [`SimState`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Polygon ===
    pub center: Vec2,
    /// Circumradius
    pub radius: f32,
    pub side_count: usize,
    /// Starting angle (radians)
    pub initial_rotation: f32,
    /// Angular step per tick (radians)
    pub rotation_speed: f32,

    // === Body ===
    /// Starting head position (defaults to the polygon center)
    pub body_position: Option<Vec2>,
    /// Units per tick; with `launch_seed` only its length is used
    pub body_velocity: Vec2,
    pub trail_length: usize,
    /// Collision margin
    pub body_radius: f32,

    // === Stepping ===
    pub dt: f32,
    /// Randomize the launch heading from this seed (speed is kept)
    pub launch_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            center: Vec2::new(ARENA_CENTER.0, ARENA_CENTER.1),
            radius: ARENA_RADIUS,
            side_count: ARENA_SIDES,
            initial_rotation: 0.0,
            rotation_speed: ROTATION_SPEED,

            body_position: None,
            body_velocity: Vec2::new(BODY_VELOCITY.0, BODY_VELOCITY.1),
            trail_length: TRAIL_LENGTH,
            body_radius: BODY_RADIUS,

            dt: SIM_DT,
            launch_seed: None,
        }
    }
}

impl SimConfig {
    /// Create a config from a preset (applies preset defaults)
    pub fn from_preset(preset: ArenaPreset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Overwrite the preset-controlled fields, leaving center, sides and seed alone
    pub fn apply_preset(&mut self, preset: ArenaPreset) {
        self.radius = preset.radius();
        self.trail_length = preset.trail_length();
        self.rotation_speed = preset.rotation_speed();
        self.body_radius = preset.body_radius();
        self.body_velocity = preset.body_velocity();
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Launch velocity, with the heading drawn from `launch_seed` when set
    pub fn initial_velocity(&self) -> Vec2 {
        match self.launch_seed {
            Some(seed) => {
                let mut rng = Pcg32::seed_from_u64(seed);
                let heading: f32 = rng.random_range(0.0..TAU);
                Vec2::from_angle(heading) * self.body_velocity.length()
            }
            None => self.body_velocity,
        }
    }

    /// Check every construction rule without keeping the result
    pub fn validate(&self) -> Result<(), SimError> {
        self.build().map(|_| ())
    }

    /// Build the polygon, body and simulation state this config describes
    pub fn build(&self) -> Result<SimState, SimError> {
        let polygon = Polygon::new(
            self.center,
            self.radius,
            self.side_count,
            self.initial_rotation,
        )?;
        let body = Body::new(
            self.body_position.unwrap_or(self.center),
            self.initial_velocity(),
            self.trail_length,
            self.body_radius,
        )?;
        SimState::new(polygon, body, self.rotation_speed, self.dt)
    }
}
