//! Simulation state and snapshots
//!
//! Everything a tick reads or writes lives in [`SimState`]. Presentation
//! code only reads it between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::polygon::Polygon;
use crate::error::SimError;

/// Something worth reacting to that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// The head reflected off a wall
    Bounce {
        tick: u64,
        /// Edge index at the time of the bounce
        edge: usize,
        contact: Vec2,
        normal: Vec2,
        depth: f32,
    },
}

/// Complete simulation state (deterministic)
#[derive(Debug, Clone)]
pub struct SimState {
    pub polygon: Polygon,
    pub body: Body,
    /// Default angular step used by [`SimState::tick`]
    pub rotation_speed: f32,
    /// Default timestep used by [`SimState::tick`]
    pub dt: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick only
    pub events: Vec<SimEvent>,
}

impl SimState {
    pub fn new(
        polygon: Polygon,
        body: Body,
        rotation_speed: f32,
        dt: f32,
    ) -> Result<Self, SimError> {
        if !rotation_speed.is_finite() {
            return Err(SimError::NonFinite("rotation speed"));
        }
        if !dt.is_finite() {
            return Err(SimError::NonFinite("dt"));
        }
        let apothem = polygon.apothem();
        if body.radius() >= apothem {
            return Err(SimError::BodyTooLarge {
                body_radius: body.radius(),
                apothem,
            });
        }

        log::info!(
            "Simulation ready: {}-gon r={} at ({}, {}), body r={} speed={}",
            polygon.side_count(),
            polygon.radius(),
            polygon.center().x,
            polygon.center().y,
            body.radius(),
            body.speed()
        );

        Ok(Self {
            polygon,
            body,
            rotation_speed,
            dt,
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    /// Advance by the configured rotation speed and timestep
    pub fn tick(&mut self) {
        let (angular_step, dt) = (self.rotation_speed, self.dt);
        self.step(angular_step, dt);
    }

    /// Advance by an explicit angular step and timestep
    pub fn step(&mut self, angular_step: f32, dt: f32) {
        super::tick::step(self, angular_step, dt);
    }

    pub fn bounced(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SimEvent::Bounce { .. }))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            rotation: self.polygon.rotation(),
            vertices: self.polygon.vertices(),
            position: self.body.position(),
            velocity: self.body.velocity(),
            trail: self.body.trail().to_vec(),
            events: self.events.clone(),
        }
    }
}

/// Read-only copy of everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub rotation: f32,
    pub vertices: Vec<Vec2>,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Newest first
    pub trail: Vec<Vec2>,
    #[serde(default)]
    pub events: Vec<SimEvent>,
}
