//! The moving head and its trail
//!
//! Motion is split into propose and commit: `propose_advance` never touches
//! state, so the collision resolver can veto or correct a step before it
//! lands.

use glam::Vec2;

use crate::error::SimError;

/// Simulated head plus a fixed-capacity history of where it has been
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vec2,
    velocity: Vec2,
    /// Collision margin kept between the head and every wall
    radius: f32,
    /// Trail history for rendering (newest first)
    trail: Vec<Vec2>,
    trail_capacity: usize,
}

impl Body {
    pub fn new(
        initial_position: Vec2,
        initial_velocity: Vec2,
        trail_capacity: usize,
        body_radius: f32,
    ) -> Result<Self, SimError> {
        if trail_capacity < 1 {
            return Err(SimError::ZeroTrailCapacity);
        }
        if !body_radius.is_finite() {
            return Err(SimError::NonFinite("body radius"));
        }
        if body_radius < 0.0 {
            return Err(SimError::NegativeBodyRadius(body_radius));
        }
        if !initial_position.is_finite() {
            return Err(SimError::NonFinite("body position"));
        }
        if !initial_velocity.is_finite() {
            return Err(SimError::NonFinite("body velocity"));
        }

        let mut trail = Vec::with_capacity(trail_capacity + 1);
        trail.push(initial_position);

        Ok(Self {
            position: initial_position,
            velocity: initial_velocity,
            radius: body_radius,
            trail,
            trail_capacity,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Recent head positions, most recent first
    pub fn trail(&self) -> &[Vec2] {
        &self.trail
    }

    pub fn trail_capacity(&self) -> usize {
        self.trail_capacity
    }

    /// Where the head would be after `dt` if nothing got in the way
    #[inline]
    pub fn propose_advance(&self, dt: f32) -> Vec2 {
        self.position + self.velocity * dt
    }

    /// Accept a resolved step and record it in the trail
    pub fn commit(&mut self, new_position: Vec2, new_velocity: Vec2) {
        self.position = new_position;
        self.velocity = new_velocity;
        self.trail.insert(0, new_position);
        self.trail.truncate(self.trail_capacity);
    }
}

/// Drag a chain of segments after `head`
///
/// `chain[0]` snaps to the head and every later segment closes `follow` of
/// the gap to its predecessor, giving a rope-like body to draw. Purely
/// cosmetic: physics only ever sees the head.
pub fn follow_chain(chain: &mut [Vec2], head: Vec2, follow: f32) {
    let follow = follow.clamp(0.0, 1.0);
    let Some(first) = chain.first_mut() else {
        return;
    };
    *first = head;
    for i in 1..chain.len() {
        let target = chain[i - 1];
        chain[i] += (target - chain[i]) * follow;
    }
}
