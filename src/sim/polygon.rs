//! Rotating regular polygon
//!
//! Only the rotation angle changes over time. Vertices and edges are derived
//! from it on demand, so there is no cached geometry to fall out of sync.

use glam::Vec2;

use super::geometry::{regular_polygon_vertices, signed_distance};
use crate::error::SimError;
use crate::normalize_angle;

/// One side of the polygon, from vertex `i` to vertex `(i + 1) % n`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Vec2,
    pub end: Vec2,
    /// Unit normal pointing toward the polygon center
    pub inward_normal: Vec2,
}

impl Edge {
    /// Build an edge whose normal faces `center`, whatever the winding
    pub fn new(start: Vec2, end: Vec2, center: Vec2) -> Self {
        let perp = (end - start).perp().normalize_or_zero();
        let mut edge = Self {
            start,
            end,
            inward_normal: perp,
        };
        if perp.dot(center - edge.midpoint()) < 0.0 {
            edge.inward_normal = -perp;
        }
        edge
    }

    /// Signed distance of `point` from this edge's line (negative = outside)
    #[inline]
    pub fn signed_distance(&self, point: Vec2) -> f32 {
        signed_distance(point, self.start, self.inward_normal)
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}

/// A regular polygon spinning about its center
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    center: Vec2,
    radius: f32,
    side_count: usize,
    /// Radians, wrapped to [-PI, PI)
    rotation: f32,
}

impl Polygon {
    pub fn new(
        center: Vec2,
        radius: f32,
        side_count: usize,
        initial_rotation: f32,
    ) -> Result<Self, SimError> {
        if side_count < 3 {
            return Err(SimError::TooFewSides(side_count));
        }
        if !radius.is_finite() {
            return Err(SimError::NonFinite("polygon radius"));
        }
        if radius <= 0.0 {
            return Err(SimError::NonPositiveRadius(radius));
        }
        if !center.is_finite() {
            return Err(SimError::NonFinite("polygon center"));
        }
        if !initial_rotation.is_finite() {
            return Err(SimError::NonFinite("polygon rotation"));
        }

        Ok(Self {
            center,
            radius,
            side_count,
            rotation: normalize_angle(initial_rotation),
        })
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn side_count(&self) -> usize {
        self.side_count
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Spin by `angular_step` radians
    ///
    /// The angle is wrapped every step; a raw `f32` sum stops moving once it
    /// grows past a few hundred thousand radians.
    pub fn advance(&mut self, angular_step: f32) {
        self.rotation = normalize_angle(self.rotation + angular_step);
    }

    /// Distance from center to the middle of each side (inscribed circle radius)
    pub fn apothem(&self) -> f32 {
        self.radius * (std::f32::consts::PI / self.side_count as f32).cos()
    }

    pub fn vertices(&self) -> Vec<Vec2> {
        regular_polygon_vertices(self.center, self.radius, self.side_count, self.rotation)
    }

    pub fn edges(&self) -> Vec<Edge> {
        let verts = self.vertices();
        let n = verts.len();
        (0..n)
            .map(|i| Edge::new(verts[i], verts[(i + 1) % n], self.center))
            .collect()
    }

    /// True if `point` is at least `margin` inside every edge
    pub fn contains(&self, point: Vec2, margin: f32) -> bool {
        self.edges()
            .iter()
            .all(|edge| edge.signed_distance(point) >= margin)
    }
}
