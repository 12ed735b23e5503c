//! Collision detection and response against the polygon walls
//!
//! Single-bounce model: each tick at most one wall reflects the velocity,
//! picked by signed distance of the proposed position. The move is then
//! redone from the pre-tick position with the reflected velocity and pushed
//! back inside the collision margin.

use glam::Vec2;

use super::geometry::{closest_point_on_segment, reflect, segment_intersection};
use super::polygon::Edge;

/// A wall the proposed position came too close to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index of the colliding edge
    pub edge: usize,
    /// Inward unit normal of that edge
    pub normal: Vec2,
    /// How far the proposed position intruded into the margin
    pub depth: f32,
    /// Where the motion segment crossed the edge, or the nearest point on it
    pub point: Vec2,
}

/// Authoritative outcome of one tick's motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub position: Vec2,
    pub velocity: Vec2,
    /// The wall the velocity was reflected off, if any
    pub contact: Option<Contact>,
}

/// Find the most violated edge for `proposed`
///
/// An edge qualifies when the proposed position is closer than `body_radius`
/// to its line (or beyond it). The smallest signed distance wins; ties go to
/// the lowest edge index.
pub fn find_contact(
    edges: &[Edge],
    current: Vec2,
    proposed: Vec2,
    body_radius: f32,
) -> Option<Contact> {
    let mut best: Option<(usize, f32)> = None;
    for (i, edge) in edges.iter().enumerate() {
        let dist = edge.signed_distance(proposed);
        if dist >= body_radius {
            continue;
        }
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((i, dist)),
        }
    }

    let (index, dist) = best?;
    let edge = &edges[index];
    let point = segment_intersection(current, proposed, edge.start, edge.end)
        .unwrap_or_else(|| closest_point_on_segment(proposed, edge.start, edge.end).0);

    Some(Contact {
        edge: index,
        normal: edge.inward_normal,
        depth: body_radius - dist,
        point,
    })
}

/// Resolve one tick of motion from `current` toward `proposed`
pub fn resolve(
    edges: &[Edge],
    current: Vec2,
    proposed: Vec2,
    velocity: Vec2,
    body_radius: f32,
    dt: f32,
) -> Resolution {
    let Some(contact) = find_contact(edges, current, proposed, body_radius) else {
        return Resolution {
            position: proposed,
            velocity,
            contact: None,
        };
    };

    let edge = &edges[contact.edge];
    // Reflects even when a rotating wall swept into a head moving away from it
    let new_velocity = reflect(velocity, edge.inward_normal);

    // Redo the move from the pre-tick position with the new velocity
    let mut position = current + new_velocity * dt;
    position += edge.inward_normal * (body_radius - edge.signed_distance(position)).max(0.0);

    // Other walls are not reflected off this tick, only kept out of
    position = push_inside(edges, position, body_radius);

    Resolution {
        position,
        velocity: new_velocity,
        contact: Some(contact),
    }
}

/// Upper bound on projection sweeps in [`push_inside`]
const MAX_PUSH_PASSES: usize = 16;

/// Displace `point` along inward normals until it clears every edge by `margin`
///
/// Cyclic projection onto each wall's half-plane. With four or more sides
/// neighbouring normals are at most 90° apart and one sweep settles it;
/// triangle corners shrink the leftover error by 4x per sweep.
pub fn push_inside(edges: &[Edge], mut point: Vec2, margin: f32) -> Vec2 {
    for _ in 0..MAX_PUSH_PASSES {
        let mut moved = false;
        for edge in edges {
            let dist = edge.signed_distance(point);
            if dist < margin {
                point += edge.inward_normal * (margin - dist);
                moved = true;
            }
        }
        if !moved {
            break;
        }
    }
    point
}
