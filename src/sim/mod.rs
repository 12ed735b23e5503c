//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only (and only at construction)
//! - Stable iteration order (by edge index)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod geometry;
pub mod polygon;
pub mod state;
pub mod tick;

pub use body::{Body, follow_chain};
pub use collision::{Contact, Resolution, find_contact, push_inside, resolve};
pub use geometry::{
    closest_point_on_segment, reflect, regular_polygon_vertices, segment_intersection,
    signed_distance,
};
pub use polygon::{Edge, Polygon};
pub use state::{SimEvent, SimState, Snapshot};
pub use tick::step;
