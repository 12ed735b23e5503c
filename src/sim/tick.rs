//! Fixed timestep simulation tick
//!
//! Order per tick: rotate polygon, propose head move, resolve against the
//! rotated walls, commit. Collision checks therefore always see this tick's
//! orientation.

use super::collision::resolve;
use super::state::{SimEvent, SimState};

/// Advance the simulation by one fixed timestep
pub fn step(state: &mut SimState, angular_step: f32, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    state.polygon.advance(angular_step);
    let edges = state.polygon.edges();

    let body = &state.body;
    let proposed = body.propose_advance(dt);
    let res = resolve(
        &edges,
        body.position(),
        proposed,
        body.velocity(),
        body.radius(),
        dt,
    );

    if let Some(contact) = res.contact {
        log::debug!(
            "tick {}: bounce off edge {} at ({:.1}, {:.1}), depth {:.2}",
            state.time_ticks,
            contact.edge,
            contact.point.x,
            contact.point.y,
            contact.depth
        );
        state.events.push(SimEvent::Bounce {
            tick: state.time_ticks,
            edge: contact.edge,
            contact: contact.point,
            normal: contact.normal,
            depth: contact.depth,
        });
    }

    state.body.commit(res.position, res.velocity);
}
