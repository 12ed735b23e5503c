//! Planar geometry helpers
//!
//! Pure functions over `glam::Vec2`. Every function is total: degenerate
//! input (zero-length segments, parallel lines, zero normals) returns a
//! defined fallback instead of dividing by zero.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::consts::GEOM_EPSILON;
use crate::polar_to_cartesian;

/// Vertices of a regular polygon, counter-clockwise from `rotation`
///
/// Vertex `i` sits at angle `TAU * i / side_count + rotation`.
pub fn regular_polygon_vertices(
    center: Vec2,
    radius: f32,
    side_count: usize,
    rotation: f32,
) -> Vec<Vec2> {
    (0..side_count)
        .map(|i| {
            let angle = TAU * i as f32 / side_count as f32 + rotation;
            center + polar_to_cartesian(radius, angle)
        })
        .collect()
}

/// Closest point on segment `[seg_start, seg_end]` to `point`, and the distance to it
pub fn closest_point_on_segment(point: Vec2, seg_start: Vec2, seg_end: Vec2) -> (Vec2, f32) {
    let seg = seg_end - seg_start;
    let len_sq = seg.length_squared();

    let t = if len_sq < GEOM_EPSILON * GEOM_EPSILON {
        0.0
    } else {
        ((point - seg_start).dot(seg) / len_sq).clamp(0.0, 1.0)
    };

    let closest = seg_start + seg * t;
    (closest, point.distance(closest))
}

/// Intersection of segments `a1-a2` and `b1-b2`
///
/// Parallel and collinear segments never intersect here; grazing contact is
/// left to the signed-distance test.
pub fn segment_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let r = a2 - a1;
    let s = b2 - b1;
    let denom = r.perp_dot(s);
    if denom.abs() < GEOM_EPSILON {
        return None;
    }

    let q = b1 - a1;
    let t = q.perp_dot(s) / denom;
    let u = q.perp_dot(r) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + r * t)
    } else {
        None
    }
}

/// Reflect velocity off a surface with the given normal
///
/// Standard reflection: v' = v - 2(v·n)n. The normal is renormalized first,
/// so the result always has the same length as `velocity`.
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    let n = normal.normalize_or_zero();
    velocity - 2.0 * velocity.dot(n) * n
}

/// Signed distance from `point` to the line through `line_point` along a unit `normal`
///
/// Positive on the side the normal points to.
#[inline]
pub fn signed_distance(point: Vec2, line_point: Vec2, normal: Vec2) -> f32 {
    (point - line_point).dot(normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_pentagon_vertices() {
        let center = Vec2::new(400.0, 300.0);
        let verts = regular_polygon_vertices(center, 200.0, 5, 0.0);
        assert_eq!(verts.len(), 5);
        assert!((verts[0] - Vec2::new(600.0, 300.0)).length() < 0.001);
        for v in &verts {
            assert!((v.distance(center) - 200.0).abs() < 0.01);
        }
        // Counter-clockwise: vertex 1 is above vertex 0 (y up)
        assert!(verts[1].y > verts[0].y);
    }

    #[test]
    fn test_vertices_follow_rotation() {
        let verts = regular_polygon_vertices(Vec2::ZERO, 1.0, 4, PI / 2.0);
        assert!((verts[0] - Vec2::new(0.0, 1.0)).length() < 0.0001);
        assert!((verts[1] - Vec2::new(-1.0, 0.0)).length() < 0.0001);
    }

    #[test]
    fn test_closest_point_interior() {
        let (p, d) = closest_point_on_segment(
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((p - Vec2::new(5.0, 0.0)).length() < 0.0001);
        assert!((d - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_closest_point_clamped_to_endpoint() {
        let (p, d) = closest_point_on_segment(
            Vec2::new(-3.0, 4.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert_eq!(p, Vec2::ZERO);
        assert!((d - 5.0).abs() < 0.0001);
    }

    #[test]
    fn test_closest_point_degenerate_segment() {
        let a = Vec2::new(2.0, 2.0);
        let (p, d) = closest_point_on_segment(Vec2::new(5.0, 6.0), a, a);
        assert_eq!(p, a);
        assert!((d - 5.0).abs() < 0.0001);
    }

    #[test]
    fn test_segment_intersection_cross() {
        let hit = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        );
        let hit = hit.expect("diagonals cross");
        assert!((hit - Vec2::new(5.0, 5.0)).length() < 0.0001);
    }

    #[test]
    fn test_segment_intersection_out_of_range() {
        // Lines cross at (5, 5) but the first segment stops short
        let hit = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_segment_intersection_parallel() {
        let a = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(10.0, 1.0),
        );
        assert!(a.is_none());

        // Collinear overlap is also reported as no intersection
        let b = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(15.0, 0.0),
        );
        assert!(b.is_none());
    }

    #[test]
    fn test_segment_intersection_touching_endpoint() {
        let hit = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, -5.0),
            Vec2::new(5.0, 5.0),
        );
        assert!(hit.is_some());
    }

    #[test]
    fn test_reflect_velocity() {
        // Moving right, hits vertical wall (normal pointing left)
        let reflected = reflect(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_reflect_normalizes_normal() {
        let reflected = reflect(Vec2::new(3.0, -4.0), Vec2::new(0.0, 10.0));
        assert!((reflected - Vec2::new(3.0, 4.0)).length() < 0.0001);
    }

    #[test]
    fn test_reflect_zero_normal_is_identity() {
        let v = Vec2::new(1.5, 2.5);
        assert_eq!(reflect(v, Vec2::ZERO), v);
    }

    #[test]
    fn test_signed_distance_sign() {
        let n = Vec2::new(0.0, 1.0);
        assert!(signed_distance(Vec2::new(3.0, 2.0), Vec2::ZERO, n) > 0.0);
        assert!(signed_distance(Vec2::new(3.0, -2.0), Vec2::ZERO, n) < 0.0);
    }

    proptest! {
        #[test]
        fn reflection_preserves_speed(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            angle in 0.0f32..TAU,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::from_angle(angle);
            let r = reflect(v, n);
            prop_assert!((r.length() - v.length()).abs() <= 1e-3 * (1.0 + v.length()));
        }

        #[test]
        fn reflecting_twice_is_identity(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            angle in 0.0f32..TAU,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::from_angle(angle);
            let back = reflect(reflect(v, n), n);
            prop_assert!((back - v).length() <= 1e-3 * (1.0 + v.length()));
        }

        #[test]
        fn closest_point_never_farther_than_endpoints(
            px in -100.0f32..100.0,
            py in -100.0f32..100.0,
            bx in -100.0f32..100.0,
            by in -100.0f32..100.0,
        ) {
            let p = Vec2::new(px, py);
            let a = Vec2::ZERO;
            let b = Vec2::new(bx, by);
            let (_, d) = closest_point_on_segment(p, a, b);
            prop_assert!(d <= p.distance(a) + 1e-3);
            prop_assert!(d <= p.distance(b) + 1e-3);
        }
    }
}
