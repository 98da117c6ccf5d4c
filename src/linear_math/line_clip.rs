use super::aabb::Aabb2;
use glam::DVec2;

/// Liang–Barsky clipping of the segment `p0 -> p1` against `aabb`.
///
/// Returns the entering and exiting points of the part of the segment that lies
/// inside or on the box. Unclipped ends are returned as the original `p0`/`p1`
/// values, bit for bit, so callers can tell them apart from new intersections.
pub fn liang_barsky(aabb: &Aabb2, p0: DVec2, p1: DVec2) -> Option<(DVec2, DVec2)> {
    let delta = p1 - p0;

    // (p, q) per boundary: left, right, bottom, top
    let boundaries = [
        (-delta.x, p0.x - aabb.left),
        (delta.x, aabb.right - p0.x),
        (-delta.y, p0.y - aabb.bottom),
        (delta.y, aabb.top - p0.y),
    ];

    let mut t_enter = 0.0;
    let mut t_exit = 1.0;

    for (p, q) in boundaries {
        if p == 0.0 {
            // parallel to this boundary
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            if r > t_exit {
                return None;
            }
            if r > t_enter {
                t_enter = r;
            }
        } else {
            if r < t_enter {
                return None;
            }
            if r < t_exit {
                t_exit = r;
            }
        }
    }

    let entering = if t_enter > 0.0 {
        p0 + delta * t_enter
    } else {
        p0
    };
    let exiting = if t_exit < 1.0 {
        p0 + delta * t_exit
    } else {
        p1
    };

    Some((entering, exiting))
}
