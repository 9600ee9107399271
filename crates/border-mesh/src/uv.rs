//! Texture coordinate generation for border runs and filled meshes.

use crate::mesh::Vertex;
use crate::primitives::Rect;

/// Ratio of the minor to the major dimension, applied per axis
///
/// Returns `(x, y)`: the longer axis gets 1, the shorter one its length relative to
/// the longer one, so a pattern sampled along the short sides is not stretched.
pub fn squash_factors(rect: &Rect) -> (f32, f32) {
    let (w, h) = (rect.width(), rect.height());
    let x = if w > h { 1.0 } else { w / h.max(f32::EPSILON) };
    let y = if h > w { 1.0 } else { h / w.max(f32::EPSILON) };
    (x, y)
}

/// Assign `u` by cumulative outer arc length over an interleaved (outer, inner) run
///
/// Outer `u` goes from 0 to `squash`. Inner samples advance by the same steps, except
/// on a two-sample run where the inner edge is a single straight segment; there the
/// steps are scaled by the inner/outer length ratio and centered so the pattern keeps
/// its pitch on the shorter edge. With `invert` every value becomes `1 - u`.
pub fn map_side_arc_length(run: &mut [Vertex], squash: f32, invert: bool) {
    let pairs = run.len() / 2;
    if pairs < 2 {
        return;
    }

    let mut steps = Vec::with_capacity(pairs);
    steps.push(0.0);
    for i in 1..pairs {
        let a = run[(i - 1) * 2].position();
        let b = run[i * 2].position();
        steps.push(a.distance(b));
    }

    let total: f32 = steps.iter().sum();
    if total <= f32::EPSILON {
        return;
    }

    let mut u = 0.0;
    let mut u_inner = 0.0;
    let mut inner_squash = 1.0;

    if pairs == 2 {
        let inner_length = run[1].position().distance(run[3].position());
        inner_squash = inner_length / total;
        u_inner += (1.0 - inner_squash) * 0.5 * squash;
    }

    let flip = |value: f32| if invert { 1.0 - value } else { value };

    for (pair, step) in run.chunks_exact_mut(2).zip(steps) {
        let step = step / total * squash;
        u += step;
        u_inner += step * inner_squash;

        pair[0].uv = [flip(u), 0.0];
        pair[1].uv = [flip(u_inner), 0.0];
    }
}

/// Assign UVs from the position inside `rect`, `v` flipped so it grows upwards
pub fn map_local_position(vertices: &mut [Vertex], rect: &Rect) {
    for vertex in vertices {
        let local = rect.normalize(vertex.position());
        vertex.uv = [local.x, 1.0 - local.y];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use glam::Vec2;

    fn run(points: &[(f32, f32)]) -> Vec<Vertex> {
        points
            .iter()
            .map(|&(x, y)| Vertex::new(Vec2::new(x, y), Color::rgb(1.0, 1.0, 1.0)))
            .collect()
    }

    #[test]
    fn test_squash_factors() {
        assert_eq!(squash_factors(&Rect::new([0.0, 0.0], [200.0, 50.0])), (1.0, 0.25));
        assert_eq!(squash_factors(&Rect::new([0.0, 0.0], [50.0, 200.0])), (0.25, 1.0));
        assert_eq!(squash_factors(&Rect::new([0.0, 0.0], [80.0, 80.0])), (1.0, 1.0));
        assert_eq!(squash_factors(&Rect::new([2.0, 2.0], [2.0, 2.0])), (0.0, 0.0));
    }

    #[test]
    fn test_outer_u_follows_distance() {
        // outer, inner interleaved; outer steps of 1, 3
        let mut vertices = run(&[
            (0.0, 0.0),
            (0.0, 1.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (4.0, 0.0),
            (4.0, 1.0),
        ]);

        map_side_arc_length(&mut vertices, 0.5, false);

        assert_eq!(vertices[0].uv, [0.0, 0.0]);
        assert_eq!(vertices[2].uv, [0.125, 0.0]);
        assert_eq!(vertices[4].uv, [0.5, 0.0]);
        // Inner follows the outer steps on curved runs
        assert_eq!(vertices[5].uv, [0.5, 0.0]);
    }

    #[test]
    fn test_invert_flips_u() {
        let mut vertices = run(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0), (2.0, 0.0), (2.0, 1.0)]);

        map_side_arc_length(&mut vertices, 1.0, true);

        assert_eq!(vertices[0].uv[0], 1.0);
        assert_eq!(vertices[2].uv[0], 0.5);
        assert_eq!(vertices[4].uv[0], 0.0);
    }

    #[test]
    fn test_two_sample_run_unstretches_inner_edge() {
        // Outer edge 10 long, inner edge 6 long and centered
        let mut vertices = run(&[(0.0, 0.0), (2.0, 2.0), (10.0, 0.0), (8.0, 2.0)]);

        map_side_arc_length(&mut vertices, 1.0, false);

        assert_eq!(vertices[0].uv[0], 0.0);
        assert_eq!(vertices[2].uv[0], 1.0);
        assert!((vertices[1].uv[0] - 0.2).abs() < 1e-6);
        assert!((vertices[3].uv[0] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_run_keeps_zero_uv() {
        let mut vertices = run(&[(3.0, 3.0), (3.0, 4.0), (3.0, 3.0), (3.0, 4.0)]);

        map_side_arc_length(&mut vertices, 1.0, true);

        assert!(vertices.iter().all(|v| v.uv == [0.0, 0.0]));
    }

    #[test]
    fn test_local_position_uv() {
        let rect = Rect::new([10.0, 10.0], [30.0, 50.0]);
        let mut vertices = run(&[(10.0, 10.0), (30.0, 50.0), (20.0, 20.0)]);

        map_local_position(&mut vertices, &rect);

        assert_eq!(vertices[0].uv, [0.0, 1.0]);
        assert_eq!(vertices[1].uv, [1.0, 0.0]);
        assert_eq!(vertices[2].uv, [0.5, 0.75]);
    }
}
