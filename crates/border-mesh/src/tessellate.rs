use crate::color::css;
use crate::error::MeshError;
use crate::geometry::BorderMesh;
use crate::mesh::{Mesh, MeshBuilder, Vertex, MAX_VERTICES};
use crate::side::{Corner, Side, Sides};
use crate::uv;
use glam::Vec2;

/// Which of the two corners of a side an arc belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CornerArc {
    /// Corner the side starts at, swept towards the side normal
    Leading,
    /// Corner the side ends at, swept away from the side normal
    Trailing,
}

impl BorderMesh {
    /// Tessellate the border ribbon of every side with a nonzero width
    ///
    /// Fails with [`MeshError::NoVisibleSides`] when all widths are zero. A failed
    /// call leaves any previously generated mesh in place.
    pub fn generate_border(&mut self) -> Result<&Mesh, MeshError> {
        let mut vertex_count = 0;
        let mut index_count = 0;
        for side in Side::ALL {
            if self.widths[side] == 0.0 {
                continue;
            }
            let pairs = self.side_sample_count(side);
            vertex_count += pairs * 2;
            index_count += (pairs - 1) * 6;
        }

        if vertex_count == 0 || index_count == 0 {
            return Err(MeshError::NoVisibleSides);
        }
        check_budget(vertex_count)?;

        let (x_squash, y_squash) = if self.flags.side_uv {
            uv::squash_factors(&self.rect)
        } else {
            (1.0, 1.0)
        };

        let widths = self.widths;
        let mut builder = MeshBuilder::with_capacity(vertex_count, index_count);
        for side in Side::ALL {
            if widths[side] == 0.0 {
                continue;
            }

            let start = builder.len();
            let pairs = self.add_side(&mut builder, side, &widths, true)?;
            self.add_side_indices(&mut builder, start, pairs);

            if self.flags.side_uv {
                let squash = if side.is_horizontal() {
                    x_squash
                } else {
                    y_squash
                };
                let run = &mut builder.vertices_mut()[start..start + pairs * 2];
                uv::map_side_arc_length(run, squash, side.is_horizontal());
            }

            log::trace!("{:?} side: {} vertex pairs from {}", side, pairs, start);
        }

        let mesh = builder.finish();
        log::debug!(
            "border mesh: {} vertices, {} indices",
            mesh.vertices.len(),
            mesh.indices.len()
        );
        Ok(self.mesh.insert(mesh))
    }

    /// Tessellate the rounded rect interior as a triangle fan
    ///
    /// Widths only steer the corner sampling here and are forced to one on every
    /// side. UVs are the vertex positions normalized to the working rect with y
    /// flipped.
    pub fn generate_filled(&mut self) -> Result<&Mesh, MeshError> {
        let widths = Sides::splat(1.0);
        let ring_count = Side::ALL
            .iter()
            .map(|&side| self.side_sample_count(side) - 1)
            .sum::<usize>();
        check_budget(ring_count + 1)?;

        let mut builder = MeshBuilder::with_capacity(ring_count + 1, ring_count * 3);
        for side in Side::ALL {
            self.add_side(&mut builder, side, &widths, false)?;
            // The next side starts on the same corner sample
            builder.discard_last_vertex();
        }

        let center = builder.append_vertex(Vertex::new(self.rect.center(), css::WHITE))?;
        for i in 0..center {
            let next = (i + 1) % center;
            builder.append_triangle(center, i, next);
        }

        uv::map_local_position(builder.vertices_mut(), &self.rect);

        let mesh = builder.finish();
        log::debug!(
            "filled mesh: {} ring vertices, {} triangles",
            ring_count,
            mesh.triangle_count()
        );
        Ok(self.mesh.insert(mesh))
    }

    /// Number of outer samples along a side: both corner arcs
    fn side_sample_count(&self, side: Side) -> usize {
        self.subdivisions[side.leading_corner()] as usize
            + self.subdivisions[side.trailing_corner()] as usize
    }

    /// Emit the samples of one side and return how many were added
    ///
    /// With `with_inner` every outer sample is followed by its inner sample.
    fn add_side(
        &self,
        builder: &mut MeshBuilder,
        side: Side,
        widths: &Sides<f32>,
        with_inner: bool,
    ) -> Result<usize, MeshError> {
        self.add_arc(builder, side, CornerArc::Leading, widths, with_inner)?;
        self.add_arc(builder, side, CornerArc::Trailing, widths, with_inner)?;
        Ok(self.side_sample_count(side))
    }

    fn add_arc(
        &self,
        builder: &mut MeshBuilder,
        side: Side,
        arc: CornerArc,
        widths: &Sides<f32>,
        with_inner: bool,
    ) -> Result<(), MeshError> {
        let (corner, neighbor) = match arc {
            CornerArc::Leading => (side.leading_corner(), side.prev()),
            CornerArc::Trailing => (side.trailing_corner(), side.next()),
        };

        let radius = self.radii[corner];
        let hard_corner =
            self.flags.inset && (widths[side] >= radius || widths[neighbor] >= radius);

        let samples = self.subdivisions[corner];
        let balance = widths[side] / (widths[side] + widths[neighbor]);

        for i in 0..samples {
            // Single-sample corners keep the start direction
            let t = if samples > 1 {
                i as f32 / (samples - 1) as f32
            } else {
                0.0
            };
            let weight = match arc {
                CornerArc::Leading => t,
                CornerArc::Trailing => 1.0 - t,
            };
            let normal_weight = weight * balance + (1.0 - balance);

            let sample = ArcSample {
                corner,
                side,
                neighbor,
                normal_weight,
                hard_corner,
            };
            self.add_arc_sample(builder, &sample, widths, with_inner)?;
        }

        Ok(())
    }

    fn add_arc_sample(
        &self,
        builder: &mut MeshBuilder,
        sample: &ArcSample,
        widths: &Sides<f32>,
        with_inner: bool,
    ) -> Result<(), MeshError> {
        let direction = sample
            .neighbor
            .normal()
            .lerp(sample.side.normal(), sample.normal_weight)
            .normalize_or_zero();
        let outer = self.centers[sample.corner] + direction * self.radii[sample.corner];
        let color = self.colors[sample.side];

        builder.append_vertex(Vertex::new(outer, color))?;

        if with_inner {
            let inner = self.inner_offset(sample, widths, outer, direction);
            let mut vertex = Vertex::new(inner, color);
            if self.flags.fade {
                vertex.set_alpha(0.0);
            }
            builder.append_vertex(vertex)?;
        }

        Ok(())
    }

    /// Place the inner ring vertex matching an outer sample
    fn inner_offset(
        &self,
        sample: &ArcSample,
        widths: &Sides<f32>,
        outer: Vec2,
        direction: Vec2,
    ) -> Vec2 {
        let corner = sample.corner;
        let center = self.centers[corner];
        let radius = self.radii[corner];
        let side_normal = sample.side.normal();
        let neighbor_normal = sample.neighbor.normal();
        let side_width = widths[sample.side];
        let neighbor_width = widths[sample.neighbor];

        if sample.hard_corner {
            // Border thicker than the curve: inner edge collapses to a miter point
            center
                - neighbor_normal * (neighbor_width - radius)
                - side_normal * (side_width - radius)
        } else if !self.flags.inset && self.subdivisions[corner] == 1 {
            center
                + neighbor_normal * (neighbor_width + radius)
                + side_normal * (side_width + radius)
        } else {
            let scale =
                side_normal * (side_width / radius) + neighbor_normal * (neighbor_width / radius);
            let sign = if self.flags.inset { 1.0 } else { -1.0 };
            outer + direction * radius * Vec2::new(-scale.x.abs(), -scale.y.abs()) * sign
        }
    }

    /// Connect `pairs` consecutive (outer, inner) pairs starting at `start` into quads
    fn add_side_indices(&self, builder: &mut MeshBuilder, start: usize, pairs: usize) {
        let (second, third) = if self.flags.inset { (2, 1) } else { (1, 2) };

        for quad in 0..pairs.saturating_sub(1) {
            // The budget check guarantees every index fits in u16
            let base = (start + quad * 2) as u16;
            builder.append_triangle(base, base + second, base + third);
            builder.append_triangle(base + 3, base + third, base + second);
        }
    }
}

/// Parameters of a single sample on a corner arc
struct ArcSample {
    corner: Corner,
    side: Side,
    neighbor: Side,
    normal_weight: f32,
    hard_corner: bool,
}

fn check_budget(vertices: usize) -> Result<(), MeshError> {
    if vertices > MAX_VERTICES {
        log::warn!(
            "mesh with {} vertices exceeds the 16-bit index budget",
            vertices
        );
        return Err(MeshError::IndexBudgetExceeded { vertices });
    }
    Ok(())
}
