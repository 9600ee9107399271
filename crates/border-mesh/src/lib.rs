//! # border-mesh
//!
//! Procedural meshes for rounded, variable-width, per-side colored borders.
//!
//! A [`BorderMesh`] is built from a rectangle and a [`BorderStyle`]. It either
//! tessellates the border ribbon (one quad strip per visible side, following both
//! corner arcs) or the filled interior (a triangle fan). The output is a
//! [`Mesh`] with 16-bit indices that a renderer copies into its own buffers.
//!
//! ```
//! use border_mesh::{BorderMesh, BorderStyle, Color, Rect};
//!
//! let rect = Rect::from_min_size([0.0, 0.0], [100.0, 50.0]);
//! let style = BorderStyle::uniform(2.0, 0.0, Color::rgb(1.0, 1.0, 1.0));
//! let mut border = BorderMesh::new(rect, &style);
//!
//! let mesh = border.generate_border().unwrap();
//! assert_eq!(mesh.vertices.len(), 16);
//! assert_eq!(mesh.indices.len(), 24);
//! ```

mod color;
mod error;
mod geometry;
#[cfg(feature = "bytemuck")]
mod gpu;
mod mesh;
mod primitives;
mod side;
mod style;
mod tessellate;
pub mod uv;

pub use color::*;
pub use error::*;
pub use geometry::*;
#[cfg(feature = "bytemuck")]
pub use gpu::*;
pub use mesh::*;
pub use primitives::*;
pub use side::*;
pub use style::*;
