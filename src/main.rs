use border_mesh::{css, BorderMesh, BorderStyle, Color, Corners, Mesh, Rect, Sides};
use border_mesh_effects::{
    box_shadow, linear_gradient, padding_rect, BoxShadowStyle, DashedBorder, DashedBorderStyle,
    LinearGradientStyle,
};

/// Sample element: content box, padding and its border
struct Element {
    content: Rect,
    padding: Sides<f32>,
    border: BorderStyle,
}

impl Element {
    fn sample() -> Self {
        Self {
            content: Rect::from_min_size([24.0, 24.0], [240.0, 96.0]),
            padding: Sides::new(8.0, 12.0, 8.0, 12.0),
            border: BorderStyle::new()
                .with_widths(Sides::new(2.0, 4.0, 2.0, 1.0))
                .with_radii(Corners::new(12.0, 4.0, 12.0, 0.0))
                .with_colors(Sides::new(css::NAVY, css::TEAL, css::NAVY, css::SILVER)),
        }
    }
}

fn log_mesh(name: &str, mesh: &Mesh) {
    let vertex_bytes = std::mem::size_of_val(mesh.gpu_vertices().as_slice());
    log::info!(
        "{:<16} {:>5} vertices {:>5} triangles ({} + {} bytes)",
        name,
        mesh.vertices.len(),
        mesh.triangle_count(),
        vertex_bytes,
        mesh.index_bytes().len()
    );
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let element = Element::sample();
    let rect = padding_rect(element.content, &element.padding);
    log::info!(
        "Padding box {}x{} at ({}, {})",
        rect.width(),
        rect.height(),
        rect.min[0],
        rect.min[1]
    );

    let mut border = BorderMesh::new(rect, &element.border);
    match border.generate_border() {
        Ok(mesh) => log_mesh("border", mesh),
        Err(err) => log::warn!("border: {}", err),
    }

    let shadow = BoxShadowStyle {
        widths: Sides::new(2.0, 6.0, 10.0, 6.0),
        color: Color::rgb(0.0, 0.0, 0.0).with_alpha(0.6),
        ..Default::default()
    };
    match box_shadow(rect, &element.border, &shadow) {
        Ok(Some(mesh)) => log_mesh("box shadow", &mesh),
        Ok(None) => log::info!("box shadow: nothing to draw"),
        Err(err) => log::warn!("box shadow: {}", err),
    }

    let mut dashed = DashedBorder::new(DashedBorderStyle {
        widths: Sides::splat(2.0),
        color: css::RED,
        ..Default::default()
    });
    match dashed.build(rect, &element.border) {
        Ok(Some(mesh)) => {
            log_mesh("dashed border", &mesh);
            log::info!(
                "{:<16} {} pattern pixels",
                "dash pattern",
                dashed.pattern().texture_width()
            );
        }
        Ok(None) => log::info!("dashed border: nothing to draw"),
        Err(err) => log::warn!("dashed border: {}", err),
    }

    let gradient = LinearGradientStyle {
        top: css::BLUE,
        bottom: css::LIME,
        rotation_degrees: 30.0,
    };
    match linear_gradient(rect, &element.border, &gradient) {
        Ok(mesh) => log_mesh("linear gradient", &mesh),
        Err(err) => log::warn!("linear gradient: {}", err),
    }
}
