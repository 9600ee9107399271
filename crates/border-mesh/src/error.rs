use thiserror::Error;

/// Reasons a border or filled mesh could not be produced
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Every side has zero width so there is nothing to draw
    #[error("border has no visible sides, all widths are zero")]
    NoVisibleSides,

    /// The mesh would need more vertices than 16-bit indices can address
    #[error("mesh needs {vertices} vertices, 16-bit indices address at most {}", crate::mesh::MAX_VERTICES)]
    IndexBudgetExceeded { vertices: usize },
}
