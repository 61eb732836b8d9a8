//! Planet configuration errors.

/// Errors raised by invalid planet parameters.
///
/// Validation runs before any patch is built, so a failed construction never
/// leaves a partial tree behind.
#[derive(Debug, thiserror::Error)]
pub enum PlanetError {
    /// The planet radius must be a positive, finite number.
    #[error("planet radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// The leaf grid resolution must be at least one cell per row.
    #[error("grid resolution must be positive")]
    InvalidGridResolution,
}
