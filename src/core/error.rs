use thiserror::Error;

/// Configuration problems that make the scene impossible to build.
///
/// These are raised once, before the first frame; nothing inside the frame
/// loop returns them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("particle count must be at least 1")]
    EmptyParticleField,
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("tree radius {radius} is too close to focal length {focal_length}")]
    RadiusNearFocalLength { radius: f32, focal_length: f32 },
    #[error("garland needs at least one strand and one segment")]
    EmptyGarland,
    #[error("{name} range is inverted: {min} > {max}")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
}
