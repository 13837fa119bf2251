//! Scene parameters grouped by component.
//!
//! The scene is fixed at runtime; these structs exist so that the entry point
//! and tests build scenes explicitly instead of reading globals. `Default`
//! reproduces the constants in [`super::constants`].

use super::constants::*;
use super::error::SceneError;

#[derive(Clone, Debug, PartialEq)]
pub struct TreeShape {
    pub height: f32,
    pub radius: f32,
    pub focal_length: f32,
    pub top_anchor_fraction: f32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            height: TREE_HEIGHT,
            radius: TREE_RADIUS,
            focal_length: FOCAL_LENGTH,
            top_anchor_fraction: TOP_ANCHOR_FRACTION,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightParams {
    pub count: usize,
    pub size_min: f32,
    pub size_max: f32,
    pub alpha_min: f32,
    pub alpha_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub glow_blur: f32,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            size_min: LIGHT_SIZE_MIN,
            size_max: LIGHT_SIZE_MAX,
            alpha_min: LIGHT_ALPHA_MIN,
            alpha_max: LIGHT_ALPHA_MAX,
            speed_min: LIGHT_SPEED_MIN,
            speed_max: LIGHT_SPEED_MAX,
            glow_blur: LIGHT_GLOW_BLUR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GarlandParams {
    pub strands: usize,
    pub segments: usize,
    pub turns: f32,
    pub speed: f64,
    pub wave_speed: f64,
    pub wave_frequency: f32,
    pub amplitude: f32,
    pub amplitude_gain: f32,
    pub strand_offset: f32,
    pub hue_speed: f64,
    pub hue_spacing: f32,
    pub lightness_base: f32,
    pub lightness_gain: f32,
    pub line_width: f32,
    pub glow_blur: f32,
}

impl Default for GarlandParams {
    fn default() -> Self {
        Self {
            strands: GARLAND_STRANDS,
            segments: GARLAND_SEGMENTS,
            turns: GARLAND_TURNS,
            speed: GARLAND_SPEED,
            wave_speed: GARLAND_WAVE_SPEED,
            wave_frequency: GARLAND_WAVE_FREQUENCY,
            amplitude: GARLAND_AMPLITUDE,
            amplitude_gain: GARLAND_AMPLITUDE_GAIN,
            strand_offset: GARLAND_STRAND_OFFSET,
            hue_speed: GARLAND_HUE_SPEED,
            hue_spacing: GARLAND_HUE_SPACING,
            lightness_base: GARLAND_LIGHTNESS_BASE,
            lightness_gain: GARLAND_LIGHTNESS_GAIN,
            line_width: GARLAND_LINE_WIDTH,
            glow_blur: GARLAND_GLOW_BLUR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopperParams {
    pub lift: f32,
    pub radius: f32,
    pub glow_base: f32,
    pub pulse_speed: f64,
    pub pulse_amplitude: f32,
    pub pulse_gain: f32,
}

impl Default for TopperParams {
    fn default() -> Self {
        Self {
            lift: TOPPER_LIFT,
            radius: TOPPER_RADIUS,
            glow_base: TOPPER_GLOW_BASE,
            pulse_speed: TOPPER_PULSE_SPEED,
            pulse_amplitude: TOPPER_PULSE_AMPLITUDE,
            pulse_gain: TOPPER_PULSE_GAIN,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub tree: TreeShape,
    pub lights: LightParams,
    pub garland: GarlandParams,
    pub topper: TopperParams,
    pub rotation_step: f64,
    /// Seed for particle scatter; `None` draws one from the OS/browser.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tree: TreeShape::default(),
            lights: LightParams::default(),
            garland: GarlandParams::default(),
            topper: TopperParams::default(),
            rotation_step: ROTATION_STEP,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.lights.count == 0 {
            return Err(SceneError::EmptyParticleField);
        }
        positive("tree height", self.tree.height)?;
        positive("tree radius", self.tree.radius)?;
        positive("focal length", self.tree.focal_length)?;
        if self.tree.radius >= self.tree.focal_length / 2.0 {
            return Err(SceneError::RadiusNearFocalLength {
                radius: self.tree.radius,
                focal_length: self.tree.focal_length,
            });
        }
        if self.garland.strands == 0 || self.garland.segments == 0 {
            return Err(SceneError::EmptyGarland);
        }
        ordered("light size", self.lights.size_min, self.lights.size_max)?;
        ordered("light alpha", self.lights.alpha_min, self.lights.alpha_max)?;
        ordered("light speed", self.lights.speed_min, self.lights.speed_max)?;
        positive("topper radius", self.topper.radius)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), SceneError> {
    // NaN fails this check too
    if value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::NonPositive { name, value })
    }
}

fn ordered(name: &'static str, min: f32, max: f32) -> Result<(), SceneError> {
    if min <= max {
        Ok(())
    } else {
        Err(SceneError::InvertedRange { name, min, max })
    }
}
