/// Scene tuning constants.
///
/// Lengths are in canvas pixels at unit perspective scale, angles in radians
/// unless the name says otherwise, and times in milliseconds.
// Tree shape
pub const STAR_COUNT: usize = 350;
pub const TREE_HEIGHT: f32 = 280.0;
pub const TREE_RADIUS: f32 = 140.0;

// Projection
pub const FOCAL_LENGTH: f32 = 600.0; // perspective strength; must stay well above TREE_RADIUS
pub const TOP_ANCHOR_FRACTION: f32 = 0.2; // apex sits at 20% of surface height

// Animation clock
pub const ROTATION_STEP: f64 = 0.003; // radians per frame, subtracted

// Lights
pub const LIGHT_SIZE_MIN: f32 = 1.0;
pub const LIGHT_SIZE_MAX: f32 = 3.0;
pub const LIGHT_ALPHA_MIN: f32 = 0.3;
pub const LIGHT_ALPHA_MAX: f32 = 1.0;
pub const LIGHT_SPEED_MIN: f32 = 0.01; // alpha change per frame
pub const LIGHT_SPEED_MAX: f32 = 0.03;
pub const LIGHT_GLOW_BLUR: f32 = 6.0; // multiplied by perspective scale
pub const LIGHT_LOUDNESS_BASE: f32 = 0.5; // opacity factor at silence
pub const LIGHT_LOUDNESS_DIVISOR: f32 = 512.0; // full-scale loudness adds ~0.5

// Garland
pub const GARLAND_TURNS: f32 = 4.0;
pub const GARLAND_STRANDS: usize = 3;
pub const GARLAND_SEGMENTS: usize = 500; // sampled points per strand = segments + 1
pub const GARLAND_SPEED: f64 = 0.02; // radians per second of extra spin
pub const GARLAND_WAVE_SPEED: f64 = 0.04; // radians per second of wave phase
pub const GARLAND_WAVE_FREQUENCY: f32 = 12.0; // wave phase across t in [0, 1]
pub const GARLAND_AMPLITUDE: f32 = 6.0;
pub const GARLAND_AMPLITUDE_GAIN: f32 = 0.2; // extra amplitude per loudness unit
pub const GARLAND_STRAND_OFFSET: f32 = 4.0; // radial gap between strands
pub const GARLAND_HUE_SPEED: f64 = 0.05; // degrees per millisecond
pub const GARLAND_HUE_SPACING: f32 = 120.0; // degrees between strands
pub const GARLAND_LIGHTNESS_BASE: f32 = 40.0; // percent
pub const GARLAND_LIGHTNESS_GAIN: f32 = 0.8; // percent per loudness unit
pub const GARLAND_LINE_WIDTH: f32 = 2.0;
pub const GARLAND_GLOW_BLUR: f32 = 6.0;

// Topper
pub const TOPPER_LIFT: f32 = 12.0; // pixels above the top anchor
pub const TOPPER_RADIUS: f32 = 16.0;
pub const TOPPER_GLOW_BASE: f32 = 12.0;
pub const TOPPER_PULSE_SPEED: f64 = 0.004; // radians per millisecond
pub const TOPPER_PULSE_AMPLITUDE: f32 = 6.0;
pub const TOPPER_PULSE_GAIN: f32 = 0.1; // glow per loudness unit
pub const TOPPER_POINTS: usize = 5;
pub const TOPPER_FILL: &str = "#ffd700";
pub const TOPPER_GLOW: &str = "gold";

// Audio
pub const ANALYSER_FFT_SIZE: u32 = 256; // 128 frequency bins
pub const LOUDNESS_MAX: f32 = 255.0;
