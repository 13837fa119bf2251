//! Loudness sampling seam between the frame loop and the audio backend.

/// Polled once per frame. `None` means "no new reading"; the scene then
/// keeps its previous loudness.
pub trait LoudnessSource {
    fn sample(&mut self) -> Option<f32>;
}

/// Used until audio is activated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silence;

impl LoudnessSource for Silence {
    fn sample(&mut self) -> Option<f32> {
        None
    }
}

/// Always reports the same level. Handy for previews and tests.
#[derive(Clone, Copy, Debug)]
pub struct Constant(pub f32);

impl LoudnessSource for Constant {
    fn sample(&mut self) -> Option<f32> {
        Some(self.0)
    }
}

/// Mean of byte frequency magnitudes, in `[0, 255]`. Empty input is silent.
pub fn average_magnitude(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32
}
