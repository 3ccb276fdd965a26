//! Color wheel palette for generated sprites
//!
//! Every game object gets its tint from a fixed process-wide palette of hues
//! spaced evenly around the color wheel. Codes are plain indices; lookups for
//! codes outside the palette are programmer errors and panic rather than clamp.

use rand::Rng;

/// Index into the fixed palette
pub type ColorCode = usize;

/// Twelve hues, 30 degrees apart, RGB components in [0, 1]
const PALETTE: [[f32; 3]; 12] = [
    [1.0, 0.0, 0.0],
    [1.0, 0.5, 0.0],
    [1.0, 1.0, 0.0],
    [0.5, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 0.5],
    [0.0, 1.0, 1.0],
    [0.0, 0.5, 1.0],
    [0.0, 0.0, 1.0],
    [0.5, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 0.0, 0.5],
];

/// Stateless mapping from color codes to RGB components
///
/// Injected into the factory at construction so nothing depends on a global
/// palette instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorWheel;

impl ColorWheel {
    /// Number of codes in the palette
    pub fn len(&self) -> usize {
        PALETTE.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Uniformly random valid color code
    pub fn random_code(&self, rng: &mut impl Rng) -> ColorCode {
        rng.random_range(0..PALETTE.len())
    }

    /// RGB components for a code, each in [0, 1]
    ///
    /// Panics for out-of-range codes; only pass codes obtained from
    /// [`ColorWheel::random_code`].
    pub fn components(&self, code: ColorCode) -> [f32; 3] {
        PALETTE[code]
    }

    /// Red component for a code
    pub fn red(&self, code: ColorCode) -> f32 {
        self.components(code)[0]
    }

    /// Green component for a code
    pub fn green(&self, code: ColorCode) -> f32 {
        self.components(code)[1]
    }

    /// Blue component for a code
    pub fn blue(&self, code: ColorCode) -> f32 {
        self.components(code)[2]
    }
}
