//! Fill palette and the sources that pick from it.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fill colors a new pill may receive.
pub const PALETTE: [&str; 15] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57", "#ff9ff3", "#54a0ff", "#5f27cd", "#00d2d3", "#ff9f43",
    "#10ac84", "#ee5a24", "#0abde3", "#3867d6", "#8854d0",
];

/// Picks the fill for each newly drawn pill.
pub trait ColorSource {
    fn next_color(&mut self) -> &'static str;
}

/// Uniform random pick from [`PALETTE`].
pub struct RandomPalette {
    rng: StdRng,
}

impl RandomPalette {
    /// Reproducible sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Seeded from the operating system.
    #[must_use]
    pub fn from_os() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }
}

impl ColorSource for RandomPalette {
    fn next_color(&mut self) -> &'static str {
        PALETTE[self.rng.random_range(0..PALETTE.len())]
    }
}

/// Walks [`PALETTE`] in order, wrapping at the end.
#[derive(Debug, Clone, Default)]
pub struct CyclePalette {
    next: usize,
}

impl CyclePalette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorSource for CyclePalette {
    fn next_color(&mut self) -> &'static str {
        let color = PALETTE[self.next % PALETTE.len()];
        self.next += 1;
        color
    }
}
