//! Uniform random position sampling strategy.
use mint::Vector2;
use rand::RngCore;

use crate::sampling::{next_down, rand01, PositionSampling};

/// Uniform i.i.d. random sampling over `[0, width) x [0, height)`.
#[derive(Debug, Clone)]
pub struct UniformRandomSampling {
    /// Number of points to generate.
    pub count: usize,
}

impl UniformRandomSampling {
    /// Create a new uniform random sampler that generates `count` points.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl PositionSampling for UniformRandomSampling {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>> {
        let w = domain_extent.x;
        let h = domain_extent.y;

        if self.count == 0 || !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
            return Vec::new();
        }

        // Next representable floats below the right/top edges to enforce strict < comparisons
        let max_x = next_down(w);
        let max_y = next_down(h);

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let x = (rand01(rng) * w).clamp(0.0, max_x);
            let y = (rand01(rng) * h).clamp(0.0, max_y);
            out.push(Vector2 { x, y });
        }

        out
    }
}
