//! Sampling strategies for generating candidate positions on the garden plane.
//!
//! Positions live in garden coordinates: the origin is the lower-left corner and
//! the domain spans `[0, width] x [0, height]`.
use mint::Vector2;
use rand::RngCore;

pub mod staggered_grid;
pub mod uniform_random;

pub use staggered_grid::{GridRow, StaggeredGridSampling};
pub use uniform_random::UniformRandomSampling;

/// Trait for position sampling.
pub trait PositionSampling: Send + Sync {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>>;
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Compute the next smaller representable float value.
///
/// Used to keep sampled coordinates strictly below an exclusive upper edge.
#[inline]
pub(crate) fn next_down(val: f32) -> f32 {
    if val.is_nan() {
        return f32::NAN;
    }

    if val == f32::NEG_INFINITY {
        return f32::NEG_INFINITY;
    }

    if val == f32::INFINITY {
        return f32::MAX;
    }

    if val == 0.0 {
        return -f32::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f32::from_bits(bits.saturating_sub(1))
    } else {
        f32::from_bits(bits.saturating_add(1))
    }
}
