//! Random scatter used when the grid plan is unavailable.
use glam::Vec2;
use rand::RngCore;
use tracing::warn;

use crate::garden::Garden;
use crate::planner::Placement;
use crate::sampling::{PositionSampling, UniformRandomSampling};
use crate::variety::PlantVariety;

/// One placement per variety, in input order, uniform over `[0, width) x [0, height)`.
///
/// Ignores occupancy and species. A degenerate garden axis (non-positive or
/// non-finite) collapses to coordinate 0.0 so the output length always matches
/// the input.
pub fn plan_random<G: Garden + ?Sized>(
    garden: &G,
    varieties: &[PlantVariety],
    rng: &mut dyn RngCore,
) -> Vec<Placement> {
    let w = usable_extent(garden.width());
    let h = usable_extent(garden.height());
    if w == 0.0 || h == 0.0 {
        warn!(
            "Garden {} x {} has no area; random placements collapse onto its edges.",
            garden.width(),
            garden.height()
        );
    }

    // Degenerate axes are sampled on a unit extent, then pinned to 0.
    let sampler = UniformRandomSampling::new(varieties.len());
    let points = sampler.generate(Vec2::new(w.max(1.0), h.max(1.0)).into(), rng);

    varieties
        .iter()
        .zip(points)
        .map(|(variety, p)| {
            let x = if w > 0.0 { p.x } else { 0.0 };
            let y = if h > 0.0 { p.y } else { 0.0 };
            Placement::new(variety.clone(), Vec2::new(x, y))
        })
        .collect()
}

fn usable_extent(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::garden::Plot;
    use crate::species::Species;

    fn varieties(n: usize) -> Vec<PlantVariety> {
        (0..n)
            .map(|i| PlantVariety::new(format!("V{i}"), Species::ALL[i % Species::COUNT]))
            .collect()
    }

    #[test]
    fn one_placement_per_variety_in_input_order() {
        let mut rng = StdRng::seed_from_u64(9);
        let input = varieties(25);
        let placements = plan_random(&Plot::new(6.0, 3.0), &input, &mut rng);
        assert_eq!(placements.len(), input.len());
        for (p, v) in placements.iter().zip(&input) {
            assert_eq!(&p.variety, v);
            assert!(p.position.x >= 0.0 && p.position.x < 6.0);
            assert!(p.position.y >= 0.0 && p.position.y < 3.0);
        }
    }

    #[test]
    fn duplicates_are_all_placed() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = vec![
            PlantVariety::new("Azalea", Species::Rhododendron),
            PlantVariety::new("Azalea", Species::Rhododendron),
        ];
        let placements = plan_random(&Plot::new(5.0, 5.0), &input, &mut rng);
        assert_eq!(placements.len(), 2);
    }

    #[test]
    fn degenerate_axis_collapses_to_zero() {
        let mut rng = StdRng::seed_from_u64(5);
        let placements = plan_random(&Plot::new(4.0, 0.0), &varieties(8), &mut rng);
        assert_eq!(placements.len(), 8);
        for p in placements {
            assert_eq!(p.position.y, 0.0);
            assert!(p.position.x >= 0.0 && p.position.x < 4.0);
        }
    }

    #[test]
    fn empty_input_gives_empty_plan() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(plan_random(&Plot::new(4.0, 4.0), &[], &mut rng).is_empty());
    }
}
