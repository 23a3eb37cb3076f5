use garden_planner::prelude::*;
use garden_planner_examples::{init_tracing, render_placements_to_png, sample_varieties, RenderConfig};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Eight varieties is below the sparse threshold, so the defensive scratch
    // garden is halved and the plan packs into the lower-left quarter.
    let extent = Vec2::new(12.0, 12.0);
    let garden = Plot::try_new(extent.x, extent.y)?;
    let varieties: Vec<_> = sample_varieties(3).into_iter().take(8).collect();
    let mut rng = StdRng::seed_from_u64(7);

    for (label, config) in [
        ("strict", PlannerConfig::strict()),
        ("defensive", PlannerConfig::defensive()),
    ] {
        let gardener = Gardener::try_new(varieties.clone(), config)?;
        let mut sink = VecSink::new();
        let outcome = gardener.plan_with_events(&garden, &mut rng, &mut sink)?;
        println!(
            "{label}: {} placements, {} skipped cells, {} rejected cells",
            outcome.placements.len(),
            sink.count(PlanEventKind::CellSkipped),
            sink.count(PlanEventKind::CellRejected)
        );

        render_placements_to_png(
            &outcome.placements,
            &RenderConfig::new((600, 600), extent),
            format!("planner-strict-vs-defensive-{label}.png"),
        )?;
    }

    Ok(())
}
