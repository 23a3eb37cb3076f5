use garden_planner::prelude::*;
use garden_planner_examples::{init_tracing, render_placements_to_png, sample_varieties, RenderConfig};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A small garden with few varieties goes straight to the random scatter.
    let extent = Vec2::new(5.0, 5.0);
    let config =
        PlannerConfig::defensive().with_small_garden_fallback(SmallGardenFallback::new(30.0, 10));
    let gardener = Gardener::try_new(sample_varieties(2), config)?;
    let mut garden = Plot::try_new(extent.x, extent.y)?;
    let mut rng = StdRng::seed_from_u64(2024);

    let mut printer = FnSink::new(|event: PlanEvent| {
        if let PlanEvent::CommitRejected { placement } = event {
            println!(
                "rejected {} at {}",
                placement.variety.name, placement.position
            );
        }
    });
    let report = gardener.cultivate_with_events(&mut garden, &mut rng, &mut printer)?;
    println!(
        "{:?}: planted {} of {}",
        report.outcome.strategy,
        report.commit.planted.len(),
        report.commit.attempted()
    );

    render_placements_to_png(
        &report.outcome.placements,
        &RenderConfig::new((500, 500), extent).with_background([30, 26, 26]),
        "planner-fallback-scatter.png",
    )?;
    Ok(())
}
