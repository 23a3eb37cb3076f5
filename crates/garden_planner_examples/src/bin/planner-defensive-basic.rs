use garden_planner::prelude::*;
use garden_planner_examples::{init_tracing, render_placements_to_png, sample_varieties, RenderConfig};
use glam::Vec2;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let extent = Vec2::new(20.0, 20.0);
    let gardener = Gardener::try_new(sample_varieties(40), PlannerConfig::defensive())?;
    let mut garden = Plot::try_new(extent.x, extent.y)?;

    let report = gardener.cultivate(&mut garden)?;
    println!(
        "{:?}: planned {}, planted {}, rejected {}",
        report.outcome.strategy,
        report.outcome.placements.len(),
        report.commit.planted.len(),
        report.commit.rejected.len()
    );
    for (name, count) in gardener.variety_counts() {
        println!("  {name}: {count}");
    }

    render_placements_to_png(
        &report.outcome.placements,
        &RenderConfig::new((800, 800), extent),
        "planner-defensive-basic.png",
    )?;
    Ok(())
}
