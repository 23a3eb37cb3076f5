//! Staggered hex grid planner.
//!
//! Walks the rows of a [`crate::sampling::StaggeredGridSampling`] bottom to top and each
//! row left to right. At every cell the [`crate::species::SpeciesRotation`] names the due
//! species and the [`crate::variety::VarietyAllocator`] supplies its next unconsumed variety:
//!
//! - an exhausted species skips the cell and advances the row cursor;
//! - in [`crate::planner::config::PlannerMode::Defensive`] the candidate is first tried against a scratch
//!   garden. A refusal skips the cell without advancing any cursor, so the same
//!   variety is retried at the next cell of the row;
//! - otherwise the variety is planned at the cell and both the species and row
//!   cursors advance.
use tracing::trace;

use crate::error::{Error, Result};
use crate::garden::Garden;
use crate::planner::config::{PlannerConfig, RotationStep};
use crate::planner::events::{EventSink, PlanEvent, PlanEventKind};
use crate::planner::Placement;
use crate::variety::{Allocation, SpeciesPartition};

/// Plan `partition` on `garden` along the staggered grid.
///
/// Coordinates always span the full garden. Errors are returned for unusable
/// bounds (including gardens too large for the grid), a scratch garden that
/// cannot be built, an empty rotation, or a broken allocator invariant;
/// recovering from them is the caller's decision.
pub fn plan_hex_grid<G: Garden>(
    garden: &G,
    partition: &SpeciesPartition,
    config: &PlannerConfig,
    sink: &mut dyn EventSink,
) -> Result<Vec<Placement>> {
    let (width, height) = (garden.width(), garden.height());
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(Error::InvalidBounds { width, height });
    }

    let grid = config.grid();
    let (grid_w, grid_h) = (width.floor(), height.floor());
    if grid.row_count(grid_w, grid_h).is_none() {
        return Err(Error::InvalidBounds { width, height });
    }

    let mut scratch = if config.mode.checks_occupancy() {
        let (scratch_w, scratch_h) = scratch_bounds(width, height, partition.total(), config);
        Some(garden.scratch(scratch_w, scratch_h)?)
    } else {
        None
    };

    let mut allocator = partition.allocator();
    let mut placements = Vec::new();

    for row in grid.rows(grid_w, grid_h) {
        let mut row_cursor = 0usize;

        for position in row.cells() {
            let step = match config.rotation_step {
                RotationStep::RowCursor => row_cursor,
                RotationStep::Column => position.x.floor() as usize,
            };
            let species = config.rotation.due(step, row.index).ok_or_else(|| {
                Error::InvalidConfig("rotation must name at least one species".into())
            })?;

            let variety = match allocator.peek(species) {
                Allocation::Variety(variety) => variety,
                Allocation::Exhausted => {
                    row_cursor += 1;
                    if sink.wants(PlanEventKind::CellSkipped) {
                        sink.send(PlanEvent::CellSkipped {
                            row: row.index,
                            position,
                            species,
                        });
                    }
                    continue;
                }
            };

            if let Some(scratch) = scratch.as_mut() {
                let accepted = scratch.can_place_plant(variety, position)
                    && scratch.add_plant(variety, position).is_some();
                if !accepted {
                    trace!("Scratch garden refused {} at {}.", variety.name, position);
                    if sink.wants(PlanEventKind::CellRejected) {
                        sink.send(PlanEvent::CellRejected {
                            row: row.index,
                            position,
                            variety: variety.name.clone(),
                        });
                    }
                    continue;
                }
            }

            allocator.advance(species)?;
            row_cursor += 1;

            trace!("Placing {} at {}.", variety.name, position);
            let placement = Placement::new(variety.clone(), position);
            if sink.wants(PlanEventKind::PlacementPlanned) {
                sink.send(PlanEvent::PlacementPlanned {
                    placement: placement.clone(),
                });
            }
            placements.push(placement);
        }
    }

    Ok(placements)
}

/// Bounds of the scratch garden: halved (floored) for sparse inputs, full otherwise.
pub fn scratch_bounds(
    width: f32,
    height: f32,
    variety_count: usize,
    config: &PlannerConfig,
) -> (f32, f32) {
    if variety_count < config.sparse_threshold {
        ((width / 2.0).floor(), (height / 2.0).floor())
    } else {
        (width, height)
    }
}
