#![forbid(unsafe_code)]
//! garden_planner: species-rotating staggered-grid layout planning for plant varieties.
//!
//! Modules:
//! - species: the species catalog and the rotation table deciding which species is due
//! - variety: plant variety records and the per-species allocator
//! - garden: the garden abstraction consumed by the planner plus the reference [`garden::Plot`]
//! - sampling: candidate generation (staggered grid rows, uniform random)
//! - planner: configuration, hex grid and fallback planners, commit step, events, gardener
pub mod error;
pub mod garden;
pub mod planner;
pub mod sampling;
pub mod species;
pub mod variety;

/// Convenient re-exports for common types. Import with `use garden_planner::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::garden::{Garden, Plant, PlantId, Plot, Position};
    pub use crate::planner::commit::{commit_placements, CommitReport};
    pub use crate::planner::config::{
        PlannerConfig, PlannerMode, RotationStep, SmallGardenFallback,
    };
    pub use crate::planner::events::{
        EventSink, FnSink, MultiSink, PlanEvent, PlanEventKind, VecSink,
    };
    pub use crate::planner::fallback::plan_random;
    pub use crate::planner::gardener::{CultivationReport, Gardener, PlanOutcome, PlanStrategy};
    pub use crate::planner::hex::plan_hex_grid;
    pub use crate::planner::Placement;
    pub use crate::sampling::{PositionSampling, StaggeredGridSampling, UniformRandomSampling};
    pub use crate::species::{Species, SpeciesRotation};
    pub use crate::variety::{Allocation, PlantVariety, SpeciesPartition, VarietyAllocator};
}
