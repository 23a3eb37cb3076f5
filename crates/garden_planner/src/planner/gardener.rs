//! High-level gardener that plans a variety multiset and commits it to a garden.
use std::collections::BTreeMap;

use rand::RngCore;
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::garden::Garden;
use crate::planner::commit::{commit_placements, CommitReport};
use crate::planner::config::PlannerConfig;
use crate::planner::events::{EventSink, PlanEvent, PlanEventKind};
use crate::planner::fallback::plan_random;
use crate::planner::hex::plan_hex_grid;
use crate::planner::Placement;
use crate::variety::{PlantVariety, SpeciesPartition};

/// Which planner produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlanStrategy {
    HexGrid,
    RandomFallback,
}

/// A finished plan.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanOutcome {
    /// Planned placements in emission order.
    pub placements: Vec<Placement>,
    /// Planner that produced `placements`.
    pub strategy: PlanStrategy,
    /// Message of the grid failure that triggered the fallback, if any.
    pub failure: Option<String>,
}

/// Result of planning and committing into a garden.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct CultivationReport {
    pub outcome: PlanOutcome,
    pub commit: CommitReport,
}

/// Owns a variety multiset and plans it onto gardens.
///
/// The species partition is built once here; every planning call starts from
/// fresh cursors, so one gardener can plan any number of gardens, including
/// from several threads at once.
#[derive(Debug, Clone)]
pub struct Gardener {
    config: PlannerConfig,
    varieties: Vec<PlantVariety>,
    partition: SpeciesPartition,
}

impl Gardener {
    pub fn try_new(varieties: Vec<PlantVariety>, config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(varieties, config))
    }

    pub fn new(varieties: Vec<PlantVariety>, config: PlannerConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "planner config must be valid");

        let partition = SpeciesPartition::from_varieties(&varieties);
        debug!(
            "Gardener ({:?}) with {} varieties: {:?}.",
            config.mode,
            varieties.len(),
            partition.name_counts()
        );
        let unrotated = varieties
            .iter()
            .filter(|v| !config.rotation.species().contains(&v.species))
            .count();
        if unrotated > 0 {
            warn!(
                "{} varieties belong to species outside the rotation and can only be placed by the fallback.",
                unrotated
            );
        }

        Self {
            config,
            varieties,
            partition,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn varieties(&self) -> &[PlantVariety] {
        &self.varieties
    }

    pub fn partition(&self) -> &SpeciesPartition {
        &self.partition
    }

    /// Multiplicity of each variety name.
    pub fn variety_counts(&self) -> BTreeMap<&str, usize> {
        self.partition.name_counts()
    }

    /// Plans `garden`, drawing fallback positions from the thread-local RNG.
    pub fn plan<G: Garden>(&self, garden: &G) -> Result<PlanOutcome> {
        let mut rng = rand::rng();
        self.plan_with_rng(garden, &mut rng)
    }

    pub fn plan_with_rng<G: Garden>(
        &self,
        garden: &G,
        rng: &mut impl RngCore,
    ) -> Result<PlanOutcome> {
        self.plan_with_events(garden, rng, &mut ())
    }

    /// Plans `garden`, reporting progress to `sink`.
    ///
    /// In defensive mode a failing grid walk is replaced by the random scatter and
    /// the failure is recorded in [`PlanOutcome::failure`]; in strict mode the
    /// error is returned.
    pub fn plan_with_events<G: Garden>(
        &self,
        garden: &G,
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<PlanOutcome> {
        let (width, height) = (garden.width(), garden.height());
        info!(
            "Planning {} varieties on a {} x {} garden ({:?}).",
            self.varieties.len(),
            width,
            height,
            self.config.mode
        );
        if sink.wants(PlanEventKind::PlanStarted) {
            sink.send(PlanEvent::PlanStarted {
                mode: self.config.mode,
                variety_count: self.varieties.len(),
                width,
                height,
            });
        }

        let small_garden = self
            .config
            .small_garden_fallback
            .is_some_and(|rule| rule.applies(width, height, self.varieties.len()));

        let outcome = if small_garden {
            debug!("Small garden with few varieties; using random placements.");
            PlanOutcome {
                placements: plan_random(garden, &self.varieties, rng),
                strategy: PlanStrategy::RandomFallback,
                failure: None,
            }
        } else {
            match plan_hex_grid(garden, &self.partition, &self.config, sink) {
                Ok(placements) => PlanOutcome {
                    placements,
                    strategy: PlanStrategy::HexGrid,
                    failure: None,
                },
                Err(e) if self.config.mode.recovers_failures() => {
                    warn!("Hexagonal placement failed: {e}. Falling back to random placements.");
                    let reason = e.to_string();
                    if sink.wants(PlanEventKind::FallbackEngaged) {
                        sink.send(PlanEvent::FallbackEngaged {
                            reason: reason.clone(),
                        });
                    }
                    PlanOutcome {
                        placements: plan_random(garden, &self.varieties, rng),
                        strategy: PlanStrategy::RandomFallback,
                        failure: Some(reason),
                    }
                }
                Err(e) => return Err(e),
            }
        };

        info!(
            "Planned {} of {} varieties ({:?}).",
            outcome.placements.len(),
            self.varieties.len(),
            outcome.strategy
        );
        if sink.wants(PlanEventKind::PlanFinished) {
            sink.send(PlanEvent::PlanFinished {
                strategy: outcome.strategy,
                placements: outcome.placements.len(),
            });
        }

        Ok(outcome)
    }

    /// Plans `garden` and commits the plan into it.
    pub fn cultivate<G: Garden>(&self, garden: &mut G) -> Result<CultivationReport> {
        let mut rng = rand::rng();
        self.cultivate_with_rng(garden, &mut rng)
    }

    pub fn cultivate_with_rng<G: Garden>(
        &self,
        garden: &mut G,
        rng: &mut impl RngCore,
    ) -> Result<CultivationReport> {
        self.cultivate_with_events(garden, rng, &mut ())
    }

    pub fn cultivate_with_events<G: Garden>(
        &self,
        garden: &mut G,
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<CultivationReport> {
        let outcome = self.plan_with_events(garden, rng, sink)?;
        let commit = commit_placements(garden, &outcome.placements, sink);
        Ok(CultivationReport { outcome, commit })
    }
}
