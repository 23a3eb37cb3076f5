//! Planner configuration.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sampling::staggered_grid::{
    DEFAULT_EDGE_EPSILON, DEFAULT_ROW_OFFSETS, DEFAULT_STEP,
};
use crate::sampling::StaggeredGridSampling;
use crate::species::SpeciesRotation;

/// Below this many varieties the defensive scratch garden uses halved bounds.
pub const DEFAULT_SPARSE_THRESHOLD: usize = 10;

/// How strictly the grid planner validates placements and handles failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlannerMode {
    /// Place every due variety unconditionally; failures reach the caller.
    Strict,
    /// Pre-check cells against a scratch garden; failures fall back to a random scatter.
    #[default]
    Defensive,
}

impl PlannerMode {
    pub fn checks_occupancy(self) -> bool {
        matches!(self, PlannerMode::Defensive)
    }

    pub fn recovers_failures(self) -> bool {
        matches!(self, PlannerMode::Defensive)
    }
}

/// Source of the step index fed to the species rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RotationStep {
    /// Count of rotation steps taken in the current row (skips and placements).
    RowCursor,
    /// `floor(x)` of the candidate cell.
    Column,
}

/// Skip the grid entirely for small gardens with few varieties.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmallGardenFallback {
    /// Largest garden area (width * height) considered small.
    pub max_area: f32,
    /// Variety counts strictly below this are considered few.
    pub max_varieties: usize,
}

impl SmallGardenFallback {
    pub fn new(max_area: f32, max_varieties: usize) -> Self {
        Self {
            max_area,
            max_varieties,
        }
    }

    pub fn applies(&self, width: f32, height: f32, variety_count: usize) -> bool {
        width * height <= self.max_area && variety_count < self.max_varieties
    }
}

/// Configuration for a [`crate::planner::gardener::Gardener`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerConfig {
    /// Validation and failure policy.
    pub mode: PlannerMode,
    /// Step index used to look up the due species.
    pub rotation_step: RotationStep,
    /// Species order cycled along each row.
    pub rotation: SpeciesRotation,
    /// Grid spacing in garden units.
    pub step: f32,
    /// X offsets of even and odd rows.
    pub row_offsets: [f32; 2],
    /// Slack past the right edge when generating columns.
    pub edge_epsilon: f32,
    /// Variety count below which the scratch garden is halved.
    pub sparse_threshold: usize,
    /// Optional shortcut to the random scatter for small gardens.
    pub small_garden_fallback: Option<SmallGardenFallback>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::defensive()
    }
}

impl PlannerConfig {
    /// Occupancy-checked planner with random fallback, stepping the rotation per row.
    pub fn defensive() -> Self {
        Self {
            mode: PlannerMode::Defensive,
            rotation_step: RotationStep::RowCursor,
            rotation: SpeciesRotation::default(),
            step: DEFAULT_STEP,
            row_offsets: DEFAULT_ROW_OFFSETS,
            edge_epsilon: DEFAULT_EDGE_EPSILON,
            sparse_threshold: DEFAULT_SPARSE_THRESHOLD,
            small_garden_fallback: None,
        }
    }

    /// Unchecked planner without fallback, stepping the rotation by column.
    pub fn strict() -> Self {
        Self {
            mode: PlannerMode::Strict,
            rotation_step: RotationStep::Column,
            ..Self::defensive()
        }
    }

    pub fn with_mode(mut self, mode: PlannerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_rotation_step(mut self, rotation_step: RotationStep) -> Self {
        self.rotation_step = rotation_step;
        self
    }

    pub fn with_rotation(mut self, rotation: SpeciesRotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn with_row_offsets(mut self, row_offsets: [f32; 2]) -> Self {
        self.row_offsets = row_offsets;
        self
    }

    pub fn with_edge_epsilon(mut self, edge_epsilon: f32) -> Self {
        self.edge_epsilon = edge_epsilon;
        self
    }

    pub fn with_sparse_threshold(mut self, sparse_threshold: usize) -> Self {
        self.sparse_threshold = sparse_threshold;
        self
    }

    pub fn with_small_garden_fallback(mut self, rule: SmallGardenFallback) -> Self {
        self.small_garden_fallback = Some(rule);
        self
    }

    /// Grid sampler described by this configuration.
    pub fn grid(&self) -> StaggeredGridSampling {
        StaggeredGridSampling::new(self.step)
            .with_row_offsets(self.row_offsets)
            .with_edge_epsilon(self.edge_epsilon)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(Error::InvalidConfig("step must be finite and > 0".into()));
        }
        if !self.edge_epsilon.is_finite()
            || self.edge_epsilon < 0.0
            || self.edge_epsilon >= self.step
        {
            return Err(Error::InvalidConfig(
                "edge_epsilon must be in [0, step)".into(),
            ));
        }
        if self
            .row_offsets
            .iter()
            .any(|o| !o.is_finite() || *o < 0.0 || *o >= self.step)
        {
            return Err(Error::InvalidConfig(
                "row_offsets must be in [0, step)".into(),
            ));
        }
        if self.rotation.is_empty() {
            return Err(Error::InvalidConfig(
                "rotation must name at least one species".into(),
            ));
        }
        if let Some(rule) = &self.small_garden_fallback {
            if !rule.max_area.is_finite() || rule.max_area < 0.0 {
                return Err(Error::InvalidConfig(
                    "small_garden_fallback.max_area must be finite and >= 0".into(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::Species;

    #[test]
    fn presets_pick_their_rotation_step() {
        assert_eq!(PlannerConfig::default().mode, PlannerMode::Defensive);
        assert_eq!(
            PlannerConfig::defensive().rotation_step,
            RotationStep::RowCursor
        );
        let strict = PlannerConfig::strict();
        assert_eq!(strict.mode, PlannerMode::Strict);
        assert_eq!(strict.rotation_step, RotationStep::Column);
        assert_eq!(strict.sparse_threshold, DEFAULT_SPARSE_THRESHOLD);
    }

    #[test]
    fn mode_policies() {
        assert!(PlannerMode::Defensive.checks_occupancy());
        assert!(PlannerMode::Defensive.recovers_failures());
        assert!(!PlannerMode::Strict.checks_occupancy());
        assert!(!PlannerMode::Strict.recovers_failures());
    }

    #[test]
    fn builder_sets_fields() {
        let config = PlannerConfig::defensive()
            .with_mode(PlannerMode::Strict)
            .with_rotation_step(RotationStep::Column)
            .with_rotation(SpeciesRotation::new(vec![Species::Begonia]))
            .with_step(2.0)
            .with_row_offsets([0.0, 1.0])
            .with_edge_epsilon(0.2)
            .with_sparse_threshold(4)
            .with_small_garden_fallback(SmallGardenFallback::new(16.0, 5));
        assert!(config.validate().is_ok());
        assert_eq!(config.grid().row_offset(1), 1.0);
        assert_eq!(config.grid().step, 2.0);
        assert_eq!(config.sparse_threshold, 4);
        assert!(config.small_garden_fallback.is_some());
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(PlannerConfig::default().with_step(0.0).validate().is_err());
        assert!(PlannerConfig::default()
            .with_step(f32::NAN)
            .validate()
            .is_err());
        assert!(PlannerConfig::default()
            .with_edge_epsilon(1.0)
            .validate()
            .is_err());
        assert!(PlannerConfig::default()
            .with_row_offsets([0.0, 1.5])
            .validate()
            .is_err());
        assert!(PlannerConfig::default()
            .with_rotation(SpeciesRotation::new(Vec::new()))
            .validate()
            .is_err());
        assert!(PlannerConfig::default()
            .with_small_garden_fallback(SmallGardenFallback::new(-1.0, 3))
            .validate()
            .is_err());
    }

    #[test]
    fn small_garden_rule_needs_both_conditions() {
        let rule = SmallGardenFallback::new(16.0, 5);
        assert!(rule.applies(4.0, 4.0, 4));
        assert!(!rule.applies(4.0, 4.0, 5));
        assert!(!rule.applies(5.0, 4.0, 1));
    }
}
