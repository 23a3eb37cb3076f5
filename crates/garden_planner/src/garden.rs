//! The garden abstraction consumed by the planner, and [`Plot`], a reference implementation.
use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::variety::PlantVariety;

/// A point on the garden plane. Not snapped to integers.
pub type Position = Vec2;

/// Handle returned by a garden for an accepted plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlantId(pub usize);

/// A bounded planting area that validates and records placements.
pub trait Garden {
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    /// Whether `variety` could be planted at `position` right now.
    fn can_place_plant(&self, variety: &PlantVariety, position: Position) -> bool;

    /// Plant `variety` at `position`. `None` means the garden rejected it.
    fn add_plant(&mut self, variety: &PlantVariety, position: Position) -> Option<PlantId>;

    /// Build an empty, independent garden of the same kind with the given bounds.
    ///
    /// Used by the planner as a scratch occupancy model.
    fn scratch(&self, width: f32, height: f32) -> Result<Self>
    where
        Self: Sized;
}

/// A plant recorded in a [`Plot`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plant {
    pub id: PlantId,
    pub variety: PlantVariety,
    pub position: Position,
}

/// Rectangular garden with inclusive bounds and radius-based spacing.
///
/// A plant is accepted when its position lies in `[0, width] x [0, height]` and no
/// planted neighbour is closer than the larger of the two radii.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plot {
    width: f32,
    height: f32,
    plants: Vec<Plant>,
}

impl Plot {
    pub fn try_new(width: f32, height: f32) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(Error::InvalidBounds { width, height });
        }
        Ok(Self::new(width, height))
    }

    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "plot bounds must be non-negative"
        );
        Self {
            width,
            height,
            plants: Vec::new(),
        }
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    fn contains(&self, position: Position) -> bool {
        (0.0..=self.width).contains(&position.x) && (0.0..=self.height).contains(&position.y)
    }
}

impl Garden for Plot {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn can_place_plant(&self, variety: &PlantVariety, position: Position) -> bool {
        if !self.contains(position) {
            return false;
        }
        self.plants.iter().all(|plant| {
            let spacing = plant.variety.radius.max(variety.radius);
            plant.position.distance(position) >= spacing
        })
    }

    fn add_plant(&mut self, variety: &PlantVariety, position: Position) -> Option<PlantId> {
        if !self.can_place_plant(variety, position) {
            return None;
        }
        let id = PlantId(self.plants.len());
        self.plants.push(Plant {
            id,
            variety: variety.clone(),
            position,
        });
        Some(id)
    }

    fn scratch(&self, width: f32, height: f32) -> Result<Self> {
        Plot::try_new(width, height)
    }
}
