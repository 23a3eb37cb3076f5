//! Planning pipeline: configuration, grid and fallback planners, commit step and events.
use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::variety::PlantVariety;

pub mod commit;
pub mod config;
pub mod events;
pub mod fallback;
pub mod gardener;
pub mod hex;

/// A variety paired with the position it is planned for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    pub variety: PlantVariety,
    pub position: Vec2,
}

impl Placement {
    pub fn new(variety: PlantVariety, position: Vec2) -> Self {
        Self { variety, position }
    }
}
