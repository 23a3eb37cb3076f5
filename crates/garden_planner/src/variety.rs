//! Plant variety records and the per-species allocator used while walking the grid.
//!
//! The input variety list is a multiset: several entries may share a name, and each
//! entry is an individual plant to place. [`SpeciesPartition`] groups the entries by
//! species without de-duplicating them, and [`VarietyAllocator`] hands them out in
//! input order, one per successful placement.
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::species::Species;

pub const DEFAULT_VARIETY_RADIUS: f32 = 1.0;

/// An immutable plant variety record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlantVariety {
    /// Display name. Not unique.
    pub name: String,
    /// Species the variety belongs to.
    pub species: Species,
    /// Footprint radius, consulted only by occupancy checks.
    pub radius: f32,
}

impl PlantVariety {
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        Self {
            name: name.into(),
            species,
            radius: DEFAULT_VARIETY_RADIUS,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// Varieties grouped by species, in input order within each group.
#[derive(Debug, Clone, Default)]
pub struct SpeciesPartition {
    groups: [Vec<PlantVariety>; Species::COUNT],
}

impl SpeciesPartition {
    /// Group `varieties` by species.
    ///
    /// Duplicates are kept: two entries named "Azalea" are two plants, and the
    /// allocator consumes them one after another.
    pub fn from_varieties(varieties: &[PlantVariety]) -> Self {
        let mut groups: [Vec<PlantVariety>; Species::COUNT] = Default::default();
        for variety in varieties {
            groups[variety.species.index()].push(variety.clone());
        }
        Self { groups }
    }

    pub fn varieties(&self, species: Species) -> &[PlantVariety] {
        &self.groups[species.index()]
    }

    /// Total number of varieties across all species.
    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Multiplicity of each variety name.
    pub fn name_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for variety in self.groups.iter().flatten() {
            *counts.entry(variety.name.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Fresh allocator with every cursor at zero.
    pub fn allocator(&self) -> VarietyAllocator<'_> {
        VarietyAllocator {
            partition: self,
            cursors: [0; Species::COUNT],
        }
    }
}

/// Outcome of asking the allocator for a species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Allocation<'a> {
    Variety(&'a PlantVariety),
    /// Every variety of the species has been consumed. Skip the slot.
    Exhausted,
}

/// Per-species consumption cursors over a [`SpeciesPartition`].
#[derive(Debug, Clone)]
pub struct VarietyAllocator<'a> {
    partition: &'a SpeciesPartition,
    cursors: [usize; Species::COUNT],
}

impl<'a> VarietyAllocator<'a> {
    /// The variety at the cursor for `species`, without consuming it.
    pub fn peek(&self, species: Species) -> Allocation<'a> {
        let group = self.partition.varieties(species);
        match group.get(self.cursors[species.index()]) {
            Some(variety) => Allocation::Variety(variety),
            None => Allocation::Exhausted,
        }
    }

    /// Consume the variety at the cursor for `species`.
    pub fn advance(&mut self, species: Species) -> Result<()> {
        let len = self.partition.varieties(species).len();
        let cursor = &mut self.cursors[species.index()];
        if *cursor >= len {
            return Err(Error::Planning(format!(
                "cursor for {species} advanced past its {len} varieties"
            )));
        }
        *cursor += 1;
        Ok(())
    }

    /// Return the variety at the cursor for `species` and advance past it.
    pub fn next_unconsumed(&mut self, species: Species) -> Allocation<'a> {
        let allocation = self.peek(species);
        if matches!(allocation, Allocation::Variety(_)) {
            self.cursors[species.index()] += 1;
        }
        allocation
    }

    pub fn consumed(&self, species: Species) -> usize {
        self.cursors[species.index()]
    }

    pub fn remaining(&self, species: Species) -> usize {
        self.partition.varieties(species).len() - self.consumed(species)
    }

    pub fn is_exhausted(&self, species: Species) -> bool {
        self.remaining(species) == 0
    }
}
