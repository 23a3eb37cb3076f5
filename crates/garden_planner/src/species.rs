//! Species catalog and the rotation table that decides which species is due at a grid step.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plant species known to the planner. Declaration order is the catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Species {
    Rhododendron,
    Geranium,
    Begonia,
}

impl Species {
    /// Number of species in the catalog.
    pub const COUNT: usize = 3;

    /// All species in declaration order.
    pub const ALL: [Species; Species::COUNT] =
        [Species::Rhododendron, Species::Geranium, Species::Begonia];

    /// Position of this species in [`Species::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Rhododendron => "RHODODENDRON",
            Species::Geranium => "GERANIUM",
            Species::Begonia => "BEGONIA",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default shift applied to the step index on odd (offset) rows.
pub const DEFAULT_ODD_ROW_SHIFT: usize = 2;

/// Fixed cyclic order in which species become due along a grid row.
///
/// Even rows use `step mod n`, odd rows use `(step + odd_row_shift) mod n`, so
/// the same species does not line up across the staggered row boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeciesRotation {
    order: Vec<Species>,
    odd_row_shift: usize,
}

impl Default for SpeciesRotation {
    fn default() -> Self {
        Self::new(Species::ALL.to_vec())
    }
}

impl SpeciesRotation {
    /// Create a rotation over `order` with the default odd-row shift.
    pub fn new(order: Vec<Species>) -> Self {
        Self {
            order,
            odd_row_shift: DEFAULT_ODD_ROW_SHIFT,
        }
    }

    /// Set the shift applied to the step index on odd rows.
    pub fn with_odd_row_shift(mut self, shift: usize) -> Self {
        self.odd_row_shift = shift;
        self
    }

    pub fn species(&self) -> &[Species] {
        &self.order
    }

    pub fn odd_row_shift(&self) -> usize {
        self.odd_row_shift
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Index into the rotation order for `step` on grid row `row`.
    ///
    /// Returns `None` only when the rotation is empty.
    pub fn slot(&self, step: usize, row: usize) -> Option<usize> {
        let n = self.order.len();
        if n == 0 {
            return None;
        }
        let shifted = if row % 2 == 1 {
            step.wrapping_add(self.odd_row_shift)
        } else {
            step
        };
        Some(shifted % n)
    }

    /// The species due at `step` on grid row `row`.
    pub fn due(&self, step: usize, row: usize) -> Option<Species> {
        self.slot(step, row).map(|i| self.order[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_index() {
        for (i, s) in Species::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
        assert!(Species::Rhododendron < Species::Begonia);
    }

    #[test]
    fn even_rows_cycle_from_first_species() {
        let rotation = SpeciesRotation::default();
        let due: Vec<_> = (0..4).map(|s| rotation.due(s, 0).unwrap()).collect();
        assert_eq!(
            due,
            vec![
                Species::Rhododendron,
                Species::Geranium,
                Species::Begonia,
                Species::Rhododendron
            ]
        );
    }

    #[test]
    fn odd_rows_are_shifted_by_two() {
        let rotation = SpeciesRotation::default();
        assert_eq!(rotation.due(0, 1), Some(Species::Begonia));
        assert_eq!(rotation.due(1, 1), Some(Species::Rhododendron));
        assert_eq!(rotation.due(0, 2), Some(Species::Rhododendron));
        assert_eq!(rotation.due(0, 3), Some(Species::Begonia));
    }

    #[test]
    fn two_species_shift_lands_on_same_parity() {
        let rotation = SpeciesRotation::new(vec![Species::Rhododendron, Species::Geranium]);
        for step in 0..6 {
            assert_eq!(rotation.due(step, 0), rotation.due(step, 1));
        }
    }

    #[test]
    fn custom_shift_is_applied() {
        let rotation = SpeciesRotation::default().with_odd_row_shift(1);
        assert_eq!(rotation.due(0, 1), Some(Species::Geranium));
    }

    #[test]
    fn empty_rotation_has_no_due_species() {
        let rotation = SpeciesRotation::new(Vec::new());
        assert!(rotation.is_empty());
        assert_eq!(rotation.due(3, 0), None);
    }
}
