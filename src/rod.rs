use tracing::debug;

use crate::bead::{Bead, EARTH_BEADS, HEAVEN_VALUE};
use crate::error::{AbacusError, Result};
use crate::layout::{Layout, Point};

/// Largest digit a single rod can show.
pub const MAX_ROD_VALUE: u8 = HEAVEN_VALUE + EARTH_BEADS;

/// One vertical column: a heaven bead followed by four earth beads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rod {
    index: usize,
    beads: [Bead; 5],
}

impl Rod {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            beads: [
                Bead::heaven(),
                Bead::earth(1),
                Bead::earth(2),
                Bead::earth(3),
                Bead::earth(4),
            ],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Heaven bead first, then earth beads by rank.
    pub fn beads(&self) -> &[Bead] {
        &self.beads
    }

    pub fn heaven(&self) -> &Bead {
        &self.beads[0]
    }

    pub fn earth(&self) -> &[Bead] {
        &self.beads[1..]
    }

    pub fn earth_count(&self) -> u8 {
        self.earth().iter().filter(|b| b.is_active()).count() as u8
    }

    pub fn value(&self) -> u8 {
        self.beads.iter().map(Bead::value).sum()
    }

    /// The bead drawn under `point`, heaven bead first.
    pub fn hit_test(&self, layout: &Layout, point: Point) -> Option<&Bead> {
        self.beads
            .iter()
            .find(|bead| layout.bead_contains(self.index, bead, point))
    }

    pub fn toggle_heaven_bead(&mut self) {
        self.beads[0].toggle();
        debug!(rod = self.index, value = self.value(), "heaven bead toggled");
    }

    /// Moves earth bead `rank` together with the beads it pushes.
    ///
    /// Pulling an active bead away from the bar takes every active bead
    /// below it along; pushing an inactive bead to the bar takes every
    /// inactive bead above it along. Afterwards exactly `rank` beads are
    /// active, or `rank - 1` if the clicked bead was the lowest active one.
    pub fn toggle_earth_bead(&mut self, rank: u8) -> Result<()> {
        if !(1..=EARTH_BEADS).contains(&rank) {
            return Err(AbacusError::EarthRank(rank));
        }
        self.snap_earth(rank);
        Ok(())
    }

    /// Toggle protocol for a rank already known to be in range.
    pub(crate) fn snap_earth(&mut self, rank: u8) {
        let clicked = rank as usize;
        if self.beads[clicked].is_active() {
            for bead in self.beads[clicked..].iter_mut().filter(|b| b.is_active()) {
                bead.toggle();
            }
        } else {
            for bead in self.beads[1..=clicked].iter_mut().filter(|b| !b.is_active()) {
                bead.toggle();
            }
        }
        debug!(rod = self.index, rank, value = self.value(), "earth bead toggled");
    }

    /// Arranges the beads so the rod shows `value`.
    pub fn set_value(&mut self, value: u8) -> Result<()> {
        if value > MAX_ROD_VALUE {
            return Err(AbacusError::RodValue(value));
        }
        if (value >= HEAVEN_VALUE) != self.heaven().is_active() {
            self.beads[0].toggle();
        }
        let earth = value % HEAVEN_VALUE;
        for bead in self.beads[1..].iter_mut() {
            if (bead.rank() <= earth) != bead.is_active() {
                bead.toggle();
            }
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        for bead in self.beads.iter_mut().filter(|b| b.is_active()) {
            bead.toggle();
        }
    }
}
