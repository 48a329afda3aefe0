use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bead::{Bead, BeadKind};
use crate::error::{AbacusError, Result};
use crate::layout::{Layout, Point};
use crate::rod::Rod;
use crate::value::Decimal;

/// How rod positions map to powers of ten.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceValueMode {
    /// Rightmost rod is the units rod.
    #[default]
    Standard,
    /// Rod `pivot` is the units rod; rods to its right hold fractions.
    Decimal { pivot: usize },
}

/// A bead found under the pointer, with the rod holding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeadHit<'a> {
    pub rod: usize,
    pub bead: &'a Bead,
}

#[derive(Clone, Debug)]
pub struct Abacus {
    rods: Vec<Rod>,
    mode: PlaceValueMode,
    layout: Layout,
}

impl Abacus {
    pub fn new(rod_count: usize) -> Result<Self> {
        Self::with_layout(rod_count, Layout::default())
    }

    pub fn with_layout(rod_count: usize, layout: Layout) -> Result<Self> {
        Ok(Self {
            rods: build_rods(rod_count)?,
            mode: PlaceValueMode::Standard,
            layout,
        })
    }

    pub fn rods(&self) -> &[Rod] {
        &self.rods
    }

    pub fn rod(&self, index: usize) -> Option<&Rod> {
        self.rods.get(index)
    }

    /// Mutable access to a single rod, for driving the bead protocol directly.
    pub fn rod_mut(&mut self, index: usize) -> Result<&mut Rod> {
        let rod_count = self.rods.len();
        self.rods
            .get_mut(index)
            .ok_or(AbacusError::RodIndex { index, rod_count })
    }

    pub fn rod_count(&self) -> usize {
        self.rods.len()
    }

    pub fn mode(&self) -> PlaceValueMode {
        self.mode
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn reset(&mut self) {
        for rod in &mut self.rods {
            rod.reset();
        }
    }

    /// Throws away every rod and builds `rod_count` fresh ones.
    ///
    /// A decimal pivot that no longer fits moves to the middle rod.
    pub fn rebuild(&mut self, rod_count: usize) -> Result<()> {
        let rods = build_rods(rod_count)?;
        if let PlaceValueMode::Decimal { pivot } = self.mode
            && pivot >= rod_count
        {
            let middle = rod_count / 2;
            warn!(pivot, rod_count, middle, "decimal pivot out of range after rebuild, using middle rod");
            self.mode = PlaceValueMode::Decimal { pivot: middle };
        }
        self.rods = rods;
        Ok(())
    }

    pub fn set_place_value_mode(&mut self, mode: PlaceValueMode) -> Result<()> {
        if let PlaceValueMode::Decimal { pivot } = mode
            && pivot >= self.rods.len()
        {
            return Err(AbacusError::Pivot {
                pivot,
                rod_count: self.rods.len(),
            });
        }
        self.mode = mode;
        Ok(())
    }

    /// Power of ten for the rod at `rod_index`, derived from the current mode.
    pub fn exponent(&self, rod_index: usize) -> i32 {
        let i = rod_index as i32;
        match self.mode {
            PlaceValueMode::Standard => self.rods.len() as i32 - 1 - i,
            PlaceValueMode::Decimal { pivot } => pivot as i32 - i,
        }
    }

    /// Digits after the decimal point: the rods right of the units rod.
    pub fn fraction_digits(&self) -> u32 {
        match self.mode {
            PlaceValueMode::Standard => 0,
            PlaceValueMode::Decimal { pivot } => (self.rods.len() - 1 - pivot) as u32,
        }
    }

    pub fn total_value(&self) -> Decimal {
        let places = self
            .rods
            .iter()
            .map(|rod| (rod.value() as u32, self.exponent(rod.index())));
        Decimal::from_places(places, self.fraction_digits())
    }

    pub fn formatted_value(&self) -> String {
        self.total_value().to_string()
    }

    /// Shows `text` on the rods, one digit per rod.
    ///
    /// Numbers needing a place the abacus does not have are rejected and
    /// leave the beads untouched.
    pub fn set_value(&mut self, text: &str) -> Result<()> {
        let value: Decimal = text.parse()?;
        let highest = self.exponent(0);
        let lowest = self.exponent(self.rods.len() - 1);
        if value
            .places()
            .any(|(exponent, _)| exponent > highest || exponent < lowest)
        {
            return Err(AbacusError::Unrepresentable(text.to_string()));
        }
        for i in 0..self.rods.len() {
            let digit = value.digit(self.exponent(i));
            self.rods[i].set_value(digit)?;
        }
        debug!(value = %self.formatted_value(), "abacus value set");
        Ok(())
    }

    /// First bead drawn under `point`, scanning rods left to right.
    pub fn hit_test(&self, point: Point) -> Option<BeadHit<'_>> {
        self.rods.iter().find_map(|rod| {
            rod.hit_test(&self.layout, point).map(|bead| BeadHit {
                rod: rod.index(),
                bead,
            })
        })
    }

    /// Toggles the bead under `point`. Returns whether a bead was hit.
    pub fn handle_click(&mut self, point: Point) -> bool {
        let Some((rod, kind)) = self.hit_test(point).map(|hit| (hit.rod, hit.bead.kind())) else {
            return false;
        };
        let rod = &mut self.rods[rod];
        match kind {
            BeadKind::Heaven => rod.toggle_heaven_bead(),
            BeadKind::Earth(rank) => rod.snap_earth(rank),
        }
        true
    }
}

fn build_rods(rod_count: usize) -> Result<Vec<Rod>> {
    if rod_count < 1 {
        return Err(AbacusError::RodCount(rod_count));
    }
    Ok((0..rod_count).map(Rod::new).collect())
}
