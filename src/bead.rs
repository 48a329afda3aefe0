use serde::{Deserialize, Serialize};

/// Value of an active heaven bead.
pub const HEAVEN_VALUE: u8 = 5;
/// Value of an active earth bead.
pub const EARTH_VALUE: u8 = 1;
/// Earth beads per rod, ranked 1..=EARTH_BEADS from the reckoning bar down.
pub const EARTH_BEADS: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeadKind {
    Heaven,
    Earth(u8),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bead {
    kind: BeadKind,
    active: bool,
}

impl Bead {
    pub(crate) fn heaven() -> Self {
        Self {
            kind: BeadKind::Heaven,
            active: false,
        }
    }

    pub(crate) fn earth(rank: u8) -> Self {
        debug_assert!((1..=EARTH_BEADS).contains(&rank));
        Self {
            kind: BeadKind::Earth(rank),
            active: false,
        }
    }

    pub fn kind(&self) -> BeadKind {
        self.kind
    }

    pub fn is_heaven(&self) -> bool {
        self.kind == BeadKind::Heaven
    }

    /// Position within the earth group; the heaven bead has rank 0.
    pub fn rank(&self) -> u8 {
        match self.kind {
            BeadKind::Heaven => 0,
            BeadKind::Earth(rank) => rank,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn value(&self) -> u8 {
        match (self.active, self.kind) {
            (false, _) => 0,
            (true, BeadKind::Heaven) => HEAVEN_VALUE,
            (true, BeadKind::Earth(_)) => EARTH_VALUE,
        }
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }
}
