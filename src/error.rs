use thiserror::Error;

pub type Result<T> = std::result::Result<T, AbacusError>;

#[derive(Debug, Error)]
pub enum AbacusError {
    #[error("an abacus needs at least one rod, got {0}")]
    RodCount(usize),

    #[error("earth bead rank must be in 1..=4, got {0}")]
    EarthRank(u8),

    #[error("decimal pivot {pivot} is outside rods 0..{rod_count}")]
    Pivot { pivot: usize, rod_count: usize },

    #[error("rod index {index} is outside rods 0..{rod_count}")]
    RodIndex { index: usize, rod_count: usize },

    #[error("a rod shows a single digit, got {0}")]
    RodValue(u8),

    #[error("cannot show {0:?} on this abacus")]
    Unrepresentable(String),

    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
}
