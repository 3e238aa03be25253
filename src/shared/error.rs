/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::structs::Floor;

/***************************************/
/*            Error types              */
/***************************************/
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("floor {floor} is outside 0..{n_floors}")]
    InvalidFloor { floor: Floor, n_floors: u8 },

    #[error("origin and destination are both floor {floor}")]
    SameFloor { floor: Floor },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("at least 2 floors are required, got {0}")]
    TooFewFloors(u8),

    #[error("car capacity must be at least 1")]
    ZeroCapacity,

    #[error("lookahead limit must be at least 1")]
    ZeroLookahead,

    #[error("lookahead limit {lookahead_limit} exceeds capacity {capacity}")]
    LookaheadExceedsCapacity {
        lookahead_limit: usize,
        capacity: usize,
    },
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("arrival #{index} is invalid: {source}")]
    Arrival {
        index: usize,
        #[source]
        source: DispatchError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected \"<origin> <destination>\", got {0:?}")]
    Format(String),

    #[error("not a floor number: {0}")]
    Floor(#[from] std::num::ParseIntError),
}
