/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Floor index. Signed so that out-of-range input from a host can be
/// represented and rejected instead of wrapping.
pub type Floor = i32;

/// Opaque value a host uses to correlate a passenger with its sprite.
pub type Handle = u64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Floor reached by moving one step in this direction.
    pub fn step(self, floor: Floor) -> Floor {
        match self {
            Direction::Up => floor + 1,
            Direction::Down => floor - 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PassengerState {
    Waiting,
    Boarded,
    Delivered,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PassengerId(pub u64);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Passenger {
    pub id: PassengerId,
    pub origin: Floor,
    pub destination: Floor,
    pub state: PassengerState,
    pub handle: Handle,
}

impl Passenger {
    pub fn new(id: PassengerId, origin: Floor, destination: Floor, handle: Handle) -> Passenger {
        Passenger {
            id,
            origin,
            destination,
            state: PassengerState::Waiting,
            handle,
        }
    }

    /// True if travelling from `floor` to this passenger's destination means going `direction`.
    pub fn heads(&self, floor: Floor, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.destination > floor,
            Direction::Down => self.destination < floor,
        }
    }
}

/**
 * Outcome of a single dispatch tick.
 *
 * # Fields
 * - `floor`:       Floor the car is at after the tick.
 * - `direction`:   Travel direction after the boundary clamp.
 * - `boarded`:     Passengers loaded at the floor the tick started on, in boarding order.
 * - `alighted`:    Passengers delivered at the floor the tick started on, in car order.
 * - `idle`:        Whether the car was empty with no demand and idle-handling ran.
 * - `load_kg`:     Car load after the tick.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TickResult {
    pub floor: Floor,
    pub direction: Direction,
    pub boarded: Vec<PassengerId>,
    pub alighted: Vec<PassengerId>,
    pub idle: bool,
    #[serde(rename = "loadKg")]
    pub load_kg: u32,
}

/// A host-side request to spawn a waiting passenger.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerRequest {
    pub origin: Floor,
    pub destination: Floor,
    pub handle: Handle,
}
