use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatch::queues::{Car, FloorQueues};
use crate::shared::{Direction, Floor};

/***************************************/
/*               Enums                 */
/***************************************/

/// What the car does in step 3 of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Travel one floor in the given direction.
    Move(Direction),
    /// Stay at the floor, possibly facing a new direction.
    Hold(Direction),
}

/// Demand on one side of a floor, as seen by the direction decision.
pub struct Demand<'a> {
    pub queues: &'a FloorQueues,
    pub car: &'a Car,
    pub lookahead_limit: usize,
}

impl<'a> Demand<'a> {
    /// Waiting passengers on other floors only count while the car has room
    /// below the lookahead limit; boarded destinations always count.
    pub fn exists(&self, floor: Floor, direction: Direction) -> bool {
        let has_room = self.car.len() < self.lookahead_limit;
        let waiting = match direction {
            Direction::Up => self.queues.any_above(floor),
            Direction::Down => self.queues.any_below(floor),
        };
        (waiting && has_room) || self.car.any_heading(floor, direction)
    }
}

/// Direction decision for a car at `floor` currently facing `direction`.
/// Returns `None` when the car is empty and has nothing to serve on either
/// side, leaving the call to idle-handling.
pub fn decide(demand: &Demand, floor: Floor, direction: Direction) -> Option<Motion> {
    if demand.exists(floor, direction) {
        Some(Motion::Move(direction))
    } else if demand.exists(floor, direction.opposite()) {
        Some(Motion::Move(direction.opposite()))
    } else if demand.car.is_empty() {
        None
    } else {
        Some(Motion::Hold(direction))
    }
}

/// Idle-handling: return toward the ground floor once idle for long enough,
/// otherwise optionally turn around to look for calls on the other side.
pub fn idle_motion(
    floor: Floor,
    direction: Direction,
    idle_for: Duration,
    threshold: Duration,
    flip: bool,
) -> Motion {
    if idle_for >= threshold {
        if floor > 0 {
            Motion::Move(Direction::Down)
        } else {
            Motion::Hold(direction)
        }
    } else if flip {
        Motion::Hold(direction.opposite())
    } else {
        Motion::Hold(direction)
    }
}

/// Forces `Up` on the ground floor and `Down` on the top floor.
pub fn clamp(floor: Floor, top: Floor, direction: Direction) -> Direction {
    if floor == 0 {
        Direction::Up
    } else if floor == top {
        Direction::Down
    } else {
        direction
    }
}
