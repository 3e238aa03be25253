/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, trace};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::DispatchConfig;
use crate::dispatch::demand::{self, Demand, Motion};
use crate::dispatch::queues::{Car, FloorQueues};
use crate::shared::{
    ConfigError, Direction, DispatchError, Floor, Handle, Passenger, PassengerId, PassengerState,
    TickResult,
};

/**
 * Single-car elevator dispatcher.
 *
 * The `DispatchEngine` owns the floor queues and the car. A host calls `add_passenger` when someone
 * presses a call button and `tick` once per frame; each tick unloads, loads, then picks the next move.
 * The engine never blocks and keeps no clock of its own; idle time is supplied by the caller.
 *
 * # Fields
 * - `queues`:          Waiting passengers per floor.
 * - `car`:             Boarded passengers in loading order.
 * - `current_floor`:   Floor the car is at.
 * - `direction`:       Current travel commitment.
 * - `n_floors`:        Number of floors served.
 * - `lookahead_limit`: Occupancy below which waiting passengers elsewhere count as demand.
 * - `idle_threshold`:  Idle time after which an empty car heads for the ground floor.
 * - `idle_flip`:       Whether an idle car turns around in place while under the threshold.
 * - `turnaround_boarding`: Whether a reversing car first picks up passengers at its floor heading the new way.
 * - `passenger_weight_kg`: Weight per passenger for the load readout.
 * - `next_id`:         Next passenger id to hand out.
 */
#[derive(Debug, Clone)]
pub struct DispatchEngine {
    queues: FloorQueues,
    car: Car,
    current_floor: Floor,
    direction: Direction,
    n_floors: u8,
    lookahead_limit: usize,
    idle_threshold: Duration,
    idle_flip: bool,
    turnaround_boarding: bool,
    passenger_weight_kg: u32,
    next_id: u64,
}

impl DispatchEngine {
    pub fn new(config: &DispatchConfig) -> Result<DispatchEngine, ConfigError> {
        config.validate()?;

        Ok(DispatchEngine {
            queues: FloorQueues::new(config.n_floors),
            car: Car::new(config.capacity),
            current_floor: 0,
            direction: Direction::Up,
            n_floors: config.n_floors,
            lookahead_limit: config.lookahead_limit,
            idle_threshold: config.idle_threshold(),
            idle_flip: config.idle_flip,
            turnaround_boarding: config.turnaround_boarding,
            passenger_weight_kg: config.passenger_weight_kg,
            next_id: 0,
        })
    }

    /// Queues a new waiting passenger at `origin`.
    pub fn add_passenger(
        &mut self,
        origin: Floor,
        destination: Floor,
        handle: Handle,
    ) -> Result<PassengerId, DispatchError> {
        self.check_request(origin, destination)?;

        let id = PassengerId(self.next_id);
        self.next_id += 1;
        self.queues.push(Passenger::new(id, origin, destination, handle));
        debug!("{} waiting at floor {} for floor {}", id, origin, destination);

        Ok(id)
    }

    /// Validates a request without queueing it.
    pub fn check_request(&self, origin: Floor, destination: Floor) -> Result<(), DispatchError> {
        self.check_floor(origin)?;
        self.check_floor(destination)?;
        if origin == destination {
            return Err(DispatchError::SameFloor { floor: origin });
        }
        Ok(())
    }

    pub fn tick(&mut self, idle_for: Duration) -> TickResult {
        let floor = self.current_floor;

        // 1. Unload
        let alighted: Vec<PassengerId> = self
            .car
            .unload_at(floor)
            .into_iter()
            .map(|p| p.id)
            .collect();
        for id in alighted.iter() {
            debug!("{} delivered at floor {}", id, floor);
        }

        // 2. Load
        let mut boarded = self.board(floor, self.direction);

        // 3. Decide direction and move
        let decision = {
            let demand = Demand {
                queues: &self.queues,
                car: &self.car,
                lookahead_limit: self.lookahead_limit,
            };
            demand::decide(&demand, floor, self.direction)
        };
        let (motion, idle) = match decision {
            Some(motion) => (motion, false),
            None => {
                let motion = demand::idle_motion(
                    floor,
                    self.direction,
                    idle_for,
                    self.idle_threshold,
                    self.idle_flip,
                );
                trace!("Idle at floor {} for {:?}: {:?}", floor, idle_for, motion);
                (motion, true)
            }
        };

        match motion {
            Motion::Move(direction) => {
                if direction != self.direction && self.turnaround_boarding {
                    boarded.extend(self.board(floor, direction));
                }
                self.direction = direction;
                self.current_floor = direction.step(floor);
            }
            Motion::Hold(direction) => self.direction = direction,
        }

        // 4. Boundary clamp
        self.direction = demand::clamp(self.current_floor, self.top_floor(), self.direction);

        trace!(
            "Tick at floor {} -> floor {} {:?}, car {}/{}",
            floor,
            self.current_floor,
            self.direction,
            self.car.len(),
            self.car.capacity()
        );

        TickResult {
            floor: self.current_floor,
            direction: self.direction,
            boarded,
            alighted,
            idle,
            load_kg: self.car_load_kg(),
        }
    }

    /// Number of passengers waiting at `floor`; zero for floors that do not exist.
    pub fn passenger_count(&self, floor: Floor) -> usize {
        self.waiting(floor).len()
    }

    pub fn waiting(&self, floor: Floor) -> &[Passenger] {
        match self.check_floor(floor) {
            Ok(()) => self.queues.at(floor),
            Err(_) => &[],
        }
    }

    pub fn car(&self) -> &[Passenger] {
        self.car.passengers()
    }

    pub fn car_len(&self) -> usize {
        self.car.len()
    }

    pub fn capacity(&self) -> usize {
        self.car.capacity()
    }

    pub fn car_load_kg(&self) -> u32 {
        self.car.len() as u32 * self.passenger_weight_kg
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    /// True when nobody is waiting and the car is empty.
    pub fn is_drained(&self) -> bool {
        self.car.is_empty() && self.queues.waiting_total() == 0
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.car.find(id).or_else(|| self.queues.find(id))
    }

    /// Delivered passengers are dropped from the model, so any issued id that
    /// is no longer held reports `Delivered`.
    pub fn passenger_state(&self, id: PassengerId) -> Option<PassengerState> {
        match self.passenger(id) {
            Some(passenger) => Some(passenger.state),
            None if id.0 < self.next_id => Some(PassengerState::Delivered),
            None => None,
        }
    }

    /// Moves passengers at `floor` heading `direction` into the car.
    fn board(&mut self, floor: Floor, direction: Direction) -> Vec<PassengerId> {
        let queue = self.queues.take(floor);
        let (boarded, remaining) = self.car.board_from(queue, floor, direction);
        self.queues.restore(floor, remaining);
        for id in boarded.iter() {
            debug!("{} boarded at floor {} going {:?}", id, floor, direction);
        }
        boarded
    }

    fn top_floor(&self) -> Floor {
        Floor::from(self.n_floors) - 1
    }

    fn check_floor(&self, floor: Floor) -> Result<(), DispatchError> {
        if floor < 0 || floor > self.top_floor() {
            return Err(DispatchError::InvalidFloor {
                floor,
                n_floors: self.n_floors,
            });
        }
        Ok(())
    }
}
