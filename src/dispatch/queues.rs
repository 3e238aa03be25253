/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Floor, Passenger, PassengerId, PassengerState};

/**
 * Waiting passengers, one FIFO queue per floor.
 *
 * Callers index with floors that have already been validated against the
 * floor count; an out-of-range floor is a bug in the engine, not bad input.
 */
#[derive(Debug, Clone)]
pub struct FloorQueues {
    queues: Vec<Vec<Passenger>>,
}

impl FloorQueues {
    pub fn new(n_floors: u8) -> FloorQueues {
        FloorQueues {
            queues: vec![Vec::new(); n_floors as usize],
        }
    }

    pub fn push(&mut self, passenger: Passenger) {
        self.queues[passenger.origin as usize].push(passenger);
    }

    pub fn at(&self, floor: Floor) -> &[Passenger] {
        &self.queues[floor as usize]
    }

    /// Takes the queue at `floor` out, leaving it empty until `restore` is called.
    pub fn take(&mut self, floor: Floor) -> Vec<Passenger> {
        std::mem::take(&mut self.queues[floor as usize])
    }

    pub fn restore(&mut self, floor: Floor, queue: Vec<Passenger>) {
        self.queues[floor as usize] = queue;
    }

    pub fn any_above(&self, floor: Floor) -> bool {
        self.queues
            .iter()
            .skip(floor as usize + 1)
            .any(|queue| !queue.is_empty())
    }

    pub fn any_below(&self, floor: Floor) -> bool {
        self.queues
            .iter()
            .take(floor as usize)
            .any(|queue| !queue.is_empty())
    }

    pub fn waiting_total(&self) -> usize {
        self.queues.iter().map(Vec::len).sum()
    }

    pub fn find(&self, id: PassengerId) -> Option<&Passenger> {
        self.queues.iter().flatten().find(|p| p.id == id)
    }
}

/// Boarded passengers in physical loading order.
#[derive(Debug, Clone)]
pub struct Car {
    passengers: Vec<Passenger>,
    capacity: usize,
}

impl Car {
    pub fn new(capacity: usize) -> Car {
        Car {
            passengers: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn find(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.id == id)
    }

    pub fn any_heading(&self, floor: Floor, direction: Direction) -> bool {
        self.passengers.iter().any(|p| p.heads(floor, direction))
    }

    /// Removes every passenger whose destination is `floor`. Remaining
    /// passengers keep their relative order.
    pub fn unload_at(&mut self, floor: Floor) -> Vec<Passenger> {
        let (mut leaving, staying): (Vec<Passenger>, Vec<Passenger>) =
            std::mem::take(&mut self.passengers)
                .into_iter()
                .partition(|p| p.destination == floor);
        self.passengers = staying;
        for passenger in leaving.iter_mut() {
            passenger.state = PassengerState::Delivered;
        }
        leaving
    }

    /// Moves passengers heading `direction` from `queue` into the car until
    /// it is full. Passengers heading the other way are skipped, not blocking.
    /// Returns the boarded ids in boarding order and what is left of the queue.
    pub fn board_from(
        &mut self,
        queue: Vec<Passenger>,
        floor: Floor,
        direction: Direction,
    ) -> (Vec<PassengerId>, Vec<Passenger>) {
        let mut boarded = Vec::new();
        let mut remaining = Vec::with_capacity(queue.len());

        for mut passenger in queue {
            if !self.is_full() && passenger.heads(floor, direction) {
                passenger.state = PassengerState::Boarded;
                boarded.push(passenger.id);
                self.passengers.push(passenger);
            } else {
                remaining.push(passenger);
            }
        }

        (boarded, remaining)
    }
}
