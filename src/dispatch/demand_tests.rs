/*
 * Unit tests for the queue model and the direction helpers
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_unload_keeps_remaining_order
 * - test_boarding_respects_capacity
 * - test_lookahead_limit_hides_waiting_demand
 * - test_decide_prefers_current_direction
 * - test_idle_motion
 * - test_clamp_at_boundaries
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod demand_tests {
    use crate::dispatch::demand::{clamp, decide, idle_motion, Demand, Motion};
    use crate::dispatch::queues::{Car, FloorQueues};
    use crate::shared::Direction::{Down, Up};
    use crate::shared::{Floor, Passenger, PassengerId, PassengerState};
    use std::time::Duration;

    fn passenger(id: u64, origin: Floor, destination: Floor) -> Passenger {
        Passenger::new(PassengerId(id), origin, destination, id)
    }

    /// Builds a car at `floor` carrying one passenger per destination.
    fn loaded_car(capacity: usize, floor: Floor, destinations: &[Floor]) -> Car {
        let mut car = Car::new(capacity);
        for (i, destination) in destinations.iter().enumerate() {
            let direction = if *destination > floor { Up } else { Down };
            let queue = vec![passenger(100 + i as u64, floor, *destination)];
            let (boarded, remaining) = car.board_from(queue, floor, direction);
            assert_eq!(boarded.len(), 1);
            assert!(remaining.is_empty());
        }
        car
    }

    #[test]
    fn test_unload_keeps_remaining_order() {
        // Purpose: Verify that unloading removes exactly the passengers for this floor, in order

        // Arrange
        let mut car = loaded_car(8, 0, &[2, 3, 2, 4]);

        // Act
        let leaving = car.unload_at(2);

        // Assert
        assert_eq!(
            leaving.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![PassengerId(100), PassengerId(102)]
        );
        assert!(leaving.iter().all(|p| p.state == PassengerState::Delivered));
        assert_eq!(
            car.passengers().iter().map(|p| p.destination).collect::<Vec<_>>(),
            vec![3, 4]
        );
    }

    #[test]
    fn test_boarding_respects_capacity() {
        // Purpose: Verify that boarding stops once the car is full and keeps the rest queued

        // Arrange
        let mut car = Car::new(2);
        let queue = vec![
            passenger(0, 1, 3),
            passenger(1, 1, 0),
            passenger(2, 1, 4),
            passenger(3, 1, 2),
        ];

        // Act
        let (boarded, remaining) = car.board_from(queue, 1, Up);

        // Assert
        assert_eq!(boarded, vec![PassengerId(0), PassengerId(2)]);
        assert!(car.is_full());
        assert_eq!(
            remaining.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![PassengerId(1), PassengerId(3)]
        );
        assert!(remaining.iter().all(|p| p.state == PassengerState::Waiting));
    }

    #[test]
    fn test_lookahead_limit_hides_waiting_demand() {
        // Purpose: Verify that waiting calls stop counting as demand once occupancy reaches the limit

        // Arrange
        let mut queues = FloorQueues::new(5);
        queues.push(passenger(0, 3, 4));
        let car = loaded_car(8, 1, &[0; 7]);

        // Act
        let at_limit = Demand {
            queues: &queues,
            car: &car,
            lookahead_limit: 7,
        };
        let below_limit = Demand {
            queues: &queues,
            car: &car,
            lookahead_limit: 8,
        };

        // Assert
        assert!(!at_limit.exists(1, Up));
        assert!(at_limit.exists(1, Down));
        assert!(below_limit.exists(1, Up));
        assert_eq!(decide(&at_limit, 1, Up), Some(Motion::Move(Down)));
    }

    #[test]
    fn test_decide_prefers_current_direction() {
        // Purpose: Verify the keep-going, reverse, idle and hold branches of the decision

        // Arrange
        let mut queues = FloorQueues::new(5);
        queues.push(passenger(0, 0, 2));
        queues.push(passenger(1, 4, 1));
        let empty_car = Car::new(8);
        let both_sides = Demand {
            queues: &queues,
            car: &empty_car,
            lookahead_limit: 7,
        };
        let no_queues = FloorQueues::new(5);
        let nothing = Demand {
            queues: &no_queues,
            car: &empty_car,
            lookahead_limit: 7,
        };
        let car_only_here = loaded_car(8, 2, &[3]);
        let car_demand = Demand {
            queues: &no_queues,
            car: &car_only_here,
            lookahead_limit: 7,
        };

        // Assert
        assert_eq!(decide(&both_sides, 2, Up), Some(Motion::Move(Up)));
        assert_eq!(decide(&both_sides, 2, Down), Some(Motion::Move(Down)));
        assert_eq!(decide(&both_sides, 4, Up), Some(Motion::Move(Down)));
        assert_eq!(decide(&nothing, 2, Up), None);
        assert_eq!(decide(&car_demand, 2, Down), Some(Motion::Move(Up)));
        assert_eq!(decide(&car_demand, 3, Down), Some(Motion::Hold(Down)));
    }

    #[test]
    fn test_idle_motion() {
        // Purpose: Verify the idle threshold, the ground-floor case and the flip switch

        // Arrange
        let threshold = Duration::from_secs(5);
        let short = Duration::from_secs(1);

        // Assert
        assert_eq!(idle_motion(3, Up, threshold, threshold, true), Motion::Move(Down));
        assert_eq!(idle_motion(0, Up, threshold, threshold, true), Motion::Hold(Up));
        assert_eq!(idle_motion(3, Up, short, threshold, true), Motion::Hold(Down));
        assert_eq!(idle_motion(3, Up, short, threshold, false), Motion::Hold(Up));
    }

    #[test]
    fn test_clamp_at_boundaries() {
        // Purpose: Verify that the ground and top floors force the direction

        // Assert
        assert_eq!(clamp(0, 4, Down), Up);
        assert_eq!(clamp(4, 4, Up), Down);
        assert_eq!(clamp(2, 4, Down), Down);
        assert_eq!(clamp(2, 4, Up), Up);
    }
}
