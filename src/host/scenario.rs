/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::info;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::thread::sleep;
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatch::DispatchEngine;
use crate::shared::{Floor, Handle, PassengerRequest, ScenarioError};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Arrival {
    pub at_ms: u64,
    pub origin: Floor,
    pub destination: Floor,
}

/**
 * A scripted list of passenger arrivals.
 *
 * Arrivals are replayed in `at_ms` order, each `at_ms` being an offset from the start of playback.
 * Handles are assigned sequentially from 0 in playback order.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Scenario {
    pub arrivals: Vec<Arrival>,
}

impl Scenario {
    pub fn parse(scenario_str: &str) -> Result<Scenario, ScenarioError> {
        let mut scenario: Scenario = serde_json::from_str(scenario_str)?;
        scenario.arrivals.sort_by_key(|arrival| arrival.at_ms);
        Ok(scenario)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Scenario, ScenarioError> {
        let scenario_str = fs::read_to_string(path)?;
        Scenario::parse(&scenario_str)
    }

    /// Checks every arrival against the engine's floors before anything is played.
    pub fn validate(&self, engine: &DispatchEngine) -> Result<(), ScenarioError> {
        for (index, arrival) in self.arrivals.iter().enumerate() {
            engine
                .check_request(arrival.origin, arrival.destination)
                .map_err(|source| ScenarioError::Arrival { index, source })?;
        }
        Ok(())
    }

    pub fn requests(&self) -> impl Iterator<Item = (Duration, PassengerRequest)> + '_ {
        self.arrivals.iter().enumerate().map(|(i, arrival)| {
            (
                Duration::from_millis(arrival.at_ms),
                PassengerRequest {
                    origin: arrival.origin,
                    destination: arrival.destination,
                    handle: i as Handle,
                },
            )
        })
    }

    /// Sends every arrival on `request_tx` at its offset. Stops early if the receiver is gone.
    pub fn play(&self, request_tx: &cbc::Sender<PassengerRequest>) {
        let start = Instant::now();
        for (offset, request) in self.requests() {
            let due = start + offset;
            let now = Instant::now();
            if due > now {
                sleep(due - now);
            }
            info!(
                "Passenger {} calls at floor {} for floor {}",
                request.handle, request.origin, request.destination
            );
            if request_tx.send(request).is_err() {
                return;
            }
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod scenario_tests {
    use super::*;
    use crate::config::DispatchConfig;
    use crate::shared::DispatchError;

    const SCENARIO: &str = r#"{
        "arrivals": [
            { "at_ms": 300, "origin": 4, "destination": 0 },
            { "at_ms": 0,   "origin": 0, "destination": 3 },
            { "at_ms": 100, "origin": 2, "destination": 1 }
        ]
    }"#;

    #[test]
    fn test_parse_sorts_arrivals() {
        // Purpose: Verify that arrivals are replayed in time order with sequential handles

        // Act
        let scenario = Scenario::parse(SCENARIO).unwrap();
        let requests: Vec<(Duration, PassengerRequest)> = scenario.requests().collect();

        // Assert
        assert_eq!(
            requests.iter().map(|(at, _)| at.as_millis()).collect::<Vec<_>>(),
            vec![0, 100, 300]
        );
        assert_eq!(
            requests[2].1,
            PassengerRequest {
                origin: 4,
                destination: 0,
                handle: 2
            }
        );
    }

    #[test]
    fn test_validate_against_engine() {
        // Purpose: Verify that arrivals outside the building are caught before playback

        // Arrange
        let engine = DispatchEngine::new(&DispatchConfig::default()).unwrap();
        let scenario = Scenario::parse(SCENARIO).unwrap();
        let mut bad = scenario.clone();
        bad.arrivals.push(Arrival {
            at_ms: 400,
            origin: 5,
            destination: 0,
        });

        // Assert
        assert!(scenario.validate(&engine).is_ok());
        assert!(matches!(
            bad.validate(&engine),
            Err(ScenarioError::Arrival {
                index: 3,
                source: DispatchError::InvalidFloor { floor: 5, .. }
            })
        ));
    }

    #[test]
    fn test_play_sends_every_arrival() {
        // Purpose: Verify that playback forwards each arrival over the channel

        // Arrange
        let scenario = Scenario::parse(SCENARIO).unwrap();
        let (request_tx, request_rx) = cbc::unbounded::<PassengerRequest>();

        // Act
        scenario.play(&request_tx);

        // Assert
        let origins: Vec<Floor> = request_rx.try_iter().map(|r| r.origin).collect();
        assert_eq!(origins, vec![0, 2, 4]);
    }

    #[test]
    fn test_malformed_scenario() {
        // Purpose: Verify that broken JSON is reported as a parse error

        // Assert
        assert!(matches!(
            Scenario::parse("{ \"arrivals\": [ { \"at_ms\": 0 } ] }"),
            Err(ScenarioError::Parse(_))
        ));
    }
}
