/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::HostConfig;
use crate::dispatch::DispatchEngine;
use crate::host::idle::IdleClock;
use crate::shared::{PassengerRequest, TickResult};

/**
 * Drives the dispatch engine at a fixed pace.
 *
 * The `HostDriver` owns the engine on its own thread. Passenger requests and ticks are handled from one
 * select loop, so `add_passenger` and `tick` never run concurrently. Every tick result is published for
 * whatever presents it (console, JSON consumer, sprite layer).
 *
 * # Fields
 * - `engine`:          The dispatch engine being driven.
 * - `idle_clock`:      Time since the engine last reported an idle tick.
 * - `tick_interval`:   Time between ticks.
 * - `max_ticks`:       Optional number of ticks after which the driver stops.
 * - `request_rx`:      Receives passenger requests from the input side.
 * - `tick_tx`:         Publishes the result of every tick.
 * - `terminate_rx`:    Stops the driver when anything arrives or the sender is dropped.
 *
 * The driver also stops once the request channel is closed and every passenger has been delivered.
 */
pub struct HostDriver {
    engine: DispatchEngine,
    idle_clock: IdleClock,
    tick_interval: Duration,
    max_ticks: Option<u64>,
    n_ticks: u64,

    // Channels
    request_rx: cbc::Receiver<PassengerRequest>,
    tick_tx: cbc::Sender<TickResult>,
    terminate_rx: cbc::Receiver<()>,
}

impl HostDriver {
    pub fn new(
        engine: DispatchEngine,
        config: &HostConfig,
        max_ticks: Option<u64>,
        request_rx: cbc::Receiver<PassengerRequest>,
        tick_tx: cbc::Sender<TickResult>,
        terminate_rx: cbc::Receiver<()>,
    ) -> HostDriver {
        HostDriver {
            engine,
            idle_clock: IdleClock::new(),
            tick_interval: config.tick_interval(),
            max_ticks,
            n_ticks: 0,
            request_rx,
            tick_tx,
            terminate_rx,
        }
    }

    /// Runs until terminated, out of ticks, or drained with no more input.
    /// Hands the engine back so the caller can inspect the final state.
    pub fn run(mut self) -> DispatchEngine {
        info!(
            "Dispatch driver started: {} floors, capacity {}, tick every {:?}",
            self.engine.n_floors(),
            self.engine.capacity(),
            self.tick_interval
        );

        let ticker = cbc::tick(self.tick_interval);
        let terminate_rx = self.terminate_rx.clone();
        let request_rx = self.request_rx.clone();
        let closed = cbc::never::<PassengerRequest>();
        let mut inputs_open = true;

        loop {
            let requests = if inputs_open { &request_rx } else { &closed };
            cbc::select! {
                recv(terminate_rx) -> _ => {
                    info!("Dispatch driver terminated");
                    break;
                }
                recv(requests) -> request => {
                    match request {
                        Ok(request) => self.handle_request(request),
                        Err(_) => {
                            debug!("Request channel closed");
                            inputs_open = false;
                        }
                    }
                }
                recv(ticker) -> _ => {
                    let result = self.step(Instant::now());
                    if self.tick_tx.send(result).is_err() {
                        warn!("Nobody is listening for tick results, stopping");
                        break;
                    }
                    if self.max_ticks.map_or(false, |max| self.n_ticks >= max) {
                        info!("Stopping after {} ticks", self.n_ticks);
                        break;
                    }
                    if !inputs_open && self.engine.is_drained() {
                        info!("All passengers delivered after {} ticks", self.n_ticks);
                        break;
                    }
                }
            }
        }

        self.engine
    }

    /// Runs one engine tick as of `now`, feeding it the current idle time.
    pub fn step(&mut self, now: Instant) -> TickResult {
        let idle_for = self.idle_clock.elapsed(now);
        let result = self.engine.tick(idle_for);
        self.idle_clock.record(result.idle, now);
        self.n_ticks += 1;
        result
    }

    pub fn handle_request(&mut self, request: PassengerRequest) {
        match self
            .engine
            .add_passenger(request.origin, request.destination, request.handle)
        {
            Ok(id) => debug!("Request {} queued as {}", request.handle, id),
            Err(e) => warn!(
                "Rejected request {} ({} -> {}): {}",
                request.handle, request.origin, request.destination, e
            ),
        }
    }

    pub fn engine(&self) -> &DispatchEngine {
        &self.engine
    }
}
