/* 3rd party libraries */
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use log::{info, warn};
use std::io::{self, BufRead};
use std::thread::Builder;

/* Custom libraries */
use elevator_sim::config;
use elevator_sim::host::{parse_request_line, HostDriver, Scenario};
use elevator_sim::shared::{Direction, PassengerRequest, TickResult};
use elevator_sim::unwrap_or_exit;
use elevator_sim::DispatchEngine;

/* Main */
fn main() {
    env_logger::init();

    let matches = Command::new("elevator-sim")
        .about("Single-car elevator dispatch simulation")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .default_value("config.toml")
                .help("Configuration file"),
        )
        .arg(
            Arg::new("scenario")
                .short('s')
                .long("scenario")
                .value_name("FILE")
                .takes_value(true)
                .help("Replay arrivals from a JSON scenario instead of reading stdin"),
        )
        .arg(
            Arg::new("ticks")
                .short('n')
                .long("ticks")
                .value_name("N")
                .takes_value(true)
                .help("Stop after N ticks"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print every tick result as a JSON line"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path));
    let max_ticks = match matches.value_of("ticks") {
        Some(n) => Some(unwrap_or_exit!(n.parse::<u64>())),
        None => None,
    };
    let json = matches.is_present("json");

    // Create the engine
    let engine = unwrap_or_exit!(DispatchEngine::new(&config.dispatch));

    let scenario = match matches.value_of("scenario") {
        Some(path) => {
            let scenario = unwrap_or_exit!(Scenario::load(path));
            unwrap_or_exit!(scenario.validate(&engine));
            Some(scenario)
        }
        None => None,
    };

    // Initialize channels
    let (request_tx, request_rx) = cbc::unbounded::<PassengerRequest>();
    let (tick_tx, tick_rx) = cbc::unbounded::<TickResult>();
    let (_terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the dispatch driver
    let driver = HostDriver::new(
        engine,
        &config.host,
        max_ticks,
        request_rx,
        tick_tx,
        terminate_rx,
    );
    let driver_thread = unwrap_or_exit!(Builder::new()
        .name("dispatch_driver".into())
        .spawn(move || driver.run()));

    // Start the input side
    let input_thread = Builder::new().name("input".into());
    match scenario {
        Some(scenario) => {
            info!("Playing {} scripted arrivals", scenario.arrivals.len());
            unwrap_or_exit!(input_thread.spawn(move || scenario.play(&request_tx)));
        }
        None => {
            info!("Reading requests from stdin as \"<origin> <destination>\"");
            unwrap_or_exit!(input_thread.spawn(move || read_requests(request_tx)));
        }
    }

    // Present every tick until the driver stops
    for result in tick_rx.iter() {
        if json {
            match serde_json::to_string(&result) {
                Ok(line) => println!("{}", line),
                Err(e) => warn!("Failed to serialize tick result: {}", e),
            }
        } else {
            println!("{}", describe(&result));
        }
    }

    match driver_thread.join() {
        Ok(engine) => info!(
            "Finished at floor {} with {} aboard",
            engine.current_floor(),
            engine.car_len()
        ),
        Err(_) => warn!("Dispatch driver panicked"),
    }
}

fn read_requests(request_tx: cbc::Sender<PassengerRequest>) {
    let mut next_handle = 0;
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read stdin: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_request_line(&line) {
            Ok((origin, destination)) => {
                let request = PassengerRequest {
                    origin,
                    destination,
                    handle: next_handle,
                };
                next_handle += 1;
                if request_tx.send(request).is_err() {
                    break;
                }
            }
            Err(e) => warn!("{}", e),
        }
    }
}

fn describe(result: &TickResult) -> String {
    let arrow = match result.direction {
        Direction::Up => "up",
        Direction::Down => "down",
    };
    let mut line = format!("floor {} {:<4} load {:>4} kg", result.floor, arrow, result.load_kg);
    if !result.boarded.is_empty() {
        let ids: Vec<String> = result.boarded.iter().map(|id| id.to_string()).collect();
        line.push_str(&format!(" | boarded {}", ids.join(" ")));
    }
    if !result.alighted.is_empty() {
        let ids: Vec<String> = result.alighted.iter().map(|id| id.to_string()).collect();
        line.push_str(&format!(" | alighted {}", ids.join(" ")));
    }
    if result.idle {
        line.push_str(" | idle");
    }
    line
}
