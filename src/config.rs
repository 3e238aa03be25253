/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub host: HostConfig,
}

/**
 * Parameters of the dispatch engine.
 *
 * # Fields
 * - `n_floors`:            Number of floors served, at least 2.
 * - `capacity`:            Maximum number of passengers in the car.
 * - `lookahead_limit`:     Waiting passengers on other floors only count as demand while
 *                          the car holds fewer than this many passengers.
 * - `idle_threshold_ms`:   Idle time after which an empty car heads for the ground floor.
 * - `idle_flip`:           Flip direction in place while idle below the threshold.
 * - `turnaround_boarding`: Board passengers at the current floor heading the new way
 *                          before a reversing car departs.
 * - `passenger_weight_kg`: Weight used for the car load readout.
 */
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DispatchConfig {
    pub n_floors: u8,
    pub capacity: usize,
    pub lookahead_limit: usize,
    pub idle_threshold_ms: u64,
    pub idle_flip: bool,
    pub turnaround_boarding: bool,
    pub passenger_weight_kg: u32,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    pub tick_interval_ms: u64,
}

impl Default for DispatchConfig {
    fn default() -> DispatchConfig {
        DispatchConfig {
            n_floors: 5,
            capacity: 8,
            lookahead_limit: 7,
            idle_threshold_ms: 5000,
            idle_flip: true,
            turnaround_boarding: true,
            passenger_weight_kg: 70,
        }
    }
}

impl Default for HostConfig {
    fn default() -> HostConfig {
        HostConfig {
            tick_interval_ms: 500,
        }
    }
}

impl DispatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_floors < 2 {
            return Err(ConfigError::TooFewFloors(self.n_floors));
        }
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.lookahead_limit == 0 {
            return Err(ConfigError::ZeroLookahead);
        }
        if self.lookahead_limit > self.capacity {
            return Err(ConfigError::LookaheadExceedsCapacity {
                lookahead_limit: self.lookahead_limit,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    pub fn idle_threshold(&self) -> Duration {
        Duration::from_millis(self.idle_threshold_ms)
    }
}

impl HostConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.dispatch.validate()?;
    Ok(config)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

/***************************************/
/*             Unit tests              */
/***************************************/
