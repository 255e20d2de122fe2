use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

const MAX_SPEED: f64 = 10_000.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub ticks_per_second: u32,
    /// Arena units per second.
    pub speed: f64,
    pub food_radius: f64,
    pub initial_length: i32,
}

impl SnakeSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            ticks_per_second: 120,
            speed: 20.0,
            food_radius: 10.0,
            initial_length: 40,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if !(1..=1000).contains(&self.ticks_per_second) {
            return Err("ticks_per_second must be between 1 and 1000".to_string());
        }
        if !self.speed.is_finite() || self.speed <= 0.0 || self.speed > MAX_SPEED {
            return Err(format!("speed must be positive and at most {}", MAX_SPEED));
        }
        if !self.food_radius.is_finite() || self.food_radius <= 0.0 {
            return Err("food_radius must be a positive number".to_string());
        }
        if self.initial_length < 1 {
            return Err("initial_length must be at least 1".to_string());
        }
        Ok(())
    }
}
