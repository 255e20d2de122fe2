mod game;
mod game_state;
pub mod geometry;
mod settings;
mod types;

pub use game::{SnakeGame, StepOutcome};
pub use game_state::{GameSnapshot, SnakeGameState};
pub use settings::SnakeSettings;
pub use types::{Direction, Food, Mode, Position};
