pub mod config;
pub mod error;
pub mod games;
pub mod identifiers;
pub mod logger;

pub use error::{EngineError, ParseDirectionError};
pub use games::snake::{
    Direction, Food, GameSnapshot, Mode, Position, SnakeGame, SnakeGameState, SnakeSettings,
    StepOutcome,
};
pub use games::{BroadcastReport, GameRng};
pub use identifiers::ObserverId;
