mod broadcaster;
mod game_rng;
pub mod snake;

pub use broadcaster::{BroadcastReport, ObserverRegistry, UpdateFn};
pub use game_rng::GameRng;
