use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, RwLockReadGuard};
use tokio::time::{Instant, MissedTickBehavior, interval};

use crate::games::{BroadcastReport, GameRng, ObserverRegistry};
use crate::{EngineError, ObserverId, log, log_warn};
use super::game_state::{GameSnapshot, SnakeGameState};
use super::settings::SnakeSettings;
use super::types::{Direction, Mode};

/// What a single pass of the tick loop did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing to simulate: not restarted yet, or finished.
    Idle,
    /// A fresh game switched to running. Nothing moved yet.
    Started,
    /// The snake moved and observers were notified.
    Advanced(BroadcastReport),
}

/// Shared handle to the one game of the process. Cheap to clone.
///
/// Game state sits behind a single read/write lock. The tick loop in
/// [`run`](Self::run) is the only writer of positions, food and mode
/// transitions; other callers only change intent through
/// [`restart`](Self::restart) and [`set_direction`](Self::set_direction).
#[derive(Clone)]
pub struct SnakeGame {
    state: Arc<RwLock<SnakeGameState>>,
    observers: Arc<ObserverRegistry<SnakeGame>>,
    tick_interval: Duration,
}

impl SnakeGame {
    pub fn new(settings: SnakeSettings) -> Self {
        Self::with_rng(settings, GameRng::from_random())
    }

    pub fn with_rng(settings: SnakeSettings, rng: GameRng) -> Self {
        let tick_interval = settings.tick_interval();
        log!("Game created with seed {}", rng.seed());
        Self {
            state: Arc::new(RwLock::new(SnakeGameState::new(settings, rng))),
            observers: Arc::new(ObserverRegistry::new()),
            tick_interval,
        }
    }

    pub async fn restart(&self, width: i32, height: i32, food_count: usize) {
        self.state.write().await.restart(width, height, food_count);
        log!("Game restarted: {}x{} with {} food", width, height, food_count);
    }

    /// Turns the snake unless it already heads that way.
    ///
    /// The check runs under the read lock and the turn under the write lock, so
    /// two concurrent calls with the same new direction can both get through and
    /// record two turn vertices at the same spot. The extra vertex is a
    /// zero-length segment that the tail shrink drops once it reaches the end.
    pub async fn set_direction(&self, direction: Direction) {
        if self.state.read().await.direction() == direction {
            return;
        }

        self.state
            .write()
            .await
            .set_direction(direction, Instant::now());
    }

    pub fn add_observer<F, Fut>(&self, on_update: F) -> ObserverId
    where
        F: Fn(SnakeGame) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), String>> + Send + 'static,
    {
        self.observers.add(on_update)
    }

    pub fn remove_observer(&self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, SnakeGameState> {
        self.state.read().await
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.state.read().await.snapshot()
    }

    pub async fn mode(&self) -> Mode {
        self.state.read().await.mode
    }

    /// Drives the game at the configured tick rate until `shutdown` resolves,
    /// then reports [`EngineError::Cancelled`].
    pub async fn run<F>(&self, shutdown: F) -> Result<(), EngineError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            _ = shutdown => {
                log!("Game loop stopping");
                Err(EngineError::Cancelled)
            }
            never = self.tick_forever() => match never {},
        }
    }

    async fn tick_forever(&self) -> Infallible {
        let mut ticker = interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.step().await;
        }
    }

    /// One iteration of the tick loop.
    ///
    /// Advancing happens under the write lock. Observers run after it is
    /// released, and this returns only when every one of them has finished.
    pub async fn step(&self) -> StepOutcome {
        {
            let mut state = self.state.write().await;
            match state.mode {
                Mode::New => {
                    state.start(Instant::now());
                    log!("Game started");
                    return StepOutcome::Started;
                }
                Mode::Running => state.advance(Instant::now()),
                Mode::NotInitialized | Mode::Finished => return StepOutcome::Idle,
            }
        }

        let report = self.observers.broadcast(self.clone()).await;
        for (id, error) in &report.failures {
            log_warn!("Update for {} failed: {}", id, error);
        }
        StepOutcome::Advanced(report)
    }
}
